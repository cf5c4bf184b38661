//! gzip backends and build-time backend selection.
//!
//! Both backends implement [`GzipBackend`]. Which one the programs use is
//! decided once, at build time, by the `compression` Cargo feature:
//!
//! ```toml
//! [dependencies]
//! gzgreet = { version = "0.1", default-features = false }  # recorded only
//! ```
//!
//! ## Submodules
//!
//! | Module | Backend | Available |
//! |--------|---------|-----------|
//! | [`deflate`]  | [`Deflate`]: compresses with `flate2` | `compression` feature |
//! | [`recorded`] | [`Recorded`]: replays a pre-recorded stream | always |
//!
//! [`selected`] is the only place that branches on the feature.

#[cfg(feature = "compression")]
pub mod deflate;

pub mod recorded;

#[cfg(feature = "compression")]
pub use deflate::Deflate;
pub use recorded::Recorded;

use crate::Result;

/// Something that turns one complete input buffer into one gzip member.
pub trait GzipBackend {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Compress `input` as a single, finished gzip member.
    fn gzip(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// The backend chosen for this build.
///
/// [`Deflate`] with the `compression` feature, [`Recorded`] without it.
pub fn selected() -> &'static dyn GzipBackend {
    #[cfg(feature = "compression")]
    {
        &Deflate
    }
    #[cfg(not(feature = "compression"))]
    {
        &Recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "compression")]
    #[test]
    fn selects_deflate_with_compression() {
        assert_eq!(selected().name(), "deflate");
    }

    #[cfg(not(feature = "compression"))]
    #[test]
    fn selects_recorded_without_compression() {
        assert_eq!(selected().name(), "recorded");
    }
}
