//! gzip compression through `flate2` (requires the `compression` feature).
//!
//! Encoder settings are fixed:
//!
//! * level 9 ([`Compression::best`]), which also sets XFL to 2 in the header,
//! * deflate with the full 32 KiB window and the default strategy,
//! * gzip framing with mtime 0, OS byte 3 and no name or comment, so the
//!   same input always yields the same bytes.

#![cfg(feature = "compression")]

use std::io::Write;

use flate2::{Compression, GzBuilder};

use crate::backend::GzipBackend;
use crate::greeting::OUTPUT_CAPACITY;
use crate::member::OS_UNIX;
use crate::{Error, Result};

/// Compresses with a fresh `flate2` gzip encoder per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deflate;

impl GzipBackend for Deflate {
    fn name(&self) -> &'static str {
        "deflate"
    }

    /// The encoder is consumed by `finish` or dropped on the error path.
    ///
    /// Returns [`Error::Deflate`] if writing or finalizing fails.
    fn gzip(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzBuilder::new()
            .operating_system(OS_UNIX)
            .write(Vec::with_capacity(OUTPUT_CAPACITY), Compression::best());
        encoder.write_all(input).map_err(Error::Deflate)?;
        encoder.finish().map_err(Error::Deflate)
    }
}
