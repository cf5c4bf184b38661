//! Replay of the pre-recorded gzip stream for builds without a compressor.

use crate::backend::GzipBackend;
use crate::greeting::{GREETING, RECORDED_GREETING_GZ};
use crate::{Error, Result};

/// Returns [`RECORDED_GREETING_GZ`] for [`GREETING`] and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recorded;

impl GzipBackend for Recorded {
    fn name(&self) -> &'static str {
        "recorded"
    }

    /// Returns [`Error::BackendUnavailable`] for any input other than
    /// [`GREETING`].
    fn gzip(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input != GREETING {
            return Err(Error::BackendUnavailable);
        }
        Ok(RECORDED_GREETING_GZ.to_vec())
    }
}
