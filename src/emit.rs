//! The compress-and-emit routine shared by both programs.

use std::io::Write;

use tracing::{debug, trace};

use crate::backend::GzipBackend;
use crate::greeting::{GREETING, OUTPUT_CAPACITY};
use crate::member::GzipMember;
use crate::{Error, Result};

/// Compress [`GREETING`] with `backend` and write the gzip stream to `out`.
///
/// Returns the number of bytes written. Nothing is written unless the
/// whole stream was produced and fits in [`OUTPUT_CAPACITY`].
pub fn emit_greeting<W: Write>(backend: &dyn GzipBackend, out: &mut W) -> Result<usize> {
    let gz = backend.gzip(GREETING)?;
    if gz.len() > OUTPUT_CAPACITY {
        return Err(Error::CapacityExceeded {
            len: gz.len(),
            capacity: OUTPUT_CAPACITY,
        });
    }

    debug!(backend = backend.name(), len = gz.len(), "emitting greeting");
    if let Ok(member) = GzipMember::parse(&gz) {
        trace!(
            crc32 = member.crc32,
            uncompressed = member.isize,
            os = member.os,
            "gzip member"
        );
    }

    out.write_all(&gz)?;
    out.flush()?;
    Ok(gz.len())
}
