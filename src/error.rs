//! Library-wide error and result types.

use std::fmt;
use std::io;

/// Result alias used throughout gzgreet.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
#[derive(Debug)]
pub enum Error {
    /// The stream does not start with the gzip magic `1f 8b`.
    BadMagic,
    /// The gzip member uses a compression method other than deflate (8).
    UnsupportedMethod(u8),
    /// The stream ended before the fixed header and trailer could be read.
    UnexpectedEof,
    /// The compressed output would not fit in the reserved output buffer.
    CapacityExceeded { len: usize, capacity: usize },
    /// The recorded backend has no recording for the requested input.
    BackendUnavailable,
    /// Writing the compressed bytes to the sink failed.
    Io(io::Error),
    /// The gzip encoder failed to compress or finalize.
    #[cfg(feature = "compression")]
    Deflate(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadMagic => write!(f, "bad gzip magic"),
            Error::UnsupportedMethod(m) => write!(f, "unsupported compression method: {m}"),
            Error::UnexpectedEof => write!(f, "unexpected end of gzip stream"),
            Error::CapacityExceeded { len, capacity } => {
                write!(f, "compressed output of {len} bytes exceeds capacity of {capacity}")
            }
            Error::BackendUnavailable => write!(f, "no compression backend for this input"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "compression")]
            Error::Deflate(e) => write!(f, "deflate compression failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            #[cfg(feature = "compression")]
            Error::Deflate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
