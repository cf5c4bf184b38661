//! Inspection of a single gzip member's fixed header and trailer.
//!
//! ## Layout (RFC 1952)
//! ```text
//! [0x00]  Magic       1F 8B
//! [0x02]  Method      08 = deflate
//! [0x03]  Flags       FTEXT/FHCRC/FEXTRA/FNAME/FCOMMENT bits
//! [0x04]  MTime       u32 LE, 0 = not set
//! [0x08]  ExtraFlags  2 = best compression, 4 = fastest
//! [0x09]  OS          3 = Unix, 255 = unknown
//! [...]   Optional fields (per Flags), then deflate data
//! [-0x08] CRC-32      u32 LE, of the uncompressed data
//! [-0x04] ISIZE       u32 LE, uncompressed length mod 2^32
//! ```
//!
//! The deflate payload is never decoded here.

use std::io::Cursor;

use crate::utils::{bytesa, le_u32, magic, u8};
use crate::{Error, Result};

/// gzip magic bytes.
pub const GZIP_MAGIC: &[u8; 2] = b"\x1f\x8b";

/// The only compression method gzip defines.
pub const METHOD_DEFLATE: u8 = 8;

/// OS byte written for Unix hosts.
pub const OS_UNIX: u8 = 3;

const HEADER_LEN: usize = 10;
const TRAILER_LEN: usize = 8;

/// Header and trailer fields of one gzip member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipMember {
    pub flags: u8,
    pub mtime: u32,
    pub extra_flags: u8,
    pub os: u8,
    /// CRC-32 of the uncompressed data.
    pub crc32: u32,
    /// Uncompressed length modulo 2^32.
    pub isize: u32,
    /// Bytes between the fixed header and the trailer.
    pub payload_len: usize,
}

impl GzipMember {
    /// Parse the fixed header from the start of `data` and the trailer from
    /// its last eight bytes.
    ///
    /// `payload_len` includes any optional header fields the flags announce.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN + TRAILER_LEN {
            return Err(Error::UnexpectedEof);
        }

        let mut r = Cursor::new(data);
        magic(&mut r, GZIP_MAGIC)?;
        let method = u8(&mut r)?;
        if method != METHOD_DEFLATE {
            return Err(Error::UnsupportedMethod(method));
        }
        let flags = u8(&mut r)?;
        let mtime = le_u32(&mut r)?;
        let [extra_flags, os] = bytesa::<2>(&mut r)?;

        let mut t = Cursor::new(&data[data.len() - TRAILER_LEN..]);
        let crc32 = le_u32(&mut t)?;
        let isize = le_u32(&mut t)?;

        Ok(Self {
            flags,
            mtime,
            extra_flags,
            os,
            crc32,
            isize,
            payload_len: data.len() - HEADER_LEN - TRAILER_LEN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeting::{GREETING, RECORDED_GREETING_GZ};

    #[test]
    fn recorded_stream_fields() {
        let m = GzipMember::parse(&RECORDED_GREETING_GZ).unwrap();
        assert_eq!(m.flags, 0);
        assert_eq!(m.mtime, 0);
        assert_eq!(m.extra_flags, 0);
        assert_eq!(m.os, OS_UNIX);
        assert_eq!(m.crc32, 0xB8DE_2945);
        assert_eq!(m.isize as usize, GREETING.len());
        assert_eq!(m.payload_len, 25);
    }

    #[test]
    fn rejects_short_stream() {
        let err = GzipMember::parse(&RECORDED_GREETING_GZ[..17]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = RECORDED_GREETING_GZ;
        data[1] = 0x8c;
        assert!(matches!(GzipMember::parse(&data), Err(Error::BadMagic)));
    }

    #[test]
    fn rejects_non_deflate_method() {
        let mut data = RECORDED_GREETING_GZ;
        data[2] = 0x07;
        assert!(matches!(
            GzipMember::parse(&data),
            Err(Error::UnsupportedMethod(7))
        ));
    }
}
