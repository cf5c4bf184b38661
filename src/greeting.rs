//! The fixed greeting and its pre-recorded gzip encoding.
//!
//! ## Recorded stream layout (43 bytes)
//! ```text
//! [0x00] Magic          1F 8B
//! [0x02] Method         08 (deflate)
//! [0x03] Flags          00
//! [0x04] MTime          00 00 00 00
//! [0x08] ExtraFlags     00
//! [0x09] OS             03 (Unix)
//! [0x0A] Deflate data   25 bytes, one fixed-Huffman block
//! [0x23] CRC-32         45 29 DE B8 (LE)
//! [0x27] ISIZE          17 00 00 00 (LE, 23)
//! ```

/// Input buffer: the greeting text plus its zero terminator.
pub const GREETING: &[u8; 23] = b"Hello, I am a program\n\0";

/// Size of the reserved output buffer. The gzip encoding of [`GREETING`]
/// is far below this.
pub const OUTPUT_CAPACITY: usize = 1024;

/// gzip encoding of [`GREETING`], captured once from a deflate encoder and
/// replayed when the crate is built without the `compression` feature.
pub const RECORDED_GREETING_GZ: [u8; 43] = [
    0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xF3, 0x48, 0xCD, 0xC9, 0xC9,
    0xD7, 0x51, 0xF0, 0x54, 0x48, 0xCC, 0x55, 0x48, 0x54, 0x28, 0x28, 0xCA, 0x4F, 0x2F, 0x4A,
    0xCC, 0xE5, 0x62, 0x00, 0x00, 0x45, 0x29, 0xDE, 0xB8, 0x17, 0x00, 0x00, 0x00,
];
