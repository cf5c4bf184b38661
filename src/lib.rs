//! **gzgreet** - emit a fixed greeting as a gzip stream.
//!
//! # Modules
//! | Module | Purpose |
//! |--------|---------|
//! | [`greeting`] | The fixed input, output capacity and recorded gzip stream |
//! | [`backend`]  | [`backend::GzipBackend`] and build-time backend selection |
//! | [`member`]   | gzip header/trailer inspection |
//! | [`emit`]     | Compress-and-write routine used by the binaries |
//! | [`logging`]  | stderr diagnostics |
//!
//! With the default `compression` feature the greeting is compressed by
//! `flate2`. Without it, the pre-recorded stream is replayed.

pub mod backend;
pub mod emit;
pub mod error;
pub mod greeting;
pub mod logging;
pub mod member;
mod utils;

pub use error::{Error, Result};
