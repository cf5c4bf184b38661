//! Always compresses with `flate2`; never falls back to the recording.

use std::io;
use std::process::ExitCode;

use gzgreet::backend::Deflate;
use gzgreet::{emit, logging};

fn main() -> ExitCode {
    logging::init();

    match emit::emit_greeting(&Deflate, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
