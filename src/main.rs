use std::io;
use std::process::ExitCode;

use gzgreet::{backend, emit, logging};

fn main() -> ExitCode {
    logging::init();

    match emit::emit_greeting(backend::selected(), &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
