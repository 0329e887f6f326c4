//! gw - operator utilities for the Groundwork service.

use std::process::ExitCode;

fn main() -> ExitCode {
    match groundwork::cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
