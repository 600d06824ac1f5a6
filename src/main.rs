//! carereceipt: generate a child-care receipt from command-line fields.
//!
//! This is the main entry point. It parses arguments, reads the clock once,
//! runs receipt generation, and maps errors to exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod receipt;
pub mod render;

#[cfg(test)]
mod test_support;

use chrono::{Local, NaiveDate};
use cli::Cli;
use receipt::RawInputs;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let (inputs, verbosity) = Cli::parse_args().into_inputs();
    logging::init(verbosity);

    let today = Local::now().date_naive();

    let code = run(inputs, today, &mut std::io::stdout(), &mut std::io::stderr());
    ExitCode::from(code as u8)
}

/// Generate the receipt and report the outcome.
///
/// Prints the written path to `out` on success. On failure prints
/// `Error: <message>` to `err`, followed by the usage text for missing
/// fields. Returns the process exit code.
fn run(inputs: RawInputs, today: NaiveDate, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match commands::cmd_generate(inputs, today) {
        Ok(path) => {
            let _ = writeln!(out, "{}", path.display());
            exit_codes::SUCCESS
        }
        Err(e) => {
            // Print user-actionable error message
            let _ = writeln!(err, "Error: {}", e);
            if e.wants_usage() {
                let _ = writeln!(err);
                let _ = write!(err, "{}", Cli::usage());
            }

            e.exit_code()
        }
    }
}
