//! CLI argument parsing for carereceipt.
//!
//! Uses clap derive macros for declarative argument definitions. Required
//! receipt fields are not marked `required` here; the resolver checks them
//! so a missing field exits with our own code and usage text.

use crate::receipt::RawInputs;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate a child-care receipt as a Markdown document.
///
/// Provider name, address, child name and amount are required. The receipt
/// is written to `<date>_receipt.md` in the current directory unless
/// `--output` is given.
#[derive(Parser, Debug)]
#[command(name = "carereceipt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provider name.
    #[arg(long)]
    pub provider: Option<String>,

    /// Provider address.
    #[arg(long)]
    pub address: Option<String>,

    /// Provider tax ID.
    #[arg(long)]
    pub taxid: Option<String>,

    /// Child name.
    #[arg(long)]
    pub child: Option<String>,

    /// Service date(s) (defaults to today, YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,

    /// Amount paid; a leading `$` is added if missing.
    #[arg(long)]
    pub amount: Option<String>,

    /// Output filename (defaults to <date>_receipt.md).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Render the usage text printed after a missing-field error.
    pub fn usage() -> String {
        use clap::CommandFactory;
        Cli::command().render_help().to_string()
    }

    /// Split the parsed arguments into receipt inputs and the log verbosity.
    pub fn into_inputs(self) -> (RawInputs, u8) {
        let inputs = RawInputs {
            provider: self.provider.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            taxid: self.taxid.unwrap_or_default(),
            child: self.child.unwrap_or_default(),
            date: self.date,
            amount: self.amount.unwrap_or_default(),
            output: self.output,
        };
        (inputs, self.verbose)
    }
}
