//! Error types for the carereceipt CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::render::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for receipt generation.
///
/// Every variant is fatal; `main` prints it and exits with [`ReceiptError::exit_code`].
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// One or more required flags were absent or empty.
    ///
    /// Holds the flag names (without dashes) in declaration order.
    #[error(
        "provider name, address, child name, and amount are required (missing: {})",
        format_flags(.0)
    )]
    MissingRequiredField(Vec<&'static str>),

    /// The built-in receipt template failed to compile or render.
    #[error("failed to render receipt template: {0}")]
    Template(#[from] TemplateError),

    /// The destination file could not be created or written.
    #[error("failed to write receipt to '{}': {reason}", .path.display())]
    OutputWrite { path: PathBuf, reason: String },
}

impl ReceiptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReceiptError::MissingRequiredField(_) => exit_codes::FAILURE,
            ReceiptError::Template(_) => exit_codes::FAILURE,
            ReceiptError::OutputWrite { .. } => exit_codes::FAILURE,
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, ReceiptError::MissingRequiredField(_))
    }
}

fn format_flags(flags: &[&str]) -> String {
    flags
        .iter()
        .map(|f| format!("--{}", f))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for receipt operations.
pub type Result<T> = std::result::Result<T, ReceiptError>;
