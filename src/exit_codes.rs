//! Exit code constants for the carereceipt CLI.
//!
//! - 0: Success
//! - 1: Failure (missing required field, template error, output write error)
//!
//! Argument syntax errors (unknown flags and the like) are reported by clap
//! with its own exit code before any of our code runs.

/// Successful execution: the receipt was written.
pub const SUCCESS: i32 = 0;

/// Any fatal error: missing input, template failure, or unwritable output.
pub const FAILURE: i32 = 1;
