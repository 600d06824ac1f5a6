//! Command implementations for carereceipt.
//!
//! The tool has a single operation, `generate`, which runs the whole
//! resolve → render → write sequence.

mod generate;

pub use generate::cmd_generate;
