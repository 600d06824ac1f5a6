//! Filesystem utilities for carereceipt.
//!
//! The receipt is the only file the tool touches; it is written in place at
//! the resolved path.

pub mod overwrite;

pub use overwrite::overwrite_file;
