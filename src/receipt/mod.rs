//! Receipt input resolution.
//!
//! Turns raw flag values into a validated [`ReceiptRecord`] and a concrete
//! output path. Everything here is pure: the current date is passed in by the
//! caller rather than read from the clock.

mod resolve;

pub use resolve::{default_output_path, filename_date, normalize_amount, resolve};

use std::path::PathBuf;

/// Currency symbol every resolved amount starts with.
pub const CURRENCY_SYMBOL: char = '$';

/// Date format used for the default date and the default filename.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Suffix appended to the date in the default output filename.
pub const OUTPUT_SUFFIX: &str = "_receipt.md";

/// Unvalidated field values as collected from the command line.
///
/// Unset string flags are empty. `date` and `output` distinguish "not given"
/// (`None`) from "given", because only the former triggers a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub provider: String,
    pub address: String,
    pub taxid: String,
    pub child: String,
    pub date: Option<String>,
    pub amount: String,
    pub output: Option<PathBuf>,
}

/// The six fields bound into the receipt template.
///
/// Only [`resolve`] constructs one, so provider, address, child and amount
/// are non-empty and the amount starts with [`CURRENCY_SYMBOL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRecord {
    pub provider_name: String,
    pub provider_address: String,
    pub provider_tax_id: String,
    pub child_name: String,
    pub date: String,
    pub amount: String,
}

/// A validated record together with where it should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReceipt {
    pub record: ReceiptRecord,
    pub output: PathBuf,
}
