//! Implementation of receipt generation.
//!
//! Resolves the raw inputs, renders the receipt and writes it to the output
//! path. Nothing is written unless resolution succeeds.

use crate::error::Result;
use crate::receipt::{self, RawInputs};
use crate::render::write_receipt;
use chrono::NaiveDate;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Generate a receipt from raw inputs.
///
/// `today` is the current local date, used for the default service date and
/// as the filename fallback. Returns the path that was written.
pub fn cmd_generate(inputs: RawInputs, today: NaiveDate) -> Result<PathBuf> {
    let resolved = receipt::resolve(inputs, today)?;

    tracing::debug!(
        provider = %resolved.record.provider_name,
        child = %resolved.record.child_name,
        date = %resolved.record.date,
        amount = %resolved.record.amount,
        "resolved receipt"
    );

    write_receipt(&resolved.record, &resolved.output)?;

    Ok(resolved.output)
}
