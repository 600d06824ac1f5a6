//! Validation, normalization and default derivation for receipt inputs.

use super::{
    CURRENCY_SYMBOL, DATE_FORMAT, OUTPUT_SUFFIX, RawInputs, ReceiptRecord, ResolvedReceipt,
};
use crate::error::{ReceiptError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Strict `YYYY-MM-DD` shape; chrono alone accepts single-digit fields.
static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid ISO date regex"));

/// Length in bytes of a `YYYY-MM-DD` date.
const ISO_DATE_LEN: usize = 10;

/// Validate and normalize raw inputs against the given current date.
///
/// # Errors
///
/// Returns [`ReceiptError::MissingRequiredField`] naming every empty required
/// flag (provider, address, child, amount). The tax ID may be empty.
pub fn resolve(raw: RawInputs, today: NaiveDate) -> Result<ResolvedReceipt> {
    let missing: Vec<&'static str> = [
        ("provider", &raw.provider),
        ("address", &raw.address),
        ("child", &raw.child),
        ("amount", &raw.amount),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(flag, _)| flag)
    .collect();

    if !missing.is_empty() {
        return Err(ReceiptError::MissingRequiredField(missing));
    }

    let date = raw
        .date
        .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());

    let output = match raw.output {
        Some(path) => {
            tracing::debug!(output = %path.display(), "using explicit output path");
            path
        }
        None => {
            let path = default_output_path(&date, today);
            tracing::debug!(output = %path.display(), "derived output path from date");
            path
        }
    };

    let record = ReceiptRecord {
        provider_name: raw.provider,
        provider_address: raw.address,
        provider_tax_id: raw.taxid,
        child_name: raw.child,
        date,
        amount: normalize_amount(&raw.amount),
    };

    Ok(ResolvedReceipt { record, output })
}

/// Prefix the amount with the currency symbol unless it already has one.
///
/// Empty input is returned unchanged; no other formatting is applied.
pub fn normalize_amount(amount: &str) -> String {
    if amount.is_empty() || amount.starts_with(CURRENCY_SYMBOL) {
        amount.to_string()
    } else {
        tracing::debug!(amount, "adding currency symbol to amount");
        format!("{}{}", CURRENCY_SYMBOL, amount)
    }
}

/// Pick the date used in the default filename.
///
/// Uses the first ten bytes of `date` when they form a valid `YYYY-MM-DD`
/// calendar date, so descriptive text such as `2024-01-05 and 2024-01-12`
/// still yields a single-date name. Anything else falls back to `today`.
pub fn filename_date(date: &str, today: NaiveDate) -> String {
    match date.get(..ISO_DATE_LEN) {
        Some(prefix)
            if ISO_DATE_REGEX.is_match(prefix)
                && NaiveDate::parse_from_str(prefix, DATE_FORMAT).is_ok() =>
        {
            prefix.to_string()
        }
        _ => {
            tracing::info!(date, "date does not start with YYYY-MM-DD, using today for filename");
            today.format(DATE_FORMAT).to_string()
        }
    }
}

/// Default output path: `<filename-date>_receipt.md`, relative to the
/// working directory.
pub fn default_output_path(date: &str, today: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{}{}", filename_date(date, today), OUTPUT_SUFFIX))
}
