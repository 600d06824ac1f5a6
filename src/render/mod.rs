//! Receipt document rendering.
//!
//! Binds a [`ReceiptRecord`] into the fixed Markdown receipt template and
//! writes the result to disk.

mod template;

pub use template::{Template, TemplateError, vars};

use crate::error::Result;
use crate::fs::overwrite_file;
use crate::receipt::ReceiptRecord;
use std::path::Path;

/// The receipt layout: six bold labels, each followed by its value.
pub const RECEIPT_TEMPLATE: &str = "**Provider Name:**
{provider_name}

**Provider Address:**
{provider_address}

**Tax ID Number:**
{provider_tax_id}

**Care For:**
{child_name}

**Date(s):**
{date}

**Amount:**
{amount}
";

/// Render a receipt to its Markdown text.
///
/// # Errors
///
/// [`crate::error::ReceiptError::Template`] if the built-in template fails to
/// compile or references a field that is not bound. Neither happens unless
/// [`RECEIPT_TEMPLATE`] itself is broken.
pub fn render_receipt(record: &ReceiptRecord) -> Result<String> {
    let template = Template::parse(RECEIPT_TEMPLATE)?;

    let variables = vars([
        ("provider_name", record.provider_name.as_str()),
        ("provider_address", record.provider_address.as_str()),
        ("provider_tax_id", record.provider_tax_id.as_str()),
        ("child_name", record.child_name.as_str()),
        ("date", record.date.as_str()),
        ("amount", record.amount.as_str()),
    ]);

    Ok(template.render(&variables)?)
}

/// Render a receipt and write it to `path`, replacing any existing file.
///
/// The document is fully rendered before the file is touched, so a template
/// failure never truncates an existing receipt.
pub fn write_receipt(record: &ReceiptRecord, path: &Path) -> Result<()> {
    let content = render_receipt(record)?;
    overwrite_file(path, &content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "receipt written");
    Ok(())
}
