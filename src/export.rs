//! CSV export of the ledger.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::Expense;

/// Write expenses as CSV with an `amount,category,description,date` header.
pub(crate) fn write_csv(path: &Path, expenses: &[Expense]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer
        .write_record(["amount", "category", "description", "date"])
        .context("Failed to write CSV header")?;
    for expense in expenses {
        writer
            .write_record([
                expense.amount.to_string().as_str(),
                expense.category.as_str(),
                expense.description.as_str(),
                expense.recorded_at.as_str(),
            ])
            .context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
