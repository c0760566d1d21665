//! CSV persistence for session records

use anyhow::{Context, Result};
use gradebook_core::Assignment;
use std::path::Path;

const HEADERS: [&str; 4] = ["Assignment", "Category", "Grade", "Weight"];

/// Write all records to `path`, overwriting any existing file.
///
/// Rows keep entry order; `Grade` and `Weight` carry exactly two decimals.
/// Failures are fatal to the session and carry the target path.
pub fn write_csv(records: &[Assignment], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot open {} for writing", path.display()))?;

    writer.write_record(HEADERS)?;
    for record in records {
        let grade = format!("{:.2}", record.grade());
        let weight = format!("{:.2}", record.weight());
        writer.write_record([
            record.name(),
            record.category().code(),
            grade.as_str(),
            weight.as_str(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
