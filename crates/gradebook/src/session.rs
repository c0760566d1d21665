//! Interactive session: collect records, then report and persist
//!
//! Two states. COLLECTING runs the field prompts to build one record, then
//! asks the continuation question; DONE either exits early (nothing was
//! entered) or aggregates, prints the summary, and writes the CSV.

use crate::config::Settings;
use crate::export;
use crate::prompt;
use crate::report;
use anyhow::{Context, Result};
use gradebook_core::{Assignment, GradeTotals};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run one full session against the process's stdin/stdout.
pub fn run(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    run_with(&mut input, &mut out, settings)
}

/// Run one full session against the given streams.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    settings: &Settings,
) -> Result<()> {
    let records = collect_records(input, out)?;
    finish(&records, out, settings)
}

/// Entry-order collection loop; stops when the user declines to continue.
fn collect_records<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<Assignment>> {
    let mut records = Vec::new();

    loop {
        writeln!(out, "\nEnter assignment details:")?;
        let name = prompt::prompt_non_empty(input, out, "Assignment Name: ")?;
        let category = prompt::prompt_category(input, out)?;
        let grade = prompt::prompt_grade(input, out)?;
        let weight = prompt::prompt_weight(input, out)?;

        // The prompts already validated every field; construction cannot
        // fail in the interactive path.
        let record = Assignment::new(name, category, grade, weight)
            .context("prompted values failed record validation")?;
        debug!(name = record.name(), category = record.category().code(), "record added");
        records.push(record);

        if !prompt::prompt_continue(input, out)? {
            break;
        }
    }

    Ok(records)
}

/// DONE-state handling: an empty session exits with a note and touches
/// nothing; otherwise aggregate, render, persist, confirm.
fn finish<W: Write>(records: &[Assignment], out: &mut W, settings: &Settings) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No assignments entered. Exiting without generating summary.")?;
        return Ok(());
    }

    let totals = GradeTotals::compute(records, settings.effective_pass_ratio());
    debug!(
        final_grade = totals.final_grade,
        passes = totals.passes,
        "totals computed"
    );

    write!(out, "{}", report::render(records, &totals))?;

    export::write_csv(records, &settings.output_path)?;
    debug!(
        path = %settings.output_path.display(),
        records = records.len(),
        "records saved"
    );

    writeln!(out, "\nData saved to {}", settings.output_path.display())?;
    Ok(())
}
