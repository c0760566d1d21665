//! Terminal summary rendering
//!
//! Pure string building; the session prints the result. Numbers carry two
//! decimals throughout. Color is kept to the header and the PASS/FAIL word
//! so the body lines stay grep-able.

use gradebook_core::{category_percentage, Assignment, GradeTotals};
use owo_colors::OwoColorize;

/// Render the full session summary.
pub fn render(records: &[Assignment], totals: &GradeTotals) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n\n", "=== GRADE SUMMARY ===".bold()));

    out.push_str("Assignments Entered:\n");
    for (idx, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}): {:.2}% - Weight: {:.2} - Weighted: {:.2}\n",
            idx + 1,
            record.name(),
            record.category().code(),
            record.grade(),
            record.weight(),
            record.weighted_grade(),
        ));
    }

    out.push_str("\nCategory Breakdown:\n");
    out.push_str(&format!(
        "- Total Formative (FA): {:.2}/{:.2} ({:.2}%)\n",
        totals.total_formative,
        totals.total_fa_weight,
        category_percentage(totals.total_formative, totals.total_fa_weight),
    ));
    out.push_str(&format!(
        "- Total Summative (SA): {:.2}/{:.2} ({:.2}%)\n",
        totals.total_summative,
        totals.total_sa_weight,
        category_percentage(totals.total_summative, totals.total_sa_weight),
    ));

    out.push_str("\nFinal Results:\n");
    out.push_str(&format!("- Total Grade: {:.2}/100\n", totals.final_grade));
    out.push_str(&format!("- GPA: {:.2}/5.0\n", totals.gpa));

    let status = if totals.passes {
        format!("{}", "PASS".green().bold())
    } else {
        format!("{}", "FAIL".red().bold())
    };
    out.push_str(&format!("- Status: {status}\n"));

    if !totals.passes {
        if !totals.formative_passed() {
            out.push_str(&format!(
                "Failed FA (achieved {:.2} / need {:.2})\n",
                totals.total_formative, totals.fa_threshold,
            ));
        }
        if !totals.summative_passed() {
            out.push_str(&format!(
                "Failed SA (achieved {:.2} / need {:.2})\n",
                totals.total_summative, totals.sa_threshold,
            ));
        }
    }

    out
}
