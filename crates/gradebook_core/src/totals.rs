//! Weighted aggregation over a session's records
//!
//! `GradeTotals::compute` is a pure reduction: category sums, final grade,
//! GPA, and the per-category pass verdicts, all in one O(n) pass.

use crate::record::{Assignment, Category};
use serde::Serialize;

/// Default fraction of a category's total weight needed to pass it.
pub const DEFAULT_PASS_RATIO: f64 = 0.5;

/// Final grade is out of 100; GPA is out of this.
const GPA_SCALE: f64 = 5.0;

/// Aggregate results for one session. Achieved totals and thresholds are on
/// the same scale as the weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeTotals {
    pub total_formative: f64,
    pub total_summative: f64,
    pub total_fa_weight: f64,
    pub total_sa_weight: f64,
    pub final_grade: f64,
    pub gpa: f64,
    pub fa_threshold: f64,
    pub sa_threshold: f64,
    pub passes: bool,
}

impl GradeTotals {
    /// Reduces the record sequence with the given pass bar (fraction of the
    /// category weight, normally [`DEFAULT_PASS_RATIO`]).
    pub fn compute(records: &[Assignment], pass_ratio: f64) -> Self {
        let mut total_formative = 0.0;
        let mut total_summative = 0.0;
        let mut total_fa_weight = 0.0;
        let mut total_sa_weight = 0.0;

        for record in records {
            match record.category() {
                Category::Formative => {
                    total_formative += record.weighted_grade();
                    total_fa_weight += record.weight();
                }
                Category::Summative => {
                    total_summative += record.weighted_grade();
                    total_sa_weight += record.weight();
                }
            }
        }

        let final_grade = total_formative + total_summative;
        let gpa = (final_grade / 100.0) * GPA_SCALE;
        let fa_threshold = total_fa_weight * pass_ratio;
        let sa_threshold = total_sa_weight * pass_ratio;

        let passes = category_passes(total_formative, total_fa_weight, fa_threshold)
            && category_passes(total_summative, total_sa_weight, sa_threshold);

        Self {
            total_formative,
            total_summative,
            total_fa_weight,
            total_sa_weight,
            final_grade,
            gpa,
            fa_threshold,
            sa_threshold,
            passes,
        }
    }

    pub fn formative_passed(&self) -> bool {
        category_passes(self.total_formative, self.total_fa_weight, self.fa_threshold)
    }

    pub fn summative_passed(&self) -> bool {
        category_passes(self.total_summative, self.total_sa_weight, self.sa_threshold)
    }
}

/// An absent category (zero weight) passes vacuously; otherwise the achieved
/// total must reach the threshold, boundary inclusive.
fn category_passes(achieved: f64, total_weight: f64, threshold: f64) -> bool {
    total_weight <= 0.0 || achieved >= threshold
}

/// Achieved total as a percentage of the category weight; 0 for an absent
/// category, guarding the division.
pub fn category_percentage(achieved: f64, total_weight: f64) -> f64 {
    if total_weight <= 0.0 {
        0.0
    } else {
        (achieved / total_weight) * 100.0
    }
}
