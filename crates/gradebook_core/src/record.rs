//! Assignment records and their field constraints

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Assignment category: formative or summative work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Formative,
    Summative,
}

impl Category {
    /// Two-letter code used in prompts and the CSV export.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Formative => "FA",
            Category::Summative => "SA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A category token that is neither FA nor SA.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("category must be 'FA' or 'SA', got '{0}'")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses the two-letter code, case-insensitively. This is the single
    /// validation point; downstream code only sees the enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FA" => Ok(Category::Formative),
            "SA" => Ok(Category::Summative),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Violation of a record field constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("assignment name cannot be empty")]
    EmptyName,

    #[error("grade {0} is outside 0-100")]
    GradeOutOfRange(f64),

    #[error("weight {0} is not a positive number")]
    InvalidWeight(f64),
}

/// One graded assignment. Immutable once constructed; the constructor
/// enforces the field constraints, so every stored record satisfies them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    name: String,
    category: Category,
    grade: f64,
    weight: f64,
}

impl Assignment {
    /// Builds a record. The name is stored trimmed; the grade must lie in
    /// [0, 100] and the weight must be finite and strictly positive.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        grade: f64,
        weight: f64,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if !(0.0..=100.0).contains(&grade) {
            return Err(RecordError::GradeOutOfRange(grade));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RecordError::InvalidWeight(weight));
        }

        Ok(Self {
            name,
            category,
            grade,
            weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The grade scaled by the weight, on the same scale as the weight.
    /// Always lies in [0, weight].
    pub fn weighted_grade(&self) -> f64 {
        (self.grade / 100.0) * self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_both_codes_case_insensitively() {
        assert_eq!("FA".parse::<Category>().unwrap(), Category::Formative);
        assert_eq!("sa".parse::<Category>().unwrap(), Category::Summative);
        assert_eq!(" fa ".parse::<Category>().unwrap(), Category::Formative);
    }

    #[test]
    fn category_rejects_everything_else() {
        assert!("X".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert!("FORMATIVE".parse::<Category>().is_err());
    }

    #[test]
    fn new_trims_and_rejects_empty_names() {
        let record = Assignment::new("  Quiz1  ", Category::Formative, 80.0, 20.0).unwrap();
        assert_eq!(record.name(), "Quiz1");

        assert_eq!(
            Assignment::new("", Category::Formative, 80.0, 20.0),
            Err(RecordError::EmptyName)
        );
        assert_eq!(
            Assignment::new("   ", Category::Formative, 80.0, 20.0),
            Err(RecordError::EmptyName)
        );
    }

    #[test]
    fn new_rejects_out_of_range_grades() {
        assert!(Assignment::new("a", Category::Formative, -0.5, 1.0).is_err());
        assert!(Assignment::new("a", Category::Formative, 100.5, 1.0).is_err());
        assert!(Assignment::new("a", Category::Formative, f64::NAN, 1.0).is_err());
        assert!(Assignment::new("a", Category::Formative, 0.0, 1.0).is_ok());
        assert!(Assignment::new("a", Category::Formative, 100.0, 1.0).is_ok());
    }

    #[test]
    fn new_rejects_non_positive_weights() {
        assert!(Assignment::new("a", Category::Summative, 50.0, 0.0).is_err());
        assert!(Assignment::new("a", Category::Summative, 50.0, -5.0).is_err());
        assert!(Assignment::new("a", Category::Summative, 50.0, f64::INFINITY).is_err());
        assert!(Assignment::new("a", Category::Summative, 50.0, 0.001).is_ok());
    }

    #[test]
    fn weighted_grade_scales_and_stays_within_weight() {
        let cases = [(0.0, 10.0), (50.0, 30.0), (80.0, 20.0), (100.0, 77.5)];
        for (grade, weight) in cases {
            let record = Assignment::new("a", Category::Formative, grade, weight).unwrap();
            let weighted = record.weighted_grade();
            assert!((weighted - (grade / 100.0) * weight).abs() < 1e-12);
            assert!(weighted >= 0.0 && weighted <= weight);
        }
    }
}
