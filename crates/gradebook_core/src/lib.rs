//! Gradebook Core - typed assignment records and grade aggregation
//!
//! Pure domain logic shared by the CLI. No I/O lives here.

pub mod record;
pub mod totals;

pub use record::{Assignment, Category, ParseCategoryError, RecordError};
pub use totals::{category_percentage, GradeTotals, DEFAULT_PASS_RATIO};
