//! Gradebook - interactive grade summary tool
//!
//! Collects a student's assignment records, reports weighted totals with
//! pass/fail status, and saves the records to a CSV file.

use anyhow::Result;
use gradebook::config::Settings;
use gradebook::session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the interactive session.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load()?;
    session::run(&settings)
}
