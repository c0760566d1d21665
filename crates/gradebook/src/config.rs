//! Tool configuration
//!
//! Settings live in `gradebook.toml` in the working directory. A missing
//! file means defaults; a file that does not parse is a startup error.

use anyhow::{Context, Result};
use gradebook_core::DEFAULT_PASS_RATIO;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "gradebook.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where the CSV export lands.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Fraction of a category's total weight needed to pass it.
    #[serde(default = "default_pass_ratio")]
    pub pass_ratio: f64,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("grades.csv")
}

fn default_pass_ratio() -> f64 {
    DEFAULT_PASS_RATIO
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            pass_ratio: default_pass_ratio(),
        }
    }
}

impl Settings {
    /// Load `gradebook.toml` from the working directory if present.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let settings = toml::from_str(&raw)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(settings)
    }

    /// Pass ratio clamped to the meaningful range [0, 1].
    pub fn effective_pass_ratio(&self) -> f64 {
        self.pass_ratio.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("gradebook.toml")).unwrap();
        assert_eq!(settings.output_path, PathBuf::from("grades.csv"));
        assert_eq!(settings.pass_ratio, DEFAULT_PASS_RATIO);
    }

    #[test]
    fn file_overrides_are_honored_and_partial_files_keep_defaults() {
        let settings: Settings = toml::from_str("pass_ratio = 0.6\n").unwrap();
        assert_eq!(settings.pass_ratio, 0.6);
        assert_eq!(settings.output_path, PathBuf::from("grades.csv"));

        let settings: Settings = toml::from_str("output_path = \"out/report.csv\"\n").unwrap();
        assert_eq!(settings.output_path, PathBuf::from("out/report.csv"));
        assert_eq!(settings.pass_ratio, DEFAULT_PASS_RATIO);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        fs::write(&path, "pass_ratio = \"plenty\"\n").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn out_of_range_pass_ratio_is_clamped() {
        let settings: Settings = toml::from_str("pass_ratio = 1.7\n").unwrap();
        assert_eq!(settings.effective_pass_ratio(), 1.0);

        let settings: Settings = toml::from_str("pass_ratio = -0.3\n").unwrap();
        assert_eq!(settings.effective_pass_ratio(), 0.0);
    }
}
