//! Settings for a salary report run.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{domain::DEFAULT_TOP_N, source::DEFAULT_URL};

/// Configuration for one report run.
///
/// The persistent settings can be read from a TOML file. Any key may be
/// omitted, in which case its default is used. The figure flags are chosen
/// per run and are never read from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// The page containing the salary table.
    pub url: String,

    /// How many of the highest salaries contribute to the offer.
    pub top_n: usize,

    /// Directory the figures are written to. It must already exist.
    pub figures_dir: PathBuf,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Write a box-and-whisker plot to `box.png`.
    #[serde(skip)]
    pub box_and_whisker: bool,

    /// Write a histogram to `hist.png`.
    #[serde(skip)]
    pub histogram: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            top_n: DEFAULT_TOP_N,
            figures_dir: PathBuf::from("figures"),
            timeout_secs: 30,
            box_and_whisker: false,
            histogram: false,
        }
    }
}

impl ReportConfig {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// invalid, or a setting is out of range.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings can produce a report.
    ///
    /// # Errors
    ///
    /// Returns an error if `top_n` or `timeout_secs` is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n == 0 {
            return Err("top_n must be at least 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// The request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Path of the box-and-whisker figure.
    #[must_use]
    pub fn box_path(&self) -> PathBuf {
        self.figures_dir.join("box.png")
    }

    /// Path of the histogram figure.
    #[must_use]
    pub fn histogram_path(&self) -> PathBuf {
        self.figures_dir.join("hist.png")
    }

    /// Whether any figure was requested.
    #[must_use]
    pub const fn wants_figures(&self) -> bool {
        self.box_and_whisker || self.histogram
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.top_n, 125);
        assert_eq!(config.box_path(), Path::new("figures").join("box.png"));
        assert_eq!(config.histogram_path(), Path::new("figures").join("hist.png"));
        assert!(!config.wants_figures());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let (_dir, path) = write_config("top_n = 10\n");
        let config = ReportConfig::load(&path).unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn full_file() {
        let (_dir, path) = write_config(
            "url = \"http://localhost:8080/data.html\"\ntop_n = 3\nfigures_dir = \"out\"\ntimeout_secs = 5\n",
        );
        let config = ReportConfig::load(&path).unwrap();
        assert_eq!(config.url, "http://localhost:8080/data.html");
        assert_eq!(config.figures_dir, PathBuf::from("out"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn figure_flags_are_not_read_from_file() {
        let (_dir, path) = write_config("histogram = true\n");
        assert!(ReportConfig::load(&path).is_err());
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let (_dir, path) = write_config("top_n = 0\n");
        let err = ReportConfig::load(&path).unwrap_err();
        assert!(err.contains("top_n"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ReportConfig {
            timeout_secs: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = ReportConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.starts_with("Failed to read config file"));
    }
}
