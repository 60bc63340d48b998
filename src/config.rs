//! Dashboard Configuration
//! Optional JSON file that selects the label language, filters and p-value method.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Dataset read when nothing else is configured.
pub const DEFAULT_CSV_PATH: &str = "immunization_master_data.csv";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vaxdash.json";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "VAXDASH_CONFIG";

/// Basic-vaccine indicators retained by the filter.
pub const BASIC_VACCINES: [&str; 8] = [
    "FL_U1_BCG",
    "FL_U1_POLIO",
    "FL_U1_DTP",
    "FL_U1_HepB",
    "FL_U1_Hib",
    "FL_Y1_DTP",
    "FL_Y1_POLIO",
    "FL_Y1_MMR1",
];

/// Age buckets retained when the age filter is on.
pub const INFANT_AGE_BUCKETS: [&str; 2] = ["0-1 ano", "1 ano"];

/// Language of region labels and UI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSet {
    #[default]
    English,
    Portuguese,
}

/// How the correlation p-value is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueMethod {
    /// Two-tailed Student-t test with n - 2 degrees of freedom
    #[default]
    StudentT,
    /// Exact null distribution of r (symmetric Beta)
    Beta,
    /// Report r only
    Omit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub csv_path: PathBuf,
    pub label_set: LabelSet,
    /// `None` keeps every age bucket.
    pub age_filter: Option<Vec<String>>,
    pub indicators: Vec<String>,
    pub p_value_method: PValueMethod,
    pub default_year: i32,
    pub show_regression: bool,
    pub show_labels: bool,
    pub top_n: usize,
    pub regression_points: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            label_set: LabelSet::default(),
            age_filter: Some(INFANT_AGE_BUCKETS.iter().map(|s| s.to_string()).collect()),
            indicators: BASIC_VACCINES.iter().map(|s| s.to_string()).collect(),
            p_value_method: PValueMethod::default(),
            default_year: 2021,
            show_regression: true,
            show_labels: false,
            top_n: 3,
            regression_points: 100,
        }
    }
}

impl DashboardConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON configuration: {:?}", path))?;
        Ok(config)
    }

    /// Resolve the config file (env var, then working directory) and fall
    /// back to defaults when it is absent or broken.
    pub fn load_or_default() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "ignoring config file");
                Self::default()
            }
        }
    }

    /// Columns the loader must find in the CSV.
    pub fn required_columns(&self) -> Vec<&'static str> {
        use crate::data::columns::*;

        let mut cols = vec![REGION_CODE, INDICATOR, COVERAGE, YEAR, DEV_INDEX];
        if self.age_filter.is_some() {
            cols.push(AGE);
        }
        cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_report() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.csv_path, PathBuf::from("immunization_master_data.csv"));
        assert_eq!(cfg.indicators.len(), 8);
        assert_eq!(cfg.default_year, 2021);
        assert!(cfg.show_regression);
        assert!(!cfg.show_labels);
        assert_eq!(cfg.top_n, 3);
        assert_eq!(cfg.regression_points, 100);
        assert_eq!(cfg.p_value_method, PValueMethod::StudentT);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg: DashboardConfig = serde_json::from_str(
            r#"{ "label_set": "portuguese", "age_filter": null, "p_value_method": "beta" }"#,
        )
        .unwrap();
        assert_eq!(cfg.label_set, LabelSet::Portuguese);
        assert_eq!(cfg.age_filter, None);
        assert_eq!(cfg.p_value_method, PValueMethod::Beta);
        assert_eq!(cfg.default_year, 2021);
        assert_eq!(cfg.indicators.len(), 8);
    }

    #[test]
    fn required_columns_follow_age_filter() {
        let mut cfg = DashboardConfig::default();
        assert!(cfg.required_columns().contains(&"AGE"));
        cfg.age_filter = None;
        assert!(!cfg.required_columns().contains(&"AGE"));
        assert_eq!(cfg.required_columns().len(), 5);
    }

    #[test]
    fn load_from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_year": 2019, "top_n": 5 }}"#).unwrap();

        let cfg = DashboardConfig::load_from_file(file.path()).unwrap();
        assert_eq!(cfg.default_year, 2019);
        assert_eq!(cfg.top_n, 5);
    }

    #[test]
    fn load_from_file_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = DashboardConfig::load_from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse JSON configuration"));
    }
}
