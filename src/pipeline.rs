//! Report pipeline: load -> filter -> aggregate, then one view per selected year.

use crate::config::DashboardConfig;
use crate::data::{CoverageRecord, CoverageTable, DataLoader, DataProcessor, LoaderError, ProcessorError};
use crate::stats::ranking::{bottom_n, top_n};
use crate::stats::{CorrelationOutcome, RegressionLine, StatsCalculator};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Processor(#[from] ProcessorError),
}

/// Sidebar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub year: i32,
    pub show_regression: bool,
    pub show_labels: bool,
}

impl ViewSettings {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            year: config.default_year,
            show_regression: config.show_regression,
            show_labels: config.show_labels,
        }
    }
}

/// Everything drawn for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearView {
    pub year: i32,
    pub records: Vec<CoverageRecord>,
    pub correlation: CorrelationOutcome,
    pub regression: Option<RegressionLine>,
    pub best: Vec<CoverageRecord>,
    pub worst: Vec<CoverageRecord>,
    pub show_labels: bool,
}

/// Read, filter and aggregate the dataset at `path`.
pub fn load_table(path: &Path, config: &DashboardConfig) -> Result<CoverageTable, PipelineError> {
    let raw = DataLoader::load_csv(path, &config.required_columns())?;
    let filtered = DataProcessor::filter(&raw, config)?;
    Ok(DataProcessor::aggregate(&filtered)?)
}

/// Build the view of one year. The table is only read.
pub fn build_view(table: &CoverageTable, settings: &ViewSettings, config: &DashboardConfig) -> YearView {
    let year = table.clamp_year(settings.year);
    let rows = table.for_year(year);

    let correlation = StatsCalculator::correlation(&rows, config.p_value_method);
    let regression = if settings.show_regression {
        StatsCalculator::regression(&rows, config.regression_points)
    } else {
        None
    };

    let best = top_n(&rows, config.top_n).into_iter().cloned().collect();
    let worst = bottom_n(&rows, config.top_n).into_iter().cloned().collect();

    debug!(year, points = rows.len(), ?correlation, "built year view");

    YearView {
        year,
        records: rows.into_iter().cloned().collect(),
        correlation,
        regression,
        best,
        worst,
        show_labels: settings.show_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, year: i32, coverage: f64, index: f64) -> CoverageRecord {
        CoverageRecord {
            region_code: code.to_string(),
            region_label: "South".to_string(),
            year,
            mean_coverage: coverage,
            mean_dev_index: Some(index),
        }
    }

    fn table() -> CoverageTable {
        CoverageTable::new(vec![
            record("PR", 2020, 91.0, 0.74),
            record("RS", 2020, 88.0, 0.75),
            record("SC", 2020, 95.0, 0.77),
            record("PR", 2021, 85.0, 0.74),
            record("RS", 2021, 79.0, 0.75),
        ])
    }

    #[test]
    fn year_is_clamped_into_range() {
        let cfg = DashboardConfig::default();
        let settings = ViewSettings {
            year: 2030,
            ..ViewSettings::from_config(&cfg)
        };
        let view = build_view(&table(), &settings, &cfg);
        assert_eq!(view.year, 2021);
        assert_eq!(view.records.len(), 2);
    }

    #[test]
    fn small_year_degrades_gracefully() {
        let cfg = DashboardConfig::default();
        let view = build_view(&table(), &ViewSettings::from_config(&cfg), &cfg);

        assert_eq!(view.correlation, CorrelationOutcome::InsufficientData { n: 2 });
        assert!(view.regression.is_some());
        assert_eq!(view.best.len(), 2);
    }

    #[test]
    fn regression_toggle_is_respected() {
        let cfg = DashboardConfig::default();
        let settings = ViewSettings {
            year: 2020,
            show_regression: false,
            show_labels: true,
        };
        let view = build_view(&table(), &settings, &cfg);
        assert!(view.regression.is_none());
        assert!(view.show_labels);
        assert!(view.correlation.r().is_some());
        assert_eq!(view.best[0].region_code, "SC");
        assert_eq!(view.worst[0].region_code, "RS");
    }
}
