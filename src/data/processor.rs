//! Data Processor Module
//! Filters the raw dataset and aggregates it per state and year.

use crate::config::DashboardConfig;
use crate::data::columns::*;
use crate::data::regions;
use crate::data::{CoverageRecord, CoverageTable};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles data cleaning and grouping operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Keep the rows the report is built from and attach the region label.
    ///
    /// The inner join with the label table doubles as the state allow-list.
    pub fn filter(df: &DataFrame, config: &DashboardConfig) -> Result<DataFrame, ProcessorError> {
        let labels = regions::label_frame(config.label_set)?;

        let mut casts = vec![
            col(REGION_CODE).cast(DataType::String),
            col(INDICATOR).cast(DataType::String),
            col(COVERAGE).cast(DataType::Float64),
            col(YEAR).cast(DataType::Int32),
            col(DEV_INDEX).cast(DataType::Float64),
        ];

        let mut predicate = Self::any_of(INDICATOR, &config.indicators)
            .and(col(COVERAGE).is_not_null())
            .and(col(COVERAGE).is_not_nan());

        if let Some(ages) = &config.age_filter {
            casts.push(col(AGE).cast(DataType::String));
            predicate = predicate.and(Self::any_of(AGE, ages));
        }

        let filtered = df
            .clone()
            .lazy()
            .with_columns(casts)
            .join(
                labels.lazy(),
                [col(REGION_CODE)],
                [col(REGION_CODE)],
                JoinArgs::new(JoinType::Inner),
            )
            .filter(predicate)
            .collect()?;

        info!(
            input_rows = df.height(),
            kept_rows = filtered.height(),
            "filtered coverage rows"
        );
        Ok(filtered)
    }

    /// Mean coverage and development index per (state, label, year).
    pub fn aggregate(df: &DataFrame) -> Result<CoverageTable, ProcessorError> {
        let grouped = df
            .clone()
            .lazy()
            .group_by([col(REGION_CODE), col(REGION_LABEL), col(YEAR)])
            .agg([col(COVERAGE).mean(), col(DEV_INDEX).mean()])
            .collect()?;

        let codes = grouped.column(REGION_CODE)?.str()?;
        let labels = grouped.column(REGION_LABEL)?.str()?;
        let years = grouped.column(YEAR)?.i32()?;
        let coverage = grouped.column(COVERAGE)?.f64()?;
        let dev_index = grouped.column(DEV_INDEX)?.f64()?;

        let mut records = Vec::with_capacity(grouped.height());
        for i in 0..grouped.height() {
            let (Some(code), Some(label), Some(year), Some(mean_coverage)) =
                (codes.get(i), labels.get(i), years.get(i), coverage.get(i))
            else {
                debug!(row = i, "skipping incomplete group");
                continue;
            };

            records.push(CoverageRecord {
                region_code: code.to_string(),
                region_label: label.to_string(),
                year,
                mean_coverage,
                mean_dev_index: dev_index.get(i).filter(|v| !v.is_nan()),
            });
        }

        info!(groups = records.len(), "aggregated coverage table");
        Ok(CoverageTable::new(records))
    }

    /// `column` equals any of `values`.
    fn any_of(column: &str, values: &[String]) -> Expr {
        values
            .iter()
            .fold(lit(false), |acc, v| acc.or(col(column).eq(lit(v.as_str()))))
    }
}
