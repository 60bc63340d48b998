//! Statistics Calculator Module
//! Per-year correlation and regression over the aggregated table.

use crate::config::PValueMethod;
use crate::data::{CoverageRecord, CoverageTable};
use crate::stats::correlation::{correlate, CorrelationOutcome};
use crate::stats::regression::RegressionLine;
use rayon::prelude::*;

/// Correlation outcome of one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearCorrelation {
    pub year: i32,
    pub outcome: CorrelationOutcome,
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// (development index, coverage) pairs; records without an index are skipped.
    pub fn pairs(records: &[&CoverageRecord]) -> (Vec<f64>, Vec<f64>) {
        records
            .iter()
            .filter_map(|r| r.mean_dev_index.map(|x| (x, r.mean_coverage)))
            .unzip()
    }

    pub fn correlation(records: &[&CoverageRecord], method: PValueMethod) -> CorrelationOutcome {
        let (xs, ys) = Self::pairs(records);
        correlate(&xs, &ys, method)
    }

    pub fn regression(records: &[&CoverageRecord], samples: usize) -> Option<RegressionLine> {
        let (xs, ys) = Self::pairs(records);
        RegressionLine::compute(&xs, &ys, samples)
    }

    /// Correlation for every year in the table, computed in parallel.
    pub fn correlation_by_year(table: &CoverageTable, method: PValueMethod) -> Vec<YearCorrelation> {
        let mut rows: Vec<YearCorrelation> = table
            .years()
            .par_iter()
            .map(|&year| YearCorrelation {
                year,
                outcome: Self::correlation(&table.for_year(year), method),
            })
            .collect();

        rows.sort_by_key(|row| row.year);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, year: i32, coverage: f64, index: Option<f64>) -> CoverageRecord {
        CoverageRecord {
            region_code: code.to_string(),
            region_label: "Northeast".to_string(),
            year,
            mean_coverage: coverage,
            mean_dev_index: index,
        }
    }

    #[test]
    fn records_without_index_are_not_paired() {
        let data = vec![
            record("BA", 2021, 80.0, Some(0.6)),
            record("CE", 2021, 85.0, None),
            record("PE", 2021, 90.0, Some(0.7)),
        ];
        let refs: Vec<&CoverageRecord> = data.iter().collect();

        let (xs, ys) = StatsCalculator::pairs(&refs);
        assert_eq!(xs, vec![0.6, 0.7]);
        assert_eq!(ys, vec![80.0, 90.0]);
        assert_eq!(
            StatsCalculator::correlation(&refs, PValueMethod::StudentT),
            CorrelationOutcome::InsufficientData { n: 2 }
        );
        assert!(StatsCalculator::regression(&refs, 10).is_some());
    }

    #[test]
    fn one_row_per_year_in_order() {
        let table = CoverageTable::new(vec![
            record("BA", 2021, 80.0, Some(0.60)),
            record("CE", 2021, 85.0, Some(0.65)),
            record("PE", 2021, 83.0, Some(0.70)),
            record("BA", 2019, 90.0, Some(0.60)),
        ]);

        let rows = StatsCalculator::correlation_by_year(&table, PValueMethod::StudentT);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2019);
        assert_eq!(rows[0].outcome, CorrelationOutcome::InsufficientData { n: 1 });
        assert_eq!(rows[1].year, 2021);
        assert!(rows[1].outcome.r().is_some());
    }
}
