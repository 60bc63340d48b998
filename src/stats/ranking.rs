//! Best and worst states by mean coverage.

use crate::data::CoverageRecord;
use std::cmp::Ordering;

/// Highest `n` records, best first.
///
/// The sort is stable, so equal coverage keeps the incoming (region code) order.
pub fn top_n<'a>(records: &[&'a CoverageRecord], n: usize) -> Vec<&'a CoverageRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.mean_coverage
            .partial_cmp(&a.mean_coverage)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Lowest `n` records, worst first.
pub fn bottom_n<'a>(records: &[&'a CoverageRecord], n: usize) -> Vec<&'a CoverageRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        a.mean_coverage
            .partial_cmp(&b.mean_coverage)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, coverage: f64) -> CoverageRecord {
        CoverageRecord {
            region_code: code.to_string(),
            region_label: "North".to_string(),
            year: 2021,
            mean_coverage: coverage,
            mean_dev_index: None,
        }
    }

    fn codes(records: &[&CoverageRecord]) -> Vec<String> {
        records.iter().map(|r| r.region_code.clone()).collect()
    }

    #[test]
    fn picks_extremes() {
        let data = vec![
            record("AC", 70.0),
            record("AM", 95.0),
            record("AP", 60.0),
            record("PA", 88.0),
            record("RO", 101.5),
        ];
        let refs: Vec<&CoverageRecord> = data.iter().collect();

        assert_eq!(codes(&top_n(&refs, 3)), vec!["RO", "AM", "PA"]);
        assert_eq!(codes(&bottom_n(&refs, 3)), vec!["AP", "AC", "PA"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let data = vec![record("AC", 80.0), record("AM", 80.0), record("AP", 80.0)];
        let refs: Vec<&CoverageRecord> = data.iter().collect();

        assert_eq!(codes(&top_n(&refs, 2)), vec!["AC", "AM"]);
        assert_eq!(codes(&bottom_n(&refs, 2)), vec!["AC", "AM"]);
    }

    #[test]
    fn short_input_is_returned_whole() {
        let data = vec![record("AC", 80.0)];
        let refs: Vec<&CoverageRecord> = data.iter().collect();
        assert_eq!(top_n(&refs, 3).len(), 1);
        assert!(bottom_n(&[], 3).is_empty());
    }
}
