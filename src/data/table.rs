//! Aggregated coverage table.

/// Mean coverage and development index of one state in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    pub region_code: String,
    pub region_label: String,
    pub year: i32,
    pub mean_coverage: f64,
    /// `None` when no row of the group carried an index value.
    pub mean_dev_index: Option<f64>,
}

/// Immutable set of aggregated records, ordered by (year, region_code).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageTable {
    records: Vec<CoverageRecord>,
}

impl CoverageTable {
    pub fn new(mut records: Vec<CoverageRecord>) -> Self {
        records.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.region_code.cmp(&b.region_code))
        });
        Self { records }
    }

    pub fn records(&self) -> &[CoverageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest year present.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.records.first()?.year;
        let last = self.records.last()?.year;
        Some((first, last))
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// Clamp a requested year into the table's range.
    pub fn clamp_year(&self, year: i32) -> i32 {
        match self.year_range() {
            Some((min, max)) => year.clamp(min, max),
            None => year,
        }
    }

    /// Records of one year, in region-code order.
    pub fn for_year(&self, year: i32) -> Vec<&CoverageRecord> {
        self.records.iter().filter(|r| r.year == year).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, year: i32, coverage: f64) -> CoverageRecord {
        CoverageRecord {
            region_code: code.to_string(),
            region_label: "South".to_string(),
            year,
            mean_coverage: coverage,
            mean_dev_index: Some(0.7),
        }
    }

    #[test]
    fn records_are_sorted_by_year_then_code() {
        let table = CoverageTable::new(vec![
            record("SC", 2021, 90.0),
            record("PR", 2020, 80.0),
            record("PR", 2021, 85.0),
        ]);
        let keys: Vec<_> = table
            .records()
            .iter()
            .map(|r| (r.year, r.region_code.as_str()))
            .collect();
        assert_eq!(keys, vec![(2020, "PR"), (2021, "PR"), (2021, "SC")]);
    }

    #[test]
    fn year_helpers() {
        let table = CoverageTable::new(vec![
            record("PR", 2019, 80.0),
            record("SC", 2021, 90.0),
            record("RS", 2021, 70.0),
        ]);
        assert_eq!(table.year_range(), Some((2019, 2021)));
        assert_eq!(table.years(), vec![2019, 2021]);
        assert_eq!(table.clamp_year(2030), 2021);
        assert_eq!(table.clamp_year(2000), 2019);
        assert_eq!(table.clamp_year(2020), 2020);
        assert_eq!(table.for_year(2021).len(), 2);
        assert!(table.for_year(2020).is_empty());
    }

    #[test]
    fn empty_table_has_no_range() {
        let table = CoverageTable::default();
        assert!(table.is_empty());
        assert_eq!(table.year_range(), None);
        assert_eq!(table.clamp_year(2021), 2021);
    }
}
