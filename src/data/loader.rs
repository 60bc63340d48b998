//! CSV Data Loader Module
//! Handles CSV file loading and column validation using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Reads the coverage dataset with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file and check that every required column is present.
    pub fn load_csv(path: &Path, required: &[&str]) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        // Infer over every row: a column whose leading rows are whole numbers
        // would otherwise be typed Int64 and later decimals read as null.
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(None)
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded CSV"
        );

        Self::validate_columns(&df, required)?;
        Ok(df)
    }

    /// Fail on the first required column the frame lacks.
    pub fn validate_columns(df: &DataFrame, required: &[&str]) -> Result<(), LoaderError> {
        let present = Self::get_columns(df);
        debug!(?present, "validating columns");

        match required
            .iter()
            .find(|name| !present.iter().any(|p| p == *name))
        {
            Some(missing) => Err(LoaderError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Get list of column names from a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_and_columns() {
        let file = write_csv(
            "LOCAL_NAME,INDICATOR,AGE,PC_COVERAGE,YEAR,MHDI_I\n\
             SP,FL_U1_BCG,0-1 ano,95.5,2021,0.78\n\
             RJ,FL_U1_DTP,1 ano,88.0,2021,0.75\n",
        );

        let df = DataLoader::load_csv(file.path(), &["LOCAL_NAME", "PC_COVERAGE"]).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 6);
    }

    #[test]
    fn late_decimal_values_are_kept() {
        let mut csv = String::from("LOCAL_NAME,INDICATOR,AGE,PC_COVERAGE,YEAR,MHDI_I\n");
        for _ in 0..10_050 {
            csv.push_str("XX,FL_U1_BCG,0-1 ano,90,2020,1\n");
        }
        csv.push_str("SP,FL_U1_BCG,0-1 ano,95.5,2021,0.78\n");
        csv.push_str("RJ,FL_U1_BCG,0-1 ano,88.25,2021,0.75\n");
        let file = write_csv(&csv);

        let df = DataLoader::load_csv(file.path(), &["PC_COVERAGE", "MHDI_I"]).unwrap();
        assert_eq!(df.height(), 10_052);

        let coverage = df.column("PC_COVERAGE").unwrap().f64().unwrap();
        assert_eq!(coverage.get(10_050), Some(95.5));
        assert_eq!(coverage.get(10_051), Some(88.25));
        assert_eq!(coverage.null_count(), 0);

        let index = df.column("MHDI_I").unwrap().f64().unwrap();
        assert_eq!(index.get(10_051), Some(0.75));
    }

    #[test]
    fn missing_column_is_fatal() {
        let file = write_csv("LOCAL_NAME,YEAR\nSP,2021\n");

        let err = DataLoader::load_csv(file.path(), &["LOCAL_NAME", "MHDI_I"]).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == "MHDI_I"));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = DataLoader::load_csv(Path::new("/nonexistent/coverage.csv"), &[]).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
        assert!(err.to_string().contains("coverage.csv"));
    }
}
