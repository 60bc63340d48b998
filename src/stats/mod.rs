//! Stats module - correlation, regression and ranking

mod calculator;
pub mod correlation;
pub mod ranking;
pub mod regression;

pub use calculator::{StatsCalculator, YearCorrelation};
pub use correlation::CorrelationOutcome;
pub use regression::{LinearFit, RegressionLine};
