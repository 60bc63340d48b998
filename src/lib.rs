//! VaxDash - Immunization Coverage Dashboard
//!
//! Loads state-level immunization coverage, relates it to the municipal
//! human-development income index and renders an interactive report.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod locale;
pub mod logging;
pub mod pipeline;
pub mod stats;
