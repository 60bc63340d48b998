//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
pub mod narrative;

pub use app::DashboardApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
