//! VaxDash - Immunization Coverage Dashboard
//!
//! Relates state vaccination coverage to the human-development income index.

use eframe::egui;
use vaxdash::config::DashboardConfig;
use vaxdash::gui::DashboardApp;
use vaxdash::{locale, logging};

fn main() -> eframe::Result<()> {
    logging::init();

    let config = DashboardConfig::load_or_default();
    let title = locale::strings(config.label_set).app_title;
    tracing::info!(csv = %config.csv_path.display(), "starting dashboard");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title(title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
