//! VaxDash Main Application
//! Main window with control panel and chart viewer.

use crate::charts::StaticChartRenderer;
use crate::config::DashboardConfig;
use crate::data::CoverageTable;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::locale;
use crate::pipeline::{self, ViewSettings};
use crate::stats::{StatsCalculator, YearCorrelation};
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::{error, info, warn};

const EXPORT_WIDTH: u32 = 1400;
const EXPORT_HEIGHT: u32 = 900;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete {
        table: CoverageTable,
        trend: Vec<YearCorrelation>,
    },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Aggregated once per dataset, reused for every year/toggle change
    table: Option<CoverageTable>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(ViewSettings::from_config(&config)),
            chart_viewer: ChartViewer::new(),
            table: None,
            load_rx: None,
            is_loading: false,
            config,
        };

        let path = app.config.csv_path.clone();
        app.start_loading(path);
        app
    }

    /// Load, filter and aggregate in a background thread.
    fn start_loading(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }

        self.chart_viewer.clear();
        self.table = None;
        self.control_panel.set_year_bounds(None);
        self.control_panel.csv_path = Some(path.clone());
        self.control_panel.set_status("Loading CSV file...");
        self.control_panel.busy = true;
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let config = self.config.clone();

        thread::spawn(move || {
            Self::run_loading(tx, path, config);
        });
    }

    /// Run the pipeline (called from background thread)
    fn run_loading(tx: Sender<LoadResult>, path: PathBuf, config: DashboardConfig) {
        let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

        match pipeline::load_table(&path, &config) {
            Ok(table) => {
                let _ = tx.send(LoadResult::Progress(
                    "Calculating correlations...".to_string(),
                ));
                let trend = StatsCalculator::correlation_by_year(&table, config.p_value_method);
                let _ = tx.send(LoadResult::Complete { table, trend });
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to build coverage table");
                let _ = tx.send(LoadResult::Error(e.to_string()));
            }
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_status(&status);
                    }
                    LoadResult::Complete { table, trend } => {
                        self.control_panel.set_year_bounds(table.year_range());
                        self.control_panel.set_status(&format!(
                            "Loaded {} state-year groups",
                            table.len()
                        ));
                        self.chart_viewer.trend = trend;
                        self.table = Some(table);
                        self.refresh_view();
                        self.finish_loading();
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel.set_status(&format!("Error: {}", error));
                        self.finish_loading();
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.busy = false;
    }

    /// Rebuild the year view from the cached table.
    fn refresh_view(&mut self) {
        let Some(table) = &self.table else {
            return;
        };

        let view = pipeline::build_view(table, &self.control_panel.settings, &self.config);
        self.control_panel.settings.year = view.year;
        self.chart_viewer.view = Some(view);
    }

    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            info!(path = %path.display(), "opening dataset");
            self.start_loading(path);
        }
    }

    /// Handle PNG export of the current chart
    fn handle_export_png(&mut self) {
        let Some(view) = &self.chart_viewer.view else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("coverage_{}.png", view.year))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match StaticChartRenderer::save_png(
            view,
            self.config.label_set,
            &output_path,
            EXPORT_WIDTH,
            EXPORT_HEIGHT,
        ) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Exported {}", output_path.display()));
                if let Err(e) = open::that(&output_path) {
                    warn!(error = %e, "could not open exported chart");
                }
            }
            Err(e) => {
                error!(error = %e, "chart export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        let labels = self.config.label_set;

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action =
                        self.control_panel
                            .show(ui, self.chart_viewer.view.as_ref(), labels);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::SettingsChanged => self.refresh_view(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(locale::strings(labels).app_title);
            ui.add_space(6.0);
            self.chart_viewer.show(ui, labels);
        });
    }
}
