//! Chart Viewer Widget
//! Central scrollable panel: title, scatter chart, yearly trend and narrative.

use crate::charts::ChartPlotter;
use crate::config::LabelSet;
use crate::gui::narrative;
use crate::locale;
use crate::pipeline::YearView;
use crate::stats::YearCorrelation;
use egui::{Color32, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 600.0;

#[derive(Default)]
pub struct ChartViewer {
    pub view: Option<YearView>,
    pub trend: Vec<YearCorrelation>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.view = None;
        self.trend.clear();
    }

    pub fn show(&self, ui: &mut egui::Ui, labels: LabelSet) {
        let text = locale::strings(labels);

        let Some(view) = &self.view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(text.no_data).size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("{} - {}", text.chart_title, view.year))
                        .size(20.0)
                        .strong(),
                );

                let subtitle_color = if view.correlation.is_perfect() {
                    Color32::from_rgb(243, 156, 18)
                } else {
                    Color32::GRAY
                };
                ui.label(
                    RichText::new(view.correlation.subtitle(labels))
                        .size(13.0)
                        .color(subtitle_color),
                );
                ui.add_space(8.0);

                ChartPlotter::draw_scatter(ui, view, labels, CHART_HEIGHT);

                ui.add_space(12.0);
                egui::CollapsingHeader::new(RichText::new(text.trend_title).size(14.0).strong())
                    .default_open(false)
                    .show(ui, |ui| {
                        ChartPlotter::draw_trend_table(ui, &self.trend, view.year, labels);
                    });

                ui.add_space(12.0);
                ui.separator();
                narrative::show(ui, labels);
            });
    }
}
