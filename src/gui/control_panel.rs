//! Control Panel Widget
//! Left side panel with the year slider, display toggles and ranked tables.

use crate::charts::ChartPlotter;
use crate::config::LabelSet;
use crate::locale;
use crate::pipeline::{ViewSettings, YearView};
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel.
pub struct ControlPanel {
    pub settings: ViewSettings,
    pub year_bounds: Option<(i32, i32)>,
    pub csv_path: Option<PathBuf>,
    pub status: String,
    pub busy: bool,
}

impl ControlPanel {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            settings,
            year_bounds: None,
            csv_path: None,
            status: "Ready".to_string(),
            busy: false,
        }
    }

    /// Bound the slider to the loaded years and pull the selection inside.
    pub fn set_year_bounds(&mut self, bounds: Option<(i32, i32)>) {
        self.year_bounds = bounds;
        if let Some((min, max)) = bounds {
            self.settings.year = self.settings.year.clamp(min, max);
        }
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view: Option<&YearView>,
        labels: LabelSet,
    ) -> ControlPanelAction {
        let text = locale::strings(labels);
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("💉 {}", text.sidebar_title))
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 CSV").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "-".to_string());
                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.busy, |ui| {
                            if ui.button("📂").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== View Settings Section =====
        if let Some((min, max)) = self.year_bounds {
            let slider = egui::Slider::new(&mut self.settings.year, min..=max).text(text.year);
            if ui.add(slider).changed() {
                action = ControlPanelAction::SettingsChanged;
            }
        } else {
            ui.label(RichText::new(text.no_data).color(Color32::GRAY));
        }

        ui.add_space(5.0);
        if ui
            .checkbox(&mut self.settings.show_regression, text.show_regression)
            .changed()
        {
            action = ControlPanelAction::SettingsChanged;
        }
        if ui
            .checkbox(&mut self.settings.show_labels, text.show_labels)
            .changed()
        {
            action = ControlPanelAction::SettingsChanged;
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(view.is_some() && !self.busy, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Ranked Tables =====
        if let Some(view) = view {
            ChartPlotter::draw_rank_table(ui, "best_table", text.best_regions, &view.best, labels);
            ui.add_space(10.0);
            ChartPlotter::draw_rank_table(ui, "worst_table", text.worst_regions, &view.worst, labels);
            ui.add_space(15.0);
            ui.separator();
        }

        // ===== Status =====
        ui.add_space(5.0);
        if self.busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(&self.status).size(11.0));
            });
        } else {
            let status_color = if self.status.starts_with("Error") {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        }

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    SettingsChanged,
    ExportPng,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds_clamp_selection() {
        let mut panel = ControlPanel::new(ViewSettings {
            year: 2021,
            show_regression: true,
            show_labels: false,
        });

        panel.set_year_bounds(Some((2015, 2019)));
        assert_eq!(panel.settings.year, 2019);

        panel.set_year_bounds(None);
        assert_eq!(panel.settings.year, 2019);
        assert_eq!(panel.year_bounds, None);
    }
}
