//! Chart Plotter Module
//! Creates the interactive scatter plot and side tables using egui_plot.

use crate::config::LabelSet;
use crate::data::regions::{label_index, MacroRegion};
use crate::data::CoverageRecord;
use crate::locale;
use crate::pipeline::YearView;
use crate::stats::YearCorrelation;
use egui::{Align2, Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use std::collections::BTreeMap;

/// Color of the regression overlay
pub const REGRESSION_COLOR: Color32 = Color32::from_rgb(52, 73, 94);

/// One color per macro-region, then spare entries for unknown labels.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

/// Points of one region label.
pub struct LabelSeries<'a> {
    pub label: &'a str,
    pub color_index: usize,
    pub points: Vec<(&'a CoverageRecord, [f64; 2])>,
}

/// Draws the report charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn region_color(color_index: usize) -> Color32 {
        PALETTE[color_index % PALETTE.len()]
    }

    /// Split plottable records by region label, in palette order.
    pub fn series_by_label(records: &[CoverageRecord]) -> Vec<LabelSeries<'_>> {
        let mut by_label: BTreeMap<(usize, &str), Vec<(&CoverageRecord, [f64; 2])>> =
            BTreeMap::new();
        let mut unknown: Vec<&str> = Vec::new();

        for record in records {
            let Some(x) = record.mean_dev_index else {
                continue;
            };
            let label = record.region_label.as_str();
            let color_index = match label_index(label) {
                Some(index) => index,
                None => {
                    let found = unknown.iter().position(|l| *l == label);
                    let pos = found.unwrap_or_else(|| {
                        unknown.push(label);
                        unknown.len() - 1
                    });
                    MacroRegion::ALL.len() + pos
                }
            };
            by_label
                .entry((color_index, label))
                .or_default()
                .push((record, [x, record.mean_coverage]));
        }

        by_label
            .into_iter()
            .map(|((color_index, label), points)| LabelSeries {
                label,
                color_index,
                points,
            })
            .collect()
    }

    /// Scatter of coverage against development index for the selected year.
    pub fn draw_scatter(ui: &mut egui::Ui, view: &YearView, labels: LabelSet, height: f32) {
        let text = locale::strings(labels);
        let series = Self::series_by_label(&view.records);

        Plot::new(format!("scatter_{}", view.year))
            .height(height)
            .legend(Legend::default())
            .x_axis_label(text.x_axis)
            .y_axis_label(text.y_axis)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for s in &series {
                    let color = Self::region_color(s.color_index);
                    let points: PlotPoints = s.points.iter().map(|(_, p)| *p).collect();

                    plot_ui.points(
                        Points::new(points)
                            .radius(5.0)
                            .color(color)
                            .name(s.label),
                    );

                    if view.show_labels {
                        for (record, [x, y]) in &s.points {
                            plot_ui.text(
                                Text::new(
                                    PlotPoint::new(*x, *y),
                                    RichText::new(&record.region_code).size(11.0),
                                )
                                .anchor(Align2::CENTER_BOTTOM)
                                .color(color),
                            );
                        }
                    }
                }

                if let Some(regression) = &view.regression {
                    let line: PlotPoints = regression.points.iter().copied().collect();
                    plot_ui.line(
                        Line::new(line)
                            .color(REGRESSION_COLOR)
                            .width(2.0)
                            .name(text.regression_series),
                    );
                }
            });
    }

    /// Small ranked table of states.
    pub fn draw_rank_table(
        ui: &mut egui::Ui,
        id: &str,
        title: &str,
        records: &[CoverageRecord],
        labels: LabelSet,
    ) {
        let text = locale::strings(labels);

        ui.label(RichText::new(title).size(13.0).strong());
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(id))
                    .striped(true)
                    .min_col_width(40.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("UF").strong().size(11.0));
                        ui.label(RichText::new(text.region).strong().size(11.0));
                        ui.label(RichText::new(text.coverage).strong().size(11.0));
                        ui.end_row();

                        for record in records {
                            let color = label_index(&record.region_label)
                                .map(Self::region_color)
                                .unwrap_or_else(|| ui.visuals().text_color());
                            ui.label(RichText::new(&record.region_code).size(11.0));
                            ui.label(
                                RichText::new(&record.region_label).size(11.0).color(color),
                            );
                            ui.label(
                                RichText::new(format!("{:.2}", record.mean_coverage)).size(11.0),
                            );
                            ui.end_row();
                        }
                    });
            });
    }

    /// Correlation and p-value for every year.
    pub fn draw_trend_table(
        ui: &mut egui::Ui,
        rows: &[YearCorrelation],
        selected_year: i32,
        labels: LabelSet,
    ) {
        let text = locale::strings(labels);
        let highlight = Color32::from_rgb(100, 149, 237);

        egui::Grid::new(ui.make_persistent_id("trend_table"))
            .striped(true)
            .min_col_width(55.0)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new(text.year).strong().size(11.0));
                ui.label(RichText::new(text.points).strong().size(11.0));
                ui.label(RichText::new("r").strong().size(11.0));
                ui.label(RichText::new(text.p_value).strong().size(11.0));
                ui.end_row();

                let default_text_color = ui.visuals().text_color();
                for row in rows {
                    let color = if row.year == selected_year {
                        highlight
                    } else {
                        default_text_color
                    };
                    let fmt = |v: Option<f64>| v.map(|v| format!("{:.3}", v)).unwrap_or("-".into());

                    ui.label(RichText::new(row.year.to_string()).size(11.0).color(color));
                    ui.label(RichText::new(row.outcome.n().to_string()).size(11.0));
                    ui.label(RichText::new(fmt(row.outcome.r())).size(11.0));
                    ui.label(RichText::new(fmt(row.outcome.p_value())).size(11.0));
                    ui.end_row();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, label: &str, index: Option<f64>) -> CoverageRecord {
        CoverageRecord {
            region_code: code.to_string(),
            region_label: label.to_string(),
            year: 2021,
            mean_coverage: 90.0,
            mean_dev_index: index,
        }
    }

    #[test]
    fn series_follow_region_order_and_skip_missing_index() {
        let records = vec![
            record("PR", "South", Some(0.75)),
            record("AC", "North", Some(0.60)),
            record("AM", "North", Some(0.62)),
            record("BA", "Northeast", None),
        ];

        let series = ChartPlotter::series_by_label(&records);
        let labels: Vec<_> = series.iter().map(|s| (s.label, s.points.len())).collect();
        assert_eq!(labels, vec![("North", 2), ("South", 1)]);
        assert_eq!(series[0].color_index, 0);
        assert_eq!(series[1].color_index, 4);
    }

    #[test]
    fn unknown_labels_get_spare_colors() {
        let records = vec![
            record("X1", "Elsewhere", Some(0.5)),
            record("X2", "Nowhere", Some(0.6)),
            record("X3", "Elsewhere", Some(0.7)),
        ];

        let series = ChartPlotter::series_by_label(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Elsewhere");
        assert_eq!(series[0].color_index, 5);
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[1].color_index, 6);
    }
}
