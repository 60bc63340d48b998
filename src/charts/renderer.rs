//! Static Chart Renderer
//! Draws the scatter report into a PNG image with plotters.
//!
//! Layout:
//! 1. Title: "{chart title} - {year}" centered
//! 2. Caption: correlation subtitle
//! 3. Scatter colored by region, optional state codes, optional regression line
//! 4. Legend in the upper left corner

use crate::charts::plotter::{ChartPlotter, REGRESSION_COLOR};
use crate::config::LabelSet;
use crate::locale;
use crate::pipeline::YearView;
use image::RgbImage;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Pixel buffer does not match {0}x{1}")]
    BufferSize(u32, u32),
}

fn drawing_error(e: impl Display) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn rgb(color: egui::Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Padded axis range; `fallback` when there is nothing to show.
    pub fn axis_range(values: impl Iterator<Item = f64>, fallback: Range<f64>) -> Range<f64> {
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return fallback;
        }
        let pad = if max > min { (max - min) * 0.08 } else { min.abs() * 0.05 + 0.05 };
        (min - pad)..(max + pad)
    }

    /// Render the year view into an RGB image.
    pub fn render_image(
        view: &YearView,
        labels: LabelSet,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, RenderError> {
        let text = locale::strings(labels);
        let series = ChartPlotter::series_by_label(&view.records);

        let x_range = Self::axis_range(
            series.iter().flat_map(|s| s.points.iter().map(|(_, p)| p[0])),
            0.0..1.0,
        );
        let y_range = Self::axis_range(
            series.iter().flat_map(|s| s.points.iter().map(|(_, p)| p[1])),
            0.0..100.0,
        );

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_error)?;

            let title = format!("{} - {}", text.chart_title, view.year);
            let area = root
                .titled(&title, ("sans-serif", 26))
                .map_err(drawing_error)?;

            let mut chart = ChartBuilder::on(&area)
                .caption(view.correlation.subtitle(labels), ("sans-serif", 16))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range, y_range)
                .map_err(drawing_error)?;

            chart
                .configure_mesh()
                .x_desc(text.x_axis)
                .y_desc(text.y_axis)
                .axis_desc_style(("sans-serif", 15))
                .draw()
                .map_err(drawing_error)?;

            for s in &series {
                let color = rgb(ChartPlotter::region_color(s.color_index));

                chart
                    .draw_series(
                        s.points
                            .iter()
                            .map(|(_, [x, y])| Circle::new((*x, *y), 5, color.filled())),
                    )
                    .map_err(drawing_error)?
                    .label(s.label)
                    .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));

                if view.show_labels {
                    let style = ("sans-serif", 13)
                        .into_font()
                        .color(&color)
                        .pos(Pos::new(HPos::Center, VPos::Bottom));
                    chart
                        .draw_series(s.points.iter().map(|(record, [x, y])| {
                            Text::new(record.region_code.clone(), (*x, *y), style.clone())
                        }))
                        .map_err(drawing_error)?;
                }
            }

            if let Some(regression) = &view.regression {
                let line_color = rgb(REGRESSION_COLOR);
                chart
                    .draw_series(LineSeries::new(
                        regression.points.iter().map(|p| (p[0], p[1])),
                        line_color.stroke_width(2),
                    ))
                    .map_err(drawing_error)?
                    .label(text.regression_series)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(drawing_error)?;

            root.present().map_err(drawing_error)?;
        }

        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::BufferSize(width, height))
    }

    /// Render and write a PNG file.
    pub fn save_png(
        view: &YearView,
        labels: LabelSet,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let image = Self::render_image(view, labels, width, height)?;
        image.save(path)?;
        info!(path = %path.display(), year = view.year, "exported chart");
        Ok(())
    }
}
