//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, LabelSeries, PALETTE, REGRESSION_COLOR};
pub use renderer::{RenderError, StaticChartRenderer};
