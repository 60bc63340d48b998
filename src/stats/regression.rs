//! Ordinary least-squares line used for the chart overlay.

use crate::stats::correlation::is_constant;

/// Smallest sample a line is fitted to.
pub const MIN_REGRESSION_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fitted line sampled over the observed x range.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionLine {
    pub fit: LinearFit,
    pub points: Vec<[f64; 2]>,
}

impl RegressionLine {
    /// Fit `ys` on `xs` and sample `samples` points between min and max x.
    pub fn compute(xs: &[f64], ys: &[f64], samples: usize) -> Option<Self> {
        let fit = fit_linear(xs, ys)?;

        let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let points = linspace(min, max, samples)
            .into_iter()
            .map(|x| [x, fit.predict(x)])
            .collect();

        Some(Self { fit, points })
    }
}

/// Degree-1 least-squares fit. `None` below two points or when x is constant.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let n = xs.len().min(ys.len());
    if n < MIN_REGRESSION_POINTS || is_constant(&xs[..n]) {
        return None;
    }

    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (x, y) in xs.iter().zip(ys.iter()) {
        sxy += (x - mean_x) * (y - mean_y);
        sxx += (x - mean_x).powi(2);
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_line() {
        let fit = fit_linear(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
        assert!((fit.slope - 1.0).abs() < 1e-9);
        assert!(fit.intercept.abs() < 1e-9);
    }

    #[test]
    fn two_points_are_enough() {
        let fit = fit_linear(&[0.5, 0.7], &[80.0, 90.0]).unwrap();
        assert!((fit.slope - 50.0).abs() < 1e-9);
        assert!((fit.predict(0.6) - 85.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_have_no_line() {
        assert!(fit_linear(&[0.5], &[80.0]).is_none());
        assert!(fit_linear(&[], &[]).is_none());
        assert!(fit_linear(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0]).is_none());
        assert!(RegressionLine::compute(&[0.5], &[80.0], 100).is_none());
    }

    #[test]
    fn constant_index_has_no_line() {
        assert!(fit_linear(&[0.7, 0.7, 0.7], &[80.0, 90.0, 85.0]).is_none());
        assert!(RegressionLine::compute(&[0.73, 0.73], &[88.0, 91.0], 100).is_none());
    }

    #[test]
    fn line_spans_observed_range() {
        let xs = [0.62, 0.80, 0.71];
        let ys = [70.0, 95.0, 81.0];
        let line = RegressionLine::compute(&xs, &ys, 100).unwrap();

        assert_eq!(line.points.len(), 100);
        assert_eq!(line.points[0][0], 0.62);
        assert_eq!(line.points[99][0], 0.80);
        for p in &line.points {
            assert!((p[1] - line.fit.predict(p[0])).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
