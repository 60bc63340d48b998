//! Pearson correlation with its significance test.

use crate::config::{LabelSet, PValueMethod};
use crate::locale;
use statrs::distribution::{Beta, ContinuousCDF, StudentsT};

/// Smallest sample for which a correlation is reported.
pub const MIN_CORRELATION_POINTS: usize = 3;

/// Correlation between development index and coverage for one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrelationOutcome {
    /// Fewer than three points.
    InsufficientData { n: usize },
    /// One of the variables is constant, r is 0/0.
    Undefined { n: usize },
    /// r is exactly +1 or -1, p is 0.
    Perfect { r: f64, n: usize },
    Estimated {
        r: f64,
        p_value: Option<f64>,
        n: usize,
    },
}

impl CorrelationOutcome {
    pub fn n(&self) -> usize {
        match *self {
            Self::InsufficientData { n }
            | Self::Undefined { n }
            | Self::Perfect { n, .. }
            | Self::Estimated { n, .. } => n,
        }
    }

    pub fn r(&self) -> Option<f64> {
        match *self {
            Self::Perfect { r, .. } | Self::Estimated { r, .. } => Some(r),
            _ => None,
        }
    }

    pub fn p_value(&self) -> Option<f64> {
        match *self {
            Self::Perfect { .. } => Some(0.0),
            Self::Estimated { p_value, .. } => p_value,
            _ => None,
        }
    }

    pub fn is_perfect(&self) -> bool {
        matches!(self, Self::Perfect { .. })
    }

    /// One-line summary shown under the chart title.
    pub fn subtitle(&self, labels: LabelSet) -> String {
        let text = locale::strings(labels);
        match *self {
            Self::InsufficientData { .. } => text.insufficient_data.to_string(),
            Self::Undefined { .. } => text.undefined_correlation.to_string(),
            Self::Perfect { r, .. } => format!(
                "{}: {:.3} | {}: {:.3} ({})",
                text.correlation, r, text.p_value, 0.0, text.perfect_correlation
            ),
            Self::Estimated {
                r,
                p_value: Some(p),
                ..
            } => format!("{}: {:.3} | {}: {:.3}", text.correlation, r, text.p_value, p),
            Self::Estimated { r, p_value: None, .. } => {
                format!("{}: {:.3}", text.correlation, r)
            }
        }
    }
}

/// Correlate `xs` with `ys`, guarding the degenerate cases.
pub fn correlate(xs: &[f64], ys: &[f64], method: PValueMethod) -> CorrelationOutcome {
    let n = xs.len().min(ys.len());
    if n < MIN_CORRELATION_POINTS {
        return CorrelationOutcome::InsufficientData { n };
    }

    let Some(r) = pearson_centered(&xs[..n], &ys[..n]) else {
        return CorrelationOutcome::Undefined { n };
    };
    let r = r.clamp(-1.0, 1.0);

    if r * r == 1.0 {
        return CorrelationOutcome::Perfect { r, n };
    }

    let p_value = match method {
        PValueMethod::StudentT => student_t_p_value(r, n),
        PValueMethod::Beta => beta_p_value(r, n),
        PValueMethod::Omit => None,
    };

    CorrelationOutcome::Estimated { r, p_value, n }
}

/// Every value equals the first. The sums of squares of such a series are not
/// always exactly zero once the mean is rounded.
pub(crate) fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Pearson r from mean-centered sums. `None` when either variable is constant.
pub fn pearson_centered(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n == 0 || is_constant(&xs[..n]) || is_constant(&ys[..n]) {
        return None;
    }

    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some(sxy / (sxx * syy).sqrt())
}

/// Pearson r from raw sums: (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²)).
pub fn pearson_raw(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let len = xs.len().min(ys.len());
    if len == 0 || is_constant(&xs[..len]) || is_constant(&ys[..len]) {
        return None;
    }
    let n = len as f64;

    let (mut sx, mut sy, mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys.iter()) {
        sx += x;
        sy += y;
        sxy += x * y;
        sxx += x * x;
        syy += y * y;
    }

    let var_x = n * sxx - sx * sx;
    let var_y = n * syy - sy * sy;
    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }
    Some((n * sxy - sx * sy) / (var_x * var_y).sqrt())
}

/// Two-tailed test of r against Student-t with n - 2 degrees of freedom.
fn student_t_p_value(r: f64, n: usize) -> Option<f64> {
    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t.abs())))
}

/// Under independence (r + 1) / 2 follows Beta(n/2 - 1, n/2 - 1).
fn beta_p_value(r: f64, n: usize) -> Option<f64> {
    let shape = n as f64 / 2.0 - 1.0;
    let dist = Beta::new(shape, shape).ok()?;
    Some((2.0 * dist.cdf(0.5 * (1.0 - r.abs()))).min(1.0))
}
