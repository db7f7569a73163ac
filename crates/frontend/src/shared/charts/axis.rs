//! Value axis rules shared by the line and bar charts

use crate::shared::components::table::number_format::format_money;

/// Substrings that mark a metric key as a percentage
const PERCENT_MARKERS: [&str; 7] = [
    "margin",
    "rate",
    "ratio",
    "%",
    "otd",
    "accuracy",
    "utilization",
];

/// Number of intervals between value ticks
pub const TICK_INTERVALS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// `87.5%`
    Percent,
    /// Dollar ticks at every scale: `$950`, `$120k`, `$1.2M`
    Currency,
    /// Dollar ticks only once scaled to k/M; small values stay bare (`4.5`)
    Magnitude,
}

/// One plotted metric and its colour
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub key: String,
    pub color: String,
}

impl PlotSpec {
    pub fn new(key: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            color: color.into(),
        }
    }
}

pub fn is_percentage_key(key: &str) -> bool {
    let key = key.to_lowercase();
    PERCENT_MARKERS.iter().any(|m| key.contains(m))
}

pub fn is_percentage(plots: &[PlotSpec]) -> bool {
    plots.iter().any(|p| is_percentage_key(&p.key))
}

/// Tick label for a value on an axis of the given kind
pub fn format_tick(kind: AxisKind, value: f64) -> String {
    match kind {
        AxisKind::Percent => format!("{}%", trim_number(value)),
        AxisKind::Currency | AxisKind::Magnitude if value >= 1_000_000.0 => {
            format!("${:.1}M", value / 1_000_000.0)
        }
        AxisKind::Currency | AxisKind::Magnitude if value >= 1_000.0 => {
            format!("${:.0}k", value / 1_000.0)
        }
        AxisKind::Currency => format!("${}", trim_number(value)),
        AxisKind::Magnitude => trim_number(value),
    }
}

/// Hover text for a single reading
pub fn format_tooltip(kind: AxisKind, value: f64) -> String {
    match kind {
        AxisKind::Percent => format!("{:.1}%", value),
        AxisKind::Magnitude if value.abs() < 1_000.0 => trim_number(value),
        AxisKind::Currency | AxisKind::Magnitude => format_money(value),
    }
}

/// Line chart domain: percentages hug the data with 5 points of headroom
/// inside `[0, 100]`; amounts start at zero.
pub fn line_domain(kind: AxisKind, range: Option<(f64, f64)>) -> (f64, f64) {
    match (kind, range) {
        (AxisKind::Percent, Some((lo, hi))) => {
            let lo = (lo - 5.0).max(0.0);
            let hi = (hi + 5.0).min(100.0);
            if hi > lo {
                (lo, hi)
            } else {
                (0.0, 100.0)
            }
        }
        (AxisKind::Percent, None) => (0.0, 100.0),
        (_, range) => (0.0, nice_ceiling(range.map(|(_, hi)| hi).unwrap_or(0.0))),
    }
}

/// Bar chart domain: percentages always span `[0, 100]`
pub fn bar_domain(kind: AxisKind, max: Option<f64>) -> (f64, f64) {
    match kind {
        AxisKind::Percent => (0.0, 100.0),
        _ => (0.0, nice_ceiling(max.unwrap_or(0.0))),
    }
}

/// Smallest of 1, 2, 2.5, 5, 10 times a power of ten that is >= `value`
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced tick values from `lo` to `hi`, both included
pub fn ticks(domain: (f64, f64)) -> Vec<f64> {
    let (lo, hi) = domain;
    let step = (hi - lo) / TICK_INTERVALS as f64;
    (0..=TICK_INTERVALS).map(|i| lo + step * i as f64).collect()
}

/// Maps a value into `[0, 1]` within the domain; degenerate domains map to 0
pub fn normalize(value: f64, domain: (f64, f64)) -> f64 {
    let (lo, hi) = domain;
    if hi <= lo {
        return 0.0;
    }
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// `12.0` -> `"12"`, `12.25` -> `"12.3"`
fn trim_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{}", rounded)
}
