//! Shared chart chrome: view box, plot area, grid, axes and legend.
//!
//! Charts draw into a fixed `VIEW_WIDTH x VIEW_HEIGHT` coordinate system and
//! let the browser scale it to the card.

use super::axis::{self, AxisKind, PlotSpec};
use leptos::prelude::*;

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 220.0;

/// Inner rectangle the series are plotted in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        let (left, top, right, bottom) = (52.0, 10.0, 10.0, 28.0);
        Self {
            left,
            top,
            width: VIEW_WIDTH - left - right,
            height: VIEW_HEIGHT - top - bottom,
        }
    }
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal centre of category `index` out of `count`
    pub fn x_center(&self, index: usize, count: usize) -> f64 {
        let (x, w) = self.band(index, count);
        x + w / 2.0
    }

    /// Left edge and width of category band `index` out of `count`
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        let w = self.width / count.max(1) as f64;
        (self.left + w * index as f64, w)
    }

    /// SVG y for a fraction of the value domain (0 = axis, 1 = top)
    pub fn y_for(&self, fraction: f64) -> f64 {
        self.bottom() - fraction.clamp(0.0, 1.0) * self.height
    }
}

#[component]
pub fn ChartFrame(
    title: Option<String>,
    #[prop(into)] kind: Signal<AxisKind>,
    #[prop(into)] domain: Signal<(f64, f64)>,
    /// Category labels along the x axis
    #[prop(into)]
    labels: Signal<Vec<String>>,
    legend: Vec<PlotSpec>,
    children: Children,
) -> impl IntoView {
    let area = PlotArea::default();

    let grid = move || {
        let kind = kind.get();
        let domain = domain.get();
        axis::ticks(domain)
            .into_iter()
            .map(|tick| {
                let y = format!("{:.1}", area.y_for(axis::normalize(tick, domain)));
                view! {
                    <line
                        x1=area.left.to_string()
                        x2=area.right().to_string()
                        y1=y.clone()
                        y2=y.clone()
                        class="chart__grid"
                    />
                    <text x=(area.left - 6.0).to_string() y=y text-anchor="end" dominant-baseline="middle" class="chart__tick">
                        {axis::format_tick(kind, tick)}
                    </text>
                }
            })
            .collect_view()
    };

    let x_labels = move || {
        let labels = labels.get();
        let count = labels.len();
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <text
                        x=format!("{:.1}", area.x_center(i, count))
                        y=(area.bottom() + 16.0).to_string()
                        text-anchor="middle"
                        class="chart__tick"
                    >
                        {label}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart">
            {title.map(|t| view! { <h4 class="chart__title">{t}</h4> })}
            <svg
                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
                class="chart__svg"
            >
                {grid}
                {x_labels}
                {children()}
            </svg>
            <div class="chart__legend">
                {legend.into_iter().map(|p| view! {
                    <span class="chart__legend-item">
                        <span class="chart__swatch" style=format!("background: {};", p.color)></span>
                        {p.key}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}
