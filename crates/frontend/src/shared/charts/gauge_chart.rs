//! Semicircular gauge for a single reading

use contracts::dashboards::d100_executive::GaugeData;
use leptos::prelude::*;
use std::f64::consts::PI;

const CENTER_X: f64 = 100.0;
const CENTER_Y: f64 = 100.0;
const RADIUS: f64 = 80.0;
const TRACK_COLOR: &str = "#E5E7EB";

/// Filled share of the arc; the value is clamped into `[min, max]` first
pub fn gauge_fraction(value: f64, min: f64, max: f64) -> f64 {
    if max <= min || !value.is_finite() {
        return 0.0;
    }
    (value.clamp(min, max) - min) / (max - min)
}

/// Point on the arc, `0.0` at the left end and `1.0` at the right end
pub fn arc_point(fraction: f64) -> (f64, f64) {
    let angle = PI * (1.0 - fraction.clamp(0.0, 1.0));
    (
        CENTER_X + RADIUS * angle.cos(),
        CENTER_Y - RADIUS * angle.sin(),
    )
}

/// SVG path from the left end of the arc to `fraction`; empty for zero
pub fn arc_path(fraction: f64) -> String {
    if fraction <= 0.0 {
        return String::new();
    }
    let (x0, y0) = arc_point(0.0);
    let (x1, y1) = arc_point(fraction);
    format!(
        "M {:.2},{:.2} A {r},{r} 0 0 1 {:.2},{:.2}",
        x0,
        y0,
        x1,
        y1,
        r = RADIUS
    )
}

/// "72.4" or "12.5%" when the gauge name mentions a percentage
pub fn gauge_label(gauge: &GaugeData) -> String {
    let suffix = if gauge.name.contains('%') { "%" } else { "" };
    format!("{:.1}{}", gauge.value, suffix)
}

#[component]
pub fn GaugeChart(
    #[prop(into)] data: Signal<GaugeData>,
    #[prop(optional)] min: f64,
    max: f64,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let fraction = Memo::new(move |_| data.with(|g| gauge_fraction(g.value, min, max)));

    view! {
        <div class="chart chart--gauge">
            {title.map(|t| view! { <h4 class="chart__title">{t}</h4> })}
            <svg viewBox="0 0 200 120" class="chart__svg">
                <path
                    d=arc_path(1.0)
                    fill="none"
                    stroke=TRACK_COLOR
                    stroke-width="16"
                    stroke-linecap="round"
                />
                <path
                    d=move || arc_path(fraction.get())
                    fill="none"
                    stroke=move || data.with(|g| g.color.clone())
                    stroke-width="16"
                    stroke-linecap="round"
                />
                <text
                    x=CENTER_X.to_string()
                    y=(CENTER_Y - 8.0).to_string()
                    text-anchor="middle"
                    class="chart__gauge-value"
                >
                    {move || data.with(gauge_label)}
                </text>
                <text
                    x=CENTER_X.to_string()
                    y=(CENTER_Y + 14.0).to_string()
                    text-anchor="middle"
                    class="chart__tick"
                >
                    {move || data.with(|g| g.name.clone())}
                </text>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge(name: &str, value: f64) -> GaugeData {
        GaugeData {
            name: name.to_string(),
            value,
            color: "#10B981".to_string(),
        }
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(gauge_fraction(15.0, 0.0, 30.0), 0.5);
        assert_eq!(gauge_fraction(-4.0, 0.0, 30.0), 0.0);
        assert_eq!(gauge_fraction(90.0, 0.0, 72.0), 1.0);
    }

    #[test]
    fn test_degenerate_domain_reads_zero() {
        assert_eq!(gauge_fraction(5.0, 10.0, 10.0), 0.0);
        assert_eq!(gauge_fraction(5.0, 20.0, 10.0), 0.0);
    }

    #[test]
    fn test_arc_ends() {
        let (x0, y0) = arc_point(0.0);
        let (x1, y1) = arc_point(1.0);
        let (xm, ym) = arc_point(0.5);
        assert!((x0 - (CENTER_X - RADIUS)).abs() < 1e-9);
        assert!((y0 - CENTER_Y).abs() < 1e-9);
        assert!((x1 - (CENTER_X + RADIUS)).abs() < 1e-9);
        assert!((y1 - CENTER_Y).abs() < 1e-9);
        assert!((xm - CENTER_X).abs() < 1e-9);
        assert!((ym - (CENTER_Y - RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn test_arc_path() {
        assert!(arc_path(0.0).is_empty());
        let d = arc_path(1.0);
        assert!(d.starts_with("M 20.00,100.00 A 80,80"));
        assert!(d.ends_with("180.00,100.00"));
    }

    #[test]
    fn test_gauge_label() {
        assert_eq!(gauge_label(&gauge("ROIC %", 12.46)), "12.5%");
        assert_eq!(gauge_label(&gauge("Order Fulfillment (hrs)", 31.0)), "31.0");
    }
}
