//! Single-series radar (spider) chart

use contracts::dashboards::d100_executive::RadarData;
use leptos::prelude::*;
use std::f64::consts::PI;

const CENTER: f64 = 130.0;
const RADIUS: f64 = 90.0;
const RINGS: usize = 4;
const LABEL_OFFSET: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub subject: String,
    /// Rim end of the spoke
    pub end: (f64, f64),
    pub label_at: (f64, f64),
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarModel {
    /// Shared `[0, max]` domain of every spoke
    pub max: f64,
    pub axes: Vec<RadarAxis>,
    /// Value polygon vertices, one per spoke
    pub points: Vec<(f64, f64)>,
    /// Grid polygons from the innermost ring outwards
    pub rings: Vec<Vec<(f64, f64)>>,
}

/// Coordinates of `ratio` along spoke `index` of `count`; the first spoke points up
fn spoke_point(index: usize, count: usize, ratio: f64) -> (f64, f64) {
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count.max(1) as f64;
    (
        CENTER + RADIUS * ratio * angle.cos(),
        CENTER + RADIUS * ratio * angle.sin(),
    )
}

impl RadarModel {
    pub fn build(data: &[RadarData]) -> Self {
        let max = data.iter().map(|d| d.full_mark).fold(0.0, f64::max);
        let count = data.len();
        let ratio = |value: f64| {
            if max <= 0.0 {
                0.0
            } else {
                (value / max).clamp(0.0, 1.0)
            }
        };

        let axes = data
            .iter()
            .enumerate()
            .map(|(i, d)| RadarAxis {
                subject: d.subject.clone(),
                end: spoke_point(i, count, 1.0),
                label_at: spoke_point(i, count, 1.0 + LABEL_OFFSET / RADIUS),
                hover: format!("{}: {:.1}", d.subject, d.value),
            })
            .collect();

        let points = data
            .iter()
            .enumerate()
            .map(|(i, d)| spoke_point(i, count, ratio(d.value)))
            .collect();

        let rings = (1..=RINGS)
            .map(|ring| {
                let r = ring as f64 / RINGS as f64;
                (0..count).map(|i| spoke_point(i, count, r)).collect()
            })
            .collect();

        Self {
            max,
            axes,
            points,
            rings,
        }
    }
}

fn polygon_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn RadarChart(
    #[prop(into)] data: Signal<Vec<RadarData>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = "#6366F1".to_string(), into)] color: String,
) -> impl IntoView {
    let model = Memo::new(move |_| data.with(|d| RadarModel::build(d)));
    let fill = color.clone();

    view! {
        <div class="chart chart--radar">
            {title.map(|t| view! { <h4 class="chart__title">{t}</h4> })}
            <svg viewBox="0 0 260 260" class="chart__svg">
                {move || model.get().rings.into_iter().map(|ring| view! {
                    <polygon points=polygon_points(&ring) fill="none" class="chart__grid" />
                }).collect_view()}
                {move || model.get().axes.into_iter().map(|axis| {
                    let (x, y) = axis.end;
                    let (lx, ly) = axis.label_at;
                    view! {
                        <line
                            x1=CENTER.to_string()
                            y1=CENTER.to_string()
                            x2=format!("{:.1}", x)
                            y2=format!("{:.1}", y)
                            class="chart__grid"
                        />
                        <text
                            x=format!("{:.1}", lx)
                            y=format!("{:.1}", ly)
                            text-anchor="middle"
                            dominant-baseline="middle"
                            class="chart__tick"
                        >
                            {axis.subject}
                            <title>{axis.hover}</title>
                        </text>
                    }
                }).collect_view()}
                <polygon
                    points=move || polygon_points(&model.get().points)
                    fill=fill
                    fill-opacity="0.6"
                    stroke=color
                    stroke-width="2"
                />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radar(subject: &str, value: f64) -> RadarData {
        RadarData {
            subject: subject.to_string(),
            value,
            full_mark: 100.0,
        }
    }

    #[test]
    fn test_first_spoke_points_up() {
        let model = RadarModel::build(&[radar("OTD", 100.0), radar("Accuracy", 50.0)]);
        let (x, y) = model.points[0];
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER - RADIUS)).abs() < 1e-9);
        // second of two spokes points straight down, half way out
        let (x, y) = model.points[1];
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER + RADIUS / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_values_clamped_to_rim() {
        let model = RadarModel::build(&[
            radar("OTD", 140.0),
            radar("Accuracy", -5.0),
            radar("Utilization", 80.0),
        ]);
        assert_eq!(model.points[0], model.axes[0].end);
        assert_eq!(model.points[1], (CENTER, CENTER));
    }

    #[test]
    fn test_shared_domain_is_largest_full_mark() {
        let mut data = vec![radar("OTD", 50.0), radar("Accuracy", 50.0)];
        data[1].full_mark = 200.0;
        let model = RadarModel::build(&data);
        assert_eq!(model.max, 200.0);
        assert_eq!(model.rings.len(), RINGS);
        assert!(model.rings.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_zero_full_mark_collapses_to_center() {
        let mut data = vec![radar("OTD", 50.0)];
        data[0].full_mark = 0.0;
        let model = RadarModel::build(&data);
        assert_eq!(model.points, vec![(CENTER, CENTER)]);
    }

    #[test]
    fn test_empty_input() {
        let model = RadarModel::build(&[]);
        assert!(model.points.is_empty());
        assert_eq!(polygon_points(&model.points), "");
    }
}
