use super::axis::{self, AxisKind, PlotSpec};
use super::frame::{ChartFrame, PlotArea, VIEW_HEIGHT, VIEW_WIDTH};
use contracts::dashboards::d100_executive::{TimeSeries, TimeSeriesPoint};
use leptos::prelude::*;

/// Share of each category band left empty between groups
const BAND_PADDING: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub kind: AxisKind,
    pub domain: (f64, f64),
    pub bars: Vec<BarRect>,
}

impl BarChartModel {
    /// Grouped bars side by side, or one stacked bar per category.
    ///
    /// `is_percentage` overrides the key heuristic when set.
    pub fn build(
        series: &TimeSeries,
        plots: &[PlotSpec],
        is_percentage: Option<bool>,
        stacked: bool,
    ) -> Self {
        let kind = if is_percentage.unwrap_or_else(|| axis::is_percentage(plots)) {
            AxisKind::Percent
        } else {
            AxisKind::Magnitude
        };

        let value = |point: &TimeSeriesPoint, key: &str| point.get(key).unwrap_or(0.0).max(0.0);

        let max = series
            .iter()
            .map(|point| {
                if stacked {
                    plots.iter().map(|p| value(point, &p.key)).sum::<f64>()
                } else {
                    plots
                        .iter()
                        .map(|p| value(point, &p.key))
                        .fold(0.0, f64::max)
                }
            })
            .reduce(f64::max);
        let domain = axis::bar_domain(kind, max);

        let area = PlotArea::default();
        let count = series.len();
        let groups = if stacked { 1 } else { plots.len().max(1) };
        let mut bars = Vec::with_capacity(count * plots.len());

        for (i, point) in series.iter().enumerate() {
            let (band_x, band_w) = area.band(i, count);
            let inner_x = band_x + band_w * BAND_PADDING / 2.0;
            let bar_w = band_w * (1.0 - BAND_PADDING) / groups as f64;
            let mut base = 0.0;

            for (j, plot) in plots.iter().enumerate() {
                let v = value(point, &plot.key);
                let (lo, hi) = if stacked { (base, base + v) } else { (0.0, v) };
                base = hi;

                let top = area.y_for(axis::normalize(hi, domain));
                let bottom = area.y_for(axis::normalize(lo, domain));
                let x = if stacked {
                    inner_x
                } else {
                    inner_x + bar_w * j as f64
                };
                bars.push(BarRect {
                    x,
                    y: top,
                    width: bar_w,
                    height: bottom - top,
                    color: plot.color.clone(),
                    hover: format!(
                        "{} {}: {}",
                        point.period,
                        plot.key,
                        axis::format_tooltip(kind, v)
                    ),
                });
            }
        }

        Self { kind, domain, bars }
    }
}

#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<TimeSeries>,
    plots: Vec<PlotSpec>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] is_percentage: Option<bool>,
    #[prop(optional)] stacked: bool,
) -> impl IntoView {
    let plots = StoredValue::new(plots);
    let model = Memo::new(move |_| {
        plots.with_value(|p| BarChartModel::build(&data.get(), p, is_percentage, stacked))
    });
    let labels = Signal::derive(move || {
        data.with(|s| s.labels().into_iter().map(String::from).collect::<Vec<_>>())
    });

    view! {
        <ChartFrame
            title=title
            kind=Signal::derive(move || model.get().kind)
            domain=Signal::derive(move || model.get().domain)
            labels=labels
            legend=plots.get_value()
        >
            <svg viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) class="chart__plot">
                {move || model.get().bars.into_iter().map(|bar| view! {
                    <rect
                        x=format!("{:.1}", bar.x)
                        y=format!("{:.1}", bar.y)
                        width=format!("{:.1}", bar.width)
                        height=format!("{:.1}", bar.height)
                        fill=bar.color
                        rx="2"
                        class="chart__bar"
                    >
                        <title>{bar.hover}</title>
                    </rect>
                }).collect_view()}
            </svg>
        </ChartFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost_series() -> TimeSeries {
        TimeSeries::from_points(vec![
            TimeSeriesPoint::new("Q1")
                .with("Transport Cost", 60_000.0)
                .with("Warehouse Cost", 90_000.0),
            TimeSeriesPoint::new("Q2")
                .with("Transport Cost", 40_000.0)
                .with("Warehouse Cost", 50_000.0),
        ])
        .unwrap()
    }

    fn plots() -> Vec<PlotSpec> {
        vec![
            PlotSpec::new("Transport Cost", "#F59E0B"),
            PlotSpec::new("Warehouse Cost", "#6366F1"),
        ]
    }

    #[test]
    fn test_grouped_bars_sit_side_by_side() {
        let model = BarChartModel::build(&cost_series(), &plots(), None, false);
        assert_eq!(model.kind, AxisKind::Magnitude);
        assert_eq!(model.domain, (0.0, 100_000.0));
        assert_eq!(model.bars.len(), 4);
        let (a, b) = (&model.bars[0], &model.bars[1]);
        assert!((a.x + a.width - b.x).abs() < 1e-9);
        assert!((a.y + a.height - PlotArea::default().bottom()).abs() < 1e-9);
    }

    #[test]
    fn test_stacked_domain_uses_sums() {
        let model = BarChartModel::build(&cost_series(), &plots(), None, true);
        assert_eq!(model.domain, (0.0, 200_000.0));
        let (lower, upper) = (&model.bars[0], &model.bars[1]);
        assert_eq!(lower.x, upper.x);
        assert!((upper.y + upper.height - lower.y).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_heuristic_and_override() {
        let series = TimeSeries::from_points(vec![
            TimeSeriesPoint::new("Global Freight").with("Margin", 12.5),
        ])
        .unwrap();
        let margin = [PlotSpec::new("Margin", "#82ca9d")];
        let model = BarChartModel::build(&series, &margin, None, false);
        assert_eq!(model.kind, AxisKind::Percent);
        assert_eq!(model.domain, (0.0, 100.0));
        assert!(model.bars[0].hover.ends_with("12.5%"));

        let forced = BarChartModel::build(&series, &margin, Some(false), false);
        assert_eq!(forced.kind, AxisKind::Magnitude);
        assert_eq!(forced.domain, (0.0, 20.0));
    }

    #[test]
    fn test_satisfaction_override_keeps_plain_axis() {
        let series = TimeSeries::from_points(vec![
            TimeSeriesPoint::new("A").with("Satisfaction", 4.6),
            TimeSeriesPoint::new("B").with("Satisfaction", 4.1),
        ])
        .unwrap();
        let model = BarChartModel::build(
            &series,
            &[PlotSpec::new("Satisfaction", "#8884d8")],
            Some(false),
            false,
        );
        assert_eq!(model.domain, (0.0, 5.0));
        assert_eq!(axis::format_tick(model.kind, 2.5), "2.5");
    }

    #[test]
    fn test_empty_series_has_no_bars() {
        let model = BarChartModel::build(&TimeSeries::new(), &plots(), None, false);
        assert!(model.bars.is_empty());
        assert_eq!(model.domain, (0.0, 1.0));
    }
}
