use super::axis::{self, AxisKind, PlotSpec};
use super::frame::{ChartFrame, PlotArea, VIEW_HEIGHT, VIEW_WIDTH};
use contracts::dashboards::d100_executive::TimeSeries;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub key: String,
    pub color: String,
    /// SVG path data, `M x,y L x,y ...`
    pub d: String,
    /// Point coordinates with hover text
    pub points: Vec<(f64, f64, String)>,
}

/// Geometry of a line chart in the shared view box
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartModel {
    pub kind: AxisKind,
    pub domain: (f64, f64),
    pub lines: Vec<LinePath>,
}

impl LineChartModel {
    pub fn build(series: &TimeSeries, plots: &[PlotSpec]) -> Self {
        let kind = if axis::is_percentage(plots) {
            AxisKind::Percent
        } else {
            AxisKind::Currency
        };
        let keys: Vec<&str> = plots.iter().map(|p| p.key.as_str()).collect();
        let domain = axis::line_domain(kind, series.value_range(&keys));
        let area = PlotArea::default();
        let count = series.len();

        let lines = plots
            .iter()
            .map(|plot| {
                let points: Vec<(f64, f64, String)> = series
                    .iter()
                    .enumerate()
                    .map(|(i, point)| {
                        let value = point.get(&plot.key).unwrap_or(0.0);
                        let x = area.x_center(i, count);
                        let y = area.y_for(axis::normalize(value, domain));
                        let hover = format!(
                            "{} {}: {}",
                            point.period,
                            plot.key,
                            axis::format_tooltip(kind, value)
                        );
                        (x, y, hover)
                    })
                    .collect();
                LinePath {
                    key: plot.key.clone(),
                    color: plot.color.clone(),
                    d: path_data(&points),
                    points,
                }
            })
            .collect();

        Self {
            kind,
            domain,
            lines,
        }
    }
}

fn path_data(points: &[(f64, f64, String)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y, _))| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{} {:.1},{:.1}", cmd, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-series line chart rendered as inline SVG
#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<TimeSeries>,
    plots: Vec<PlotSpec>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let plots = StoredValue::new(plots);
    let model = Memo::new(move |_| plots.with_value(|p| LineChartModel::build(&data.get(), p)));
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
                {move || model.get().lines.into_iter().map(|line| {
                    let color = line.color.clone();
                    view! {
                        <g class="chart__series">
                            <path d=line.d fill="none" stroke=line.color stroke-width="2" />
                            {line.points.into_iter().map(|(x, y, hover)| view! {
                                <circle
                                    cx=format!("{:.1}", x)
                                    cy=format!("{:.1}", y)
                                    r="3"
                                    fill=color.clone()
                                    class="chart__dot"
                                >
                                    <title>{hover}</title>
                                </circle>
                            }).collect_view()}
                        </g>
                    }
                }).collect_view()}
            </svg>
        </ChartFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_executive::TimeSeriesPoint;

    fn otd_series() -> TimeSeries {
        TimeSeries::from_points(vec![
            TimeSeriesPoint::new("Q1").with("OTD", 92.0).with("Accuracy", 96.0),
            TimeSeriesPoint::new("Q2").with("OTD", 94.0).with("Accuracy", 98.0),
            TimeSeriesPoint::new("Q3").with("OTD", 93.0).with("Accuracy", 97.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_percentage_line_domain() {
        let plots = vec![
            PlotSpec::new("OTD", "#10B981"),
            PlotSpec::new("Accuracy", "#60A5FA"),
        ];
        let model = LineChartModel::build(&otd_series(), &plots);
        assert_eq!(model.kind, AxisKind::Percent);
        assert_eq!(model.domain, (87.0, 100.0));
        assert_eq!(model.lines.len(), 2);
        assert!(model.lines.iter().all(|l| l.points.len() == 3));
        assert!(model.lines[0].d.starts_with("M "));
        assert_eq!(model.lines[0].d.matches(" L ").count(), 2);
    }

    #[test]
    fn test_currency_line_points_inside_plot() {
        let series = TimeSeries::from_points(vec![
            TimeSeriesPoint::new("Jan").with("Revenue", 120_000.0),
            TimeSeriesPoint::new("Feb").with("Revenue", 480_000.0),
        ])
        .unwrap();
        let model = LineChartModel::build(&series, &[PlotSpec::new("Revenue", "#8884d8")]);
        assert_eq!(model.kind, AxisKind::Currency);
        assert_eq!(model.domain, (0.0, 500_000.0));
        let area = PlotArea::default();
        for (x, y, _) in &model.lines[0].points {
            assert!(*x >= area.left && *x <= area.right());
            assert!(*y >= area.top && *y <= area.bottom());
        }
        assert!(model.lines[0].points[0].2.contains("$120,000"));
    }

    #[test]
    fn test_empty_series() {
        let model = LineChartModel::build(&TimeSeries::new(), &[PlotSpec::new("Revenue", "#000")]);
        assert!(model.lines[0].points.is_empty());
        assert!(model.lines[0].d.is_empty());
    }
}
