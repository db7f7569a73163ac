use crate::dashboards::d100_executive::view_model::{alert_class, alert_icon, alert_time_text};
use crate::shared::charts::{GaugeChart, LineChart, PlotSpec};
use crate::shared::components::table::{format_percent, ColumnSpec, DataTable};
use crate::shared::components::{CardAnimated, KpiRow};
use crate::shared::icons::icon;
use contracts::dashboards::d100_executive::{
    AlertData, GaugeData, KpiData, SubsidiaryPerformanceData, TimeSeries,
};
use leptos::prelude::*;

const KPI_ICONS: &[&str] = &["dollar-sign", "activity", "bar-chart", "smile"];

#[component]
pub fn CeoView(
    #[prop(into)] kpis: Signal<Vec<KpiData>>,
    #[prop(into)] revenue_trend: Signal<TimeSeries>,
    #[prop(into)] roic_gauge: Signal<Vec<GaugeData>>,
    #[prop(into)] subsidiary_comparison: Signal<Vec<SubsidiaryPerformanceData>>,
    #[prop(into)] alerts: Signal<Vec<AlertData>>,
    roic_max: f64,
) -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("subsidiary_name", "Subsidiary"),
        ColumnSpec::new("revenue_growth", "Rev Growth (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.revenue_growth, 1)),
        ColumnSpec::new("profit_margin", "Margin (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.profit_margin, 1)),
        ColumnSpec::new("market_share", "Market Share (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.market_share, 1)),
        ColumnSpec::new("customer_satisfaction", "Satisfaction (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.customer_satisfaction, 0)),
    ];

    view! {
        <div class="view-stack">
            <KpiRow kpis=kpis icons=KPI_ICONS />

            <div class="grid-3">
                <CardAnimated class="panel--wide">
                    <LineChart
                        data=revenue_trend
                        plots=vec![
                            PlotSpec::new("Revenue", "#8884d8"),
                            PlotSpec::new("Margin", "#82ca9d"),
                        ]
                        title="Revenue & Margin Trend"
                    />
                </CardAnimated>
                <CardAnimated title="ROIC (%)" delay_ms=80>
                    {move || roic_gauge.get().into_iter().next().map(|gauge| view! {
                        <GaugeChart data=gauge max=roic_max />
                    })}
                </CardAnimated>
            </div>

            <div class="grid-3">
                <CardAnimated class="panel--wide">
                    <DataTable
                        title="Subsidiary Performance Snapshot"
                        rows=subsidiary_comparison
                        columns=columns
                        key_fn=|s: &SubsidiaryPerformanceData| s.subsidiary_id.clone()
                    />
                </CardAnimated>
                <CardAnimated title="Alerts & Notifications" delay_ms=80>
                    <div class="exec-alerts">
                        {move || {
                            let alerts = alerts.get();
                            if alerts.is_empty() {
                                view! { <p class="exec-alerts__empty">"No current alerts."</p> }.into_any()
                            } else {
                                alerts
                                    .into_iter()
                                    .map(|alert| view! {
                                        <div class=alert_class(alert.severity)>
                                            <div class="exec-alert__icon">{icon(alert_icon(alert.severity))}</div>
                                            <div>
                                                <p class="exec-alert__message">{alert.message}</p>
                                                <p class="exec-alert__time">{alert_time_text(&alert.timestamp)}</p>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </CardAnimated>
            </div>
        </div>
    }
}
