use crate::shared::charts::{BarChart, LineChart, PlotSpec};
use crate::shared::components::table::{format_currency_k, format_percent, ColumnSpec, DataTable};
use crate::shared::components::{CardAnimated, KpiRow};
use contracts::dashboards::d100_executive::{KpiData, SubsidiaryPerformanceData, TimeSeries};
use leptos::prelude::*;

const KPI_ICONS: &[&str] = &["dollar-sign", "trending-up", "bar-chart", "calendar-clock"];

#[component]
pub fn CfoView(
    #[prop(into)] financial_kpis: Signal<Vec<KpiData>>,
    #[prop(into)] revenue_expense_data: Signal<TimeSeries>,
    #[prop(into)] margin_trend: Signal<TimeSeries>,
    #[prop(into)] working_capital_metrics: Signal<Vec<KpiData>>,
    #[prop(into)] profitability_by_subsidiary: Signal<Vec<SubsidiaryPerformanceData>>,
) -> impl IntoView {
    let columns = vec![
        ColumnSpec::new("subsidiary_name", "Subsidiary"),
        ColumnSpec::new("gross_profit", "Gross Profit")
            .format(|s: &SubsidiaryPerformanceData| format_currency_k(s.gross_profit)),
        ColumnSpec::new("profit_margin", "Margin (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.profit_margin, 1)),
        ColumnSpec::new("operating_ratio", "Op. Ratio (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.operating_ratio, 1)),
        ColumnSpec::new("roic", "ROIC (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.roic, 1)),
    ];

    view! {
        <div class="view-stack">
            <KpiRow kpis=financial_kpis icons=KPI_ICONS />

            <div class="grid-2">
                <CardAnimated>
                    <BarChart
                        data=revenue_expense_data
                        plots=vec![
                            PlotSpec::new("Revenue", "#8884d8"),
                            PlotSpec::new("Expenses", "#F87171"),
                        ]
                        title="Revenue vs Expenses"
                    />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <LineChart
                        data=margin_trend
                        plots=vec![
                            PlotSpec::new("Gross Margin", "#10B981"),
                            PlotSpec::new("Net Margin", "#60A5FA"),
                        ]
                        title="Margin Trends"
                    />
                </CardAnimated>
            </div>

            <div class="grid-3">
                <CardAnimated title="Working Capital Metrics">
                    <div class="metric-list">
                        {move || working_capital_metrics.get().into_iter().map(|metric| view! {
                            <div class="metric-list__row">
                                <span class="metric-list__label">{metric.title}</span>
                                <span class="metric-list__value">{metric.value.to_string()}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </CardAnimated>
                <CardAnimated class="panel--wide" delay_ms=80>
                    <DataTable
                        title="Subsidiary Profitability Analysis"
                        rows=profitability_by_subsidiary
                        columns=columns
                        key_fn=|s: &SubsidiaryPerformanceData| s.subsidiary_id.clone()
                    />
                </CardAnimated>
            </div>
        </div>
    }
}
