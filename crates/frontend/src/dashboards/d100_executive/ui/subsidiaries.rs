use crate::dashboards::d100_executive::view_model::rank_by_revenue_growth;
use crate::shared::charts::{BarChart, PlotSpec, RadarChart};
use crate::shared::components::table::{format_percent, ColumnSpec, DataTable};
use crate::shared::components::CardAnimated;
use contracts::dashboards::d100_executive::{
    FinancialComparisonCharts, RadarData, SubsidiaryPerformanceData,
};
use leptos::prelude::*;

#[component]
pub fn SubsidiariesView(
    #[prop(into)] subsidiary_matrix: Signal<Vec<SubsidiaryPerformanceData>>,
    #[prop(into)] financial_comparison_charts: Signal<FinancialComparisonCharts>,
    #[prop(into)] operational_comparison_radar: Signal<Vec<RadarData>>,
) -> impl IntoView {
    let revenue = Signal::derive(move || financial_comparison_charts.with(|c| c.revenue.clone()));
    let profit = Signal::derive(move || financial_comparison_charts.with(|c| c.profit.clone()));

    let columns = vec![
        ColumnSpec::new("subsidiary_name", "Subsidiary"),
        ColumnSpec::new("revenue_growth", "Rev Growth")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.revenue_growth, 1)),
        ColumnSpec::new("profit_margin", "Margin")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.profit_margin, 1)),
        ColumnSpec::new("market_share", "Market Share")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.market_share, 1)),
        ColumnSpec::new("on_time_delivery", "OTD")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.on_time_delivery, 1)),
        ColumnSpec::new("customer_satisfaction", "CSAT")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.customer_satisfaction, 0)),
    ];

    view! {
        <div class="view-stack">
            <div class="grid-2">
                <CardAnimated>
                    <BarChart
                        data=revenue
                        plots=vec![PlotSpec::new("Revenue", "#8884d8")]
                        title="Revenue Comparison by Subsidiary"
                    />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <BarChart
                        data=profit
                        plots=vec![PlotSpec::new("Margin", "#82ca9d")]
                        title="Profit Margin Comparison"
                        is_percentage=true
                    />
                </CardAnimated>
            </div>

            <div class="grid-3">
                <CardAnimated>
                    <RadarChart
                        data=operational_comparison_radar
                        title="Operational Performance Radar"
                        color="#6366F1"
                    />
                </CardAnimated>
                <CardAnimated title="Subsidiary Rankings" class="panel--wide" delay_ms=80>
                    <div class="ranking">
                        {move || subsidiary_matrix.with(|matrix| {
                            rank_by_revenue_growth(matrix)
                                .into_iter()
                                .map(|(rank, s)| view! {
                                    <div class="ranking__item">
                                        <div class="ranking__badge">{rank}</div>
                                        <div class="ranking__body">
                                            <h5 class="ranking__name">{s.subsidiary_name.clone()}</h5>
                                            <div class="ranking__metrics">
                                                <div>
                                                    <p class="ranking__label">"Revenue Growth"</p>
                                                    <p class="ranking__value">{format_percent(s.revenue_growth, 1)}</p>
                                                </div>
                                                <div>
                                                    <p class="ranking__label">"Profit Margin"</p>
                                                    <p class="ranking__value">{format_percent(s.profit_margin, 1)}</p>
                                                </div>
                                                <div>
                                                    <p class="ranking__label">"ROIC"</p>
                                                    <p class="ranking__value">{format_percent(s.roic, 1)}</p>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                })
                                .collect_view()
                        })}
                    </div>
                </CardAnimated>
            </div>

            <CardAnimated>
                <DataTable
                    title="Comprehensive Subsidiary Comparison"
                    rows=subsidiary_matrix
                    columns=columns
                    key_fn=|s: &SubsidiaryPerformanceData| s.subsidiary_id.clone()
                />
            </CardAnimated>
        </div>
    }
}
