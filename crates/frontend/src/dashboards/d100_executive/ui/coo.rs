use crate::shared::charts::{BarChart, GaugeChart, LineChart, PlotSpec};
use crate::shared::components::table::{format_currency, format_percent, ColumnSpec, DataTable};
use crate::shared::components::{CardAnimated, KpiRow};
use crate::shared::config::GaugeConfig;
use contracts::dashboards::d100_executive::{
    GaugeData, KpiData, SubsidiaryPerformanceData, TimeSeries,
};
use leptos::prelude::*;

const KPI_ICONS: &[&str] = &["truck", "check-circle", "bar-chart", "activity"];

/// Subsidiaries shown in the "Key Operational Indicators" panel
const INDICATOR_PANEL_SIZE: usize = 3;

#[component]
pub fn CooView(
    #[prop(into)] operational_kpis: Signal<Vec<KpiData>>,
    #[prop(into)] cycle_time_gauges: Signal<Vec<GaugeData>>,
    #[prop(into)] operational_trend: Signal<TimeSeries>,
    #[prop(into)] cost_per_unit_data: Signal<TimeSeries>,
    #[prop(into)] operational_comparison: Signal<Vec<SubsidiaryPerformanceData>>,
    gauges: GaugeConfig,
) -> impl IntoView {
    let gauge_panel = move |index: usize, max: f64| {
        move || {
            cycle_time_gauges.get().into_iter().nth(index).map(|gauge| {
                let title = format!("{} (hrs)", gauge.name);
                view! { <GaugeChart data=gauge max=max title=title /> }
            })
        }
    };

    let columns = vec![
        ColumnSpec::new("subsidiary_name", "Subsidiary"),
        ColumnSpec::new("on_time_delivery", "OTD (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.on_time_delivery, 1)),
        ColumnSpec::new("order_accuracy", "Accuracy (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.order_accuracy, 1)),
        ColumnSpec::new("warehouse_utilization", "Utilization (%)")
            .format(|s: &SubsidiaryPerformanceData| format_percent(s.warehouse_utilization, 1)),
        ColumnSpec::new("cost_per_unit", "Cost/Unit")
            .format(|s: &SubsidiaryPerformanceData| format_currency(s.cost_per_unit, 2)),
    ];

    view! {
        <div class="view-stack">
            <KpiRow kpis=operational_kpis icons=KPI_ICONS />

            <div class="grid-3">
                <CardAnimated>{gauge_panel(0, gauges.order_fulfillment_max)}</CardAnimated>
                <CardAnimated delay_ms=80>{gauge_panel(1, gauges.dock_to_stock_max)}</CardAnimated>
                <CardAnimated delay_ms=160>
                    <LineChart
                        data=operational_trend
                        plots=vec![
                            PlotSpec::new("OTD", "#10B981"),
                            PlotSpec::new("Accuracy", "#60A5FA"),
                        ]
                        title="Operational Performance Trend"
                    />
                </CardAnimated>
            </div>

            <div class="grid-3">
                <CardAnimated>
                    <BarChart
                        data=cost_per_unit_data
                        plots=vec![PlotSpec::new("CostPerUnit", "#F87171")]
                        title="Cost Per Unit Trend"
                    />
                </CardAnimated>
                <CardAnimated class="panel--wide" delay_ms=80>
                    <DataTable
                        title="Subsidiary Operational Metrics"
                        rows=operational_comparison
                        columns=columns
                        key_fn=|s: &SubsidiaryPerformanceData| s.subsidiary_id.clone()
                    />
                </CardAnimated>
            </div>

            <CardAnimated title="Key Operational Indicators">
                <div class="grid-3">
                    {move || {
                        operational_comparison
                            .get()
                            .into_iter()
                            .take(INDICATOR_PANEL_SIZE)
                            .map(|s| view! {
                                <div class="tile">
                                    <h5 class="tile__title">{s.subsidiary_name}</h5>
                                    <div class="tile__row">
                                        <span>"Perfect Order Rate:"</span>
                                        <span>{format_percent(s.perfect_order_rate, 1)}</span>
                                    </div>
                                    <div class="tile__row">
                                        <span>"Inv. Accuracy:"</span>
                                        <span>{format_percent(s.inventory_accuracy, 1)}</span>
                                    </div>
                                    <div class="tile__row">
                                        <span>"Return Rate:"</span>
                                        <span>{format_percent(s.return_processing_rate, 1)}</span>
                                    </div>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
            </CardAnimated>
        </div>
    }
}
