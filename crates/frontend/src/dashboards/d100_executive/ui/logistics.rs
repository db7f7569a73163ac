use crate::dashboards::d100_executive::view_model::carriers_by_on_time;
use crate::shared::charts::{BarChart, LineChart, PlotSpec};
use crate::shared::components::table::{format_currency, format_percent, ColumnSpec, DataTable};
use crate::shared::components::{CardAnimated, KpiRow};
use crate::shared::icons::icon;
use contracts::dashboards::d100_executive::{CarrierData, KpiData, TimeSeries};
use leptos::prelude::*;

const KPI_ICONS: &[&str] = &["warehouse", "rotate-ccw", "dollar-sign", "truck"];

struct Insight {
    icon: &'static str,
    tone: &'static str,
    title: &'static str,
    text: &'static str,
}

const INSIGHTS: &[Insight] = &[
    Insight {
        icon: "check-circle",
        tone: "good",
        title: "Top Performing Area",
        text: "Warehouse inventory accuracy is above target at 98.7%, reducing stock discrepancies.",
    },
    Insight {
        icon: "alert-triangle",
        tone: "warning",
        title: "Area for Improvement",
        text: "Return processing rate is below target. Consider allocating additional resources.",
    },
    Insight {
        icon: "dollar-sign",
        tone: "info",
        title: "Cost Saving Opportunity",
        text: "Consolidating shipments could reduce transport costs by an estimated 12%.",
    },
];

struct WarehouseRegion {
    region: &'static str,
    facilities: u32,
    utilization: f64,
    avg_delivery_days: f64,
}

const WAREHOUSE_REGIONS: &[WarehouseRegion] = &[
    WarehouseRegion {
        region: "North America",
        facilities: 8,
        utilization: 87.0,
        avg_delivery_days: 1.8,
    },
    WarehouseRegion {
        region: "Europe",
        facilities: 6,
        utilization: 81.0,
        avg_delivery_days: 2.1,
    },
    WarehouseRegion {
        region: "Asia Pacific",
        facilities: 5,
        utilization: 92.0,
        avg_delivery_days: 2.3,
    },
    WarehouseRegion {
        region: "Latin America",
        facilities: 3,
        utilization: 78.0,
        avg_delivery_days: 2.7,
    },
];

fn carrier_columns() -> Vec<ColumnSpec<CarrierData>> {
    vec![
        ColumnSpec::new("name", "Carrier Name"),
        ColumnSpec::new("on_time_performance", "On-Time (%)")
            .format(|c: &CarrierData| format_percent(c.on_time_performance, 1))
            .class("cell--good"),
        ColumnSpec::new("cost_per_shipment", "Cost/Shipment")
            .format(|c: &CarrierData| format_currency(c.cost_per_shipment, 2)),
        ColumnSpec::new("damage_rate", "Damage Rate (%)")
            .format(|c: &CarrierData| format_percent(c.damage_rate, 1))
            .class("cell--bad"),
    ]
}

#[component]
pub fn LogisticsView(
    #[prop(into)] logistics_kpis: Signal<Vec<KpiData>>,
    #[prop(into)] warehouse_utilization_data: Signal<TimeSeries>,
    #[prop(into)] logistics_cost_trend: Signal<TimeSeries>,
    #[prop(into)] carrier_performance: Signal<Vec<CarrierData>>,
) -> impl IntoView {
    let carriers = Signal::derive(move || carrier_performance.with(|c| carriers_by_on_time(c)));

    view! {
        <div class="view-stack">
            <KpiRow kpis=logistics_kpis icons=KPI_ICONS />

            <div class="grid-2">
                <CardAnimated>
                    <LineChart
                        data=warehouse_utilization_data
                        plots=vec![PlotSpec::new("Utilization", "#6366F1")]
                        title="Warehouse Utilization Trend"
                    />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <BarChart
                        data=logistics_cost_trend
                        plots=vec![
                            PlotSpec::new("Transport Cost", "#F87171"),
                            PlotSpec::new("Warehouse Cost", "#60A5FA"),
                        ]
                        title="Logistics Cost Breakdown"
                    />
                </CardAnimated>
            </div>

            <div class="grid-3">
                <CardAnimated class="panel--wide">
                    <DataTable
                        title="Carrier Performance"
                        rows=carriers
                        columns=carrier_columns()
                        key_fn=|c: &CarrierData| c.id.clone()
                    />
                </CardAnimated>
                <CardAnimated title="Logistics Performance Insights" delay_ms=80>
                    <div class="insights">
                        {INSIGHTS
                            .iter()
                            .map(|insight| view! {
                                <div class=format!("insight insight--{}", insight.tone)>
                                    <div class="insight__icon">{icon(insight.icon)}</div>
                                    <div>
                                        <p class="insight__title">{insight.title}</p>
                                        <p class="insight__text">{insight.text}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </CardAnimated>
            </div>

            <CardAnimated title="Warehouse Distribution">
                <div class="grid-4">
                    {WAREHOUSE_REGIONS
                        .iter()
                        .map(|w| view! {
                            <div class="tile">
                                <h5 class="tile__title">{w.region}</h5>
                                <div class="tile__row">
                                    <span>"Facilities:"</span>
                                    <span>{w.facilities}</span>
                                </div>
                                <div class="tile__row">
                                    <span>"Utilization:"</span>
                                    <span>{format_percent(w.utilization, 0)}</span>
                                </div>
                                <div class="tile__row">
                                    <span>"Avg. Delivery:"</span>
                                    <span>{format!("{:.1} days", w.avg_delivery_days)}</span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </CardAnimated>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::TableModel;

    #[test]
    fn test_carrier_columns_mark_good_and_bad_cells() {
        let carrier = CarrierData {
            id: "c1".to_string(),
            name: "FastFreight".to_string(),
            on_time_performance: 94.5,
            cost_per_shipment: 12.5,
            damage_rate: 0.8,
        };
        let model = TableModel::build(&[carrier], &carrier_columns(), |c| c.id.clone());
        let cells = &model.rows[0].cells;
        assert_eq!(cells[1].text, "94.5%");
        assert_eq!(cells[1].class, Some("cell--good"));
        assert_eq!(cells[2].text, "$12.50");
        assert_eq!(cells[3].class, Some("cell--bad"));
    }

    #[test]
    fn test_insight_panel_entries() {
        let titles: Vec<&str> = INSIGHTS.iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            vec!["Top Performing Area", "Area for Improvement", "Cost Saving Opportunity"]
        );
        assert!(INSIGHTS[0].text.contains("98.7%"));
        assert!(INSIGHTS[2].text.contains("12%"));
    }

    #[test]
    fn test_warehouse_regions() {
        let total: u32 = WAREHOUSE_REGIONS.iter().map(|w| w.facilities).sum();
        assert_eq!(total, 22);
    }
}
