use super::{CeoView, CfoView, ClientsView, CooView, LogisticsView, SubsidiariesView};
use crate::layout::global_context::use_dashboard;
use crate::shared::page_frame::{page_id, PageFrame};
use contracts::dashboards::d100_executive::DashboardBundle;
use contracts::enums::DashboardView;
use leptos::prelude::*;

const DASHBOARD_ID: &str = "d100_executive";

/// Reactive view of one bundle field
fn slice<T>(
    bundle: Memo<DashboardBundle>,
    select: impl Fn(&DashboardBundle) -> T + Send + Sync + 'static,
) -> Signal<T>
where
    T: Send + Sync + 'static,
{
    Signal::derive(move || bundle.with(|b| select(b)))
}

/// Active view of the executive dashboard.
///
/// Every view reads slices of the shared bundle, so switching tabs never
/// regenerates data.
#[component]
pub fn ExecutiveDashboard() -> impl IntoView {
    let ctx = use_dashboard();
    let bundle = ctx.bundle;
    let gauges = ctx.gauges;

    move || {
        let view = ctx.current_view.get();
        let content = match view {
            DashboardView::Ceo => view! {
                <CeoView
                    kpis=slice(bundle, |b| b.kpis.clone())
                    revenue_trend=slice(bundle, |b| b.revenue_trend.clone())
                    roic_gauge=slice(bundle, |b| b.roic_gauge.clone())
                    subsidiary_comparison=slice(bundle, |b| b.subsidiary_comparison.clone())
                    alerts=slice(bundle, |b| b.alerts.clone())
                    roic_max=gauges.roic_max
                />
            }
            .into_any(),
            DashboardView::Cfo => view! {
                <CfoView
                    financial_kpis=slice(bundle, |b| b.financial_kpis.clone())
                    revenue_expense_data=slice(bundle, |b| b.revenue_expense_data.clone())
                    margin_trend=slice(bundle, |b| b.margin_trend.clone())
                    working_capital_metrics=slice(bundle, |b| b.working_capital_metrics.clone())
                    profitability_by_subsidiary=slice(bundle, |b| b.profitability_by_subsidiary.clone())
                />
            }
            .into_any(),
            DashboardView::Coo => view! {
                <CooView
                    operational_kpis=slice(bundle, |b| b.operational_kpis.clone())
                    cycle_time_gauges=slice(bundle, |b| b.cycle_time_gauges.clone())
                    operational_trend=slice(bundle, |b| b.operational_trend.clone())
                    cost_per_unit_data=slice(bundle, |b| b.cost_per_unit_data.clone())
                    operational_comparison=slice(bundle, |b| b.operational_comparison.clone())
                    gauges=gauges
                />
            }
            .into_any(),
            DashboardView::Subsidiaries => view! {
                <SubsidiariesView
                    subsidiary_matrix=slice(bundle, |b| b.subsidiary_matrix.clone())
                    financial_comparison_charts=slice(bundle, |b| b.financial_comparison_charts.clone())
                    operational_comparison_radar=slice(bundle, |b| b.operational_comparison_radar.clone())
                />
            }
            .into_any(),
            DashboardView::Clients => view! {
                <ClientsView
                    client_kpis=slice(bundle, |b| b.client_kpis.clone())
                    satisfaction_by_subsidiary=slice(bundle, |b| b.satisfaction_by_subsidiary.clone())
                    top_clients=slice(bundle, |b| b.top_clients.clone())
                    recent_feedback=slice(bundle, |b| b.recent_feedback.clone())
                />
            }
            .into_any(),
            DashboardView::Logistics => view! {
                <LogisticsView
                    logistics_kpis=slice(bundle, |b| b.logistics_kpis.clone())
                    warehouse_utilization_data=slice(bundle, |b| b.warehouse_utilization_data.clone())
                    logistics_cost_trend=slice(bundle, |b| b.logistics_cost_trend.clone())
                    carrier_performance=slice(bundle, |b| b.carrier_performance.clone())
                />
            }
            .into_any(),
        };

        view! {
            <PageFrame page_id=page_id(DASHBOARD_ID, view.code())>
                {content}
            </PageFrame>
        }
    }
}
