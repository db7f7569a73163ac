use crate::dashboards::d100_executive::view_model::{
    star_rating, subsidiary_code, top_clients_by_revenue,
};
use crate::shared::charts::{BarChart, PlotSpec};
use crate::shared::components::table::{format_currency_k, ColumnSpec, DataTable};
use crate::shared::components::{CardAnimated, KpiRow};
use crate::shared::icons::icon;
use contracts::dashboards::d100_executive::{ClientData, KpiData, TimeSeries};
use leptos::prelude::*;

const KPI_ICONS: &[&str] = &["star", "arrow-up-circle", "users", "smile"];
const TOP_CLIENTS: usize = 5;

fn client_columns(with_subsidiary: bool) -> Vec<ColumnSpec<ClientData>> {
    let mut columns = vec![
        ColumnSpec::new("name", "Client Name"),
        ColumnSpec::new("revenue", "Revenue")
            .format(|c: &ClientData| format_currency_k(c.revenue)),
        ColumnSpec::new("satisfaction_score", "CSAT")
            .format(|c: &ClientData| format!("{:.1}/5", c.satisfaction_score)),
        ColumnSpec::new("nps", "NPS").format(|c: &ClientData| format!("{:.0}", c.nps)),
    ];
    if with_subsidiary {
        columns.push(
            ColumnSpec::new("subsidiary_id", "Subsidiary")
                .format(|c: &ClientData| subsidiary_code(&c.subsidiary_id)),
        );
    }
    columns
}

#[component]
fn FeedbackItem(client: ClientData) -> impl IntoView {
    let stars = star_rating(client.satisfaction_score)
        .into_iter()
        .map(|filled| {
            view! {
                <span class="stars__star" class:stars__star--filled=filled>
                    {icon("star")}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="feedback">
            <div class="feedback__header">
                <h5 class="feedback__name">{client.name}</h5>
                <div class="stars">{stars}</div>
            </div>
            {client
                .last_feedback
                .map(|text| view! { <p class="feedback__text">{format!("\"{}\"", text)}</p> })}
            <div class="feedback__footer">
                <span>{format!("NPS: {:.0}", client.nps)}</span>
                <span>{format!("Revenue: {}", format_currency_k(client.revenue))}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ClientsView(
    #[prop(into)] client_kpis: Signal<Vec<KpiData>>,
    #[prop(into)] satisfaction_by_subsidiary: Signal<TimeSeries>,
    #[prop(into)] top_clients: Signal<Vec<ClientData>>,
    #[prop(into)] recent_feedback: Signal<Vec<ClientData>>,
) -> impl IntoView {
    let ranked = Signal::derive(move || top_clients.with(|c| top_clients_by_revenue(c, TOP_CLIENTS)));

    view! {
        <div class="view-stack">
            <KpiRow kpis=client_kpis icons=KPI_ICONS />

            <div class="grid-2">
                <CardAnimated>
                    <BarChart
                        data=satisfaction_by_subsidiary
                        plots=vec![PlotSpec::new("Satisfaction", "#10B981")]
                        title="Client Satisfaction by Subsidiary"
                        is_percentage=false
                    />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <DataTable
                        title="Top Clients by Revenue"
                        rows=ranked
                        columns=client_columns(false)
                        key_fn=|c: &ClientData| c.id.clone()
                    />
                </CardAnimated>
            </div>

            <CardAnimated title="Recent Client Feedback">
                <div class="feedback-list">
                    {move || {
                        let items = recent_feedback.get();
                        if items.is_empty() {
                            view! { <p class="panel__empty">"No recent feedback."</p> }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|client| view! { <FeedbackItem client=client /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </CardAnimated>

            <CardAnimated>
                <DataTable
                    title="All Clients"
                    rows=top_clients
                    columns=client_columns(true)
                    key_fn=|c: &ClientData| c.id.clone()
                />
            </CardAnimated>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::TableModel;

    fn client(id: &str, revenue: f64) -> ClientData {
        ClientData {
            id: id.to_string(),
            name: format!("Client {}", id),
            revenue,
            satisfaction_score: 4.3,
            nps: 61.0,
            last_feedback: None,
            subsidiary_id: "rhcl".to_string(),
        }
    }

    #[test]
    fn test_all_clients_table_shows_subsidiary_code() {
        let model = TableModel::build(&[client("c1", 125_000.0)], &client_columns(true), |c| {
            c.id.clone()
        });
        assert_eq!(
            model.headers,
            vec!["Client Name", "Revenue", "CSAT", "NPS", "Subsidiary"]
        );
        let cells: Vec<&str> = model.rows[0].cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(cells, vec!["Client c1", "$125.0k", "4.3/5", "61", "RHCL"]);
    }

    #[test]
    fn test_top_clients_table_has_no_subsidiary_column() {
        assert_eq!(client_columns(false).len(), 4);
    }
}
