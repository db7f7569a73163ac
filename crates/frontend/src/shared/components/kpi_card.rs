use crate::dashboards::d100_executive::view_model::{kpi_display, KpiDisplay};
use crate::shared::icons::icon;
use contracts::dashboards::d100_executive::KpiData;
use leptos::prelude::*;

/// Headline metric card: title, value and the signed change against the last period
#[component]
pub fn KpiCard(
    kpi: KpiData,
    /// Icon name from the icon() helper
    icon_name: Option<&'static str>,
    /// Appearance delay for staggered rows
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let KpiDisplay {
        title,
        value,
        change,
        note,
    } = kpi_display(&kpi);

    // Keeps cards in a row the same height when only some have a change line
    let needs_spacer =
        change.is_none() && note.is_none() && matches!(kpi.unit.as_deref(), Some("%" | "Days"));

    let change_view = change.map(|c| {
        let (arrow, cls) = if c.positive {
            ("arrow-up-right", "kpi-card__change kpi-card__change--up")
        } else {
            ("arrow-down-right", "kpi-card__change kpi-card__change--down")
        };
        view! {
            <div class=cls>
                {icon(arrow)}
                <span>{c.text}</span>
            </div>
        }
    });

    view! {
        <div
            class="kpi-card"
            style=format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
        >
            <div class="kpi-card__header">
                <h3 class="kpi-card__label">{title}</h3>
                {icon_name.map(|name| view! { <span class="kpi-card__icon">{icon(name)}</span> })}
            </div>
            <p class="kpi-card__value">{value}</p>
            {change_view}
            {note.map(|n| view! { <p class="kpi-card__note">{n}</p> })}
            {needs_spacer.then(|| view! { <div class="kpi-card__spacer"></div> })}
        </div>
    }
}

/// One row of KPI cards with icons assigned in order, cycling when there are more KPIs than icons
#[component]
pub fn KpiRow(
    #[prop(into)] kpis: Signal<Vec<KpiData>>,
    icons: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {move || {
                kpis.get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, kpi)| {
                        let icon_name = (!icons.is_empty()).then(|| icons[i % icons.len()]);
                        let delay_ms = i as u32 * 60;
                        view! { <KpiCard kpi=kpi icon_name=icon_name delay_ms=delay_ms /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
