//! Sidebar: brand block and one entry per subsidiary

use crate::layout::global_context::use_dashboard;
use crate::shared::icons::icon;
use contracts::dashboards::d100_executive::SUBSIDIARIES;
use leptos::prelude::*;

pub const BRAND_TITLE: &str = "Logistics HQ";
pub const BRAND_SUBTITLE: &str = "Executive Dashboard";

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <h1 class="app-sidebar__brand-title">{BRAND_TITLE}</h1>
                <p class="app-sidebar__brand-subtitle">{BRAND_SUBTITLE}</p>
            </div>

            <h2 class="app-sidebar__heading">"Subsidiaries"</h2>
            {SUBSIDIARIES
                .iter()
                .map(|sub| {
                    let id = sub.id;
                    view! {
                        <button
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.selected_subsidiary.with(|selected| selected == id)
                            }
                            on:click=move |_| ctx.select_subsidiary(id)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(sub.icon)}
                                <span>{sub.name}</span>
                            </div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
