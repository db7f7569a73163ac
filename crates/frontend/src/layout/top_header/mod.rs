//! TopHeader: current view title, selected subsidiary and the period selector.

pub mod period_selector;

use crate::layout::global_context::use_dashboard;
use crate::shared::icons::icon;
use leptos::prelude::*;
pub use period_selector::PeriodSelector;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_dashboard();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide subsidiaries" } else { "Show subsidiaries" }
                >
                    {icon("building")}
                </button>
                <div>
                    <h2 class="top-header__title">{move || ctx.current_view.get().label()}</h2>
                    {move || ctx.subsidiary().map(|s| view! {
                        <p class="top-header__subtitle">
                            "Displaying data for: "
                            <span class="top-header__subsidiary">{s.name}</span>
                        </p>
                    })}
                </div>
            </div>

            <div class="top-header__actions">
                <PeriodSelector />
            </div>
        </div>
    }
}
