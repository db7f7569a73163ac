use crate::layout::global_context::use_dashboard;
use crate::shared::icons::icon;
use contracts::enums::DashboardView;
use leptos::prelude::*;

#[component]
pub fn ViewTab(view: DashboardView) -> impl IntoView {
    let ctx = use_dashboard();

    let is_active = Memo::new(move |_| ctx.current_view.get() == view);
    let on_click = move |_| ctx.select_view(view);

    view! {
        <button class="tab" class:active=is_active on:click=on_click>
            {icon(view.icon())}
            <span>{view.label()}</span>
        </button>
    }
}

/// One tab per dashboard view, in display order
#[component]
pub fn ViewTabs() -> impl IntoView {
    view! {
        <nav class="tabs" aria-label="Tabs">
            {DashboardView::all()
                .into_iter()
                .map(|view| view! { <ViewTab view=view /> })
                .collect_view()}
        </nav>
    }
}
