use crate::dashboards::ExecutiveDashboard;
use crate::layout::global_context::DashboardContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::config::{load_config, Config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // Selection state and the generated data bundle, shared by every view
    provide_context(DashboardContext::new(&config));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ExecutiveDashboard /> }.into_any()
        />
    }
}
