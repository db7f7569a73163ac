pub mod tab;

use leptos::prelude::*;
pub use tab::{ViewTab, ViewTabs};

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <ViewTabs />
            <div class="view-container">
                {children()}
            </div>
        </div>
    }
}
