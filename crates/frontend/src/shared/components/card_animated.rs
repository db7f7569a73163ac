//! CardAnimated: thaw `Card` with the `card-appear` entrance animation.
//!
//! ```text
//! <CardAnimated title="Working Capital Metrics" delay_ms=80 class="panel--wide">
//!     ...
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Dashboard panel.
///
/// `delay_ms` staggers cards in one row; `class` adds grid placement
/// modifiers such as `panel--wide` (two of three columns).
#[component]
pub fn CardAnimated(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let full_class = if class.is_empty() {
        "panel".to_string()
    } else {
        format!("panel {class}")
    };

    view! {
        <Card class=full_class attr:style=style>
            {title.map(|t| view! { <h4 class="panel__title">{t}</h4> })}
            {children()}
        </Card>
    }
}
