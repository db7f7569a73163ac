//! PageFrame: root wrapper for every dashboard view.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                 `"{dashboard}--{view}"`, e.g. `"d100_executive--ceo"`
//!   - `data-page-category` always `"dashboard"` here

use leptos::prelude::*;

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub fn page_id(dashboard: &str, view: &str) -> String {
    format!("{dashboard}--{view}")
}

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    /// Additional CSS classes appended after the base class
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=PAGE_CAT_DASHBOARD>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("d100_executive", "coo"), "d100_executive--coo");
    }
}
