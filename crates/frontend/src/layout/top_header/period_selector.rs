use crate::layout::global_context::use_dashboard;
use contracts::enums::Period;
use leptos::prelude::*;
use thaw::*;

/// "Time Period:" dropdown bound to the dashboard period
#[component]
pub fn PeriodSelector() -> impl IntoView {
    let ctx = use_dashboard();

    // Local select value for thaw Select component
    let select_value = RwSignal::new(ctx.selected_period.get_untracked().code().to_string());

    // Sync period -> select_value
    Effect::new(move |_| {
        select_value.set(ctx.selected_period.get().code().to_string());
    });

    // Sync select_value -> period
    Effect::new(move |prev: Option<String>| {
        let current = select_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            match Period::from_code(&current) {
                Some(period) if period != ctx.selected_period.get_untracked() => {
                    ctx.select_period(period)
                }
                Some(_) => {}
                None => log::warn!("Unknown period '{}' from selector", current),
            }
        }
        current
    });

    view! {
        <div class="period-selector">
            <label class="period-selector__label">"Time Period:"</label>
            <Select value=select_value size=SelectSize::Small>
                {Period::selectable()
                    .into_iter()
                    .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                    .collect_view()}
            </Select>
        </div>
    }
}
