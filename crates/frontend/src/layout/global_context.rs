use crate::dashboards::d100_executive::mock_data::{
    generate_dashboard_data, get_dashboard_data, DashboardSelection,
};
use crate::dashboards::d100_executive::state::BundleCache;
use crate::shared::config::{Config, GaugeConfig};
use crate::shared::random::MetricRandom;
use chrono::Utc;
use contracts::dashboards::d100_executive::{find_subsidiary, DashboardBundle, Subsidiary};
use contracts::enums::{DashboardView, Period};
use leptos::prelude::*;
use rand::rngs::StdRng;

/// Selection state shared by the sidebar, header, tabs and views.
///
/// `bundle` is regenerated only when the (subsidiary, period) pair changes;
/// switching views reuses it.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub selected_subsidiary: RwSignal<String>,
    pub selected_period: RwSignal<Period>,
    pub current_view: RwSignal<DashboardView>,
    pub left_open: RwSignal<bool>,
    pub gauges: GaugeConfig,
    pub bundle: Memo<DashboardBundle>,
}

impl DashboardContext {
    pub fn new(config: &Config) -> Self {
        let selected_subsidiary = RwSignal::new(config.initial_subsidiary());
        let selected_period = RwSignal::new(config.initial_period());
        let current_view = RwSignal::new(config.initial_view());

        let generator: StoredValue<MetricRandom<StdRng>> =
            StoredValue::new(match config.generator.seed {
                Some(seed) => {
                    log::info!("Dashboard generator seeded with {}", seed);
                    MetricRandom::seeded(seed)
                }
                None => MetricRandom::from_entropy(),
            });
        let cache = StoredValue::new(BundleCache::new());

        let bundle = Memo::new(move |_| {
            let selection =
                DashboardSelection::new(selected_subsidiary.get(), selected_period.get());
            cache
                .try_update_value(|cache| {
                    cache
                        .get_or_generate(&selection, |sel| {
                            log::info!(
                                "Generating dashboard data for: {}, period: {}",
                                sel.subsidiary_id,
                                sel.period
                            );
                            generator
                                .try_update_value(|rng| {
                                    generate_dashboard_data(
                                        rng,
                                        Utc::now(),
                                        &sel.subsidiary_id,
                                        sel.period,
                                    )
                                })
                                .unwrap_or_else(|| {
                                    get_dashboard_data(&sel.subsidiary_id, sel.period)
                                })
                        })
                        .clone()
                })
                .unwrap_or_else(|| {
                    get_dashboard_data(&selection.subsidiary_id, selection.period)
                })
        });

        Self {
            selected_subsidiary,
            selected_period,
            current_view,
            left_open: RwSignal::new(true),
            gauges: config.gauges,
            bundle,
        }
    }

    pub fn select_subsidiary(&self, id: &str) {
        if find_subsidiary(id).is_none() {
            log::warn!("Ignoring unknown subsidiary '{}'", id);
            return;
        }
        log::info!("Subsidiary selected: {}", id);
        self.selected_subsidiary.set(id.to_string());
    }

    pub fn select_period(&self, period: Period) {
        log::info!("Period selected: {}", period);
        self.selected_period.set(period);
    }

    pub fn select_view(&self, view: DashboardView) {
        log::debug!("View selected: {}", view.code());
        self.current_view.set(view);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// The selected subsidiary, if the id resolves
    pub fn subsidiary(&self) -> Option<&'static Subsidiary> {
        self.selected_subsidiary.with(|id| find_subsidiary(id))
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext not found")
}
