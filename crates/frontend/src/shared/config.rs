use contracts::dashboards::d100_executive::find_subsidiary;
use contracts::enums::{DashboardView, Period};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub selection: SelectionConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    pub gauges: GaugeConfig,
}

/// Initial selection shown on first render
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SelectionConfig {
    pub subsidiary: String,
    pub period: String,
    pub view: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible numbers; entropy when absent
    pub seed: Option<u64>,
}

/// Upper bounds of the gauge domains; every gauge starts at 0
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct GaugeConfig {
    pub roic_max: f64,
    pub order_fulfillment_max: f64,
    pub dock_to_stock_max: f64,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[selection]
subsidiary = "rhcl"
period = "monthly"
view = "ceo"

[generator]

[gauges]
roic_max = 30.0
order_fulfillment_max = 72.0
dock_to_stock_max = 24.0
"#;

/// Parse a configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

impl Config {
    /// Configured subsidiary, or the first subsidiary if the id is unknown
    pub fn initial_subsidiary(&self) -> String {
        match find_subsidiary(&self.selection.subsidiary) {
            Some(s) => s.id.to_string(),
            None => {
                log::warn!(
                    "Unknown subsidiary '{}' in config, falling back to default",
                    self.selection.subsidiary
                );
                contracts::dashboards::d100_executive::default_subsidiary()
                    .id
                    .to_string()
            }
        }
    }

    pub fn initial_period(&self) -> Period {
        self.selection.period.parse().unwrap_or_else(|e| {
            log::warn!("{}, falling back to monthly", e);
            Period::default()
        })
    }

    pub fn initial_view(&self) -> DashboardView {
        self.selection.view.parse().unwrap_or_else(|e| {
            log::warn!("{}, falling back to CEO overview", e);
            DashboardView::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selection: SelectionConfig {
                subsidiary: "rhcl".to_string(),
                period: "monthly".to_string(),
                view: "ceo".to_string(),
            },
            generator: GeneratorConfig::default(),
            gauges: GaugeConfig {
                roic_max: 30.0,
                order_fulfillment_max: 72.0,
                dock_to_stock_max: 24.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_seed_and_selection_override() {
        let config = parse_config(
            r#"
            [selection]
            subsidiary = "gfs"
            period = "quarterly"
            view = "logistics"

            [generator]
            seed = 42

            [gauges]
            roic_max = 25.0
            order_fulfillment_max = 48.0
            dock_to_stock_max = 12.0
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.initial_subsidiary(), "gfs");
        assert_eq!(config.initial_period(), Period::Quarterly);
        assert_eq!(config.initial_view(), DashboardView::Logistics);
    }

    #[test]
    fn test_invalid_selection_falls_back() {
        let mut config = Config::default();
        config.selection.subsidiary = "acme".to_string();
        config.selection.period = "hourly".to_string();
        config.selection.view = "board".to_string();
        assert_eq!(config.initial_subsidiary(), "rhcl");
        assert_eq!(config.initial_period(), Period::Monthly);
        assert_eq!(config.initial_view(), DashboardView::Ceo);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[selection]\nsubsidiary = \"gfs\"").is_err());
    }
}
