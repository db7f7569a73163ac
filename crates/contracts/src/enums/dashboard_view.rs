use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role-specific view tab of the executive dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    #[default]
    Ceo,
    Cfo,
    Coo,
    Subsidiaries,
    Clients,
    Logistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dashboard view '{0}'")]
pub struct ParseViewError(pub String);

impl DashboardView {
    pub fn code(&self) -> &'static str {
        match self {
            DashboardView::Ceo => "ceo",
            DashboardView::Cfo => "cfo",
            DashboardView::Coo => "coo",
            DashboardView::Subsidiaries => "subsidiaries",
            DashboardView::Clients => "clients",
            DashboardView::Logistics => "logistics",
        }
    }

    /// Tab label, also used as the page title
    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Ceo => "CEO Overview",
            DashboardView::Cfo => "Financials",
            DashboardView::Coo => "Operations",
            DashboardView::Subsidiaries => "Subsidiaries",
            DashboardView::Clients => "Clients",
            DashboardView::Logistics => "Logistics",
        }
    }

    /// Icon token resolved by the frontend icon set
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardView::Ceo => "home",
            DashboardView::Cfo => "dollar-sign",
            DashboardView::Coo => "settings",
            DashboardView::Subsidiaries => "building",
            DashboardView::Clients => "users",
            DashboardView::Logistics => "truck",
        }
    }

    pub fn all() -> Vec<DashboardView> {
        vec![
            DashboardView::Ceo,
            DashboardView::Cfo,
            DashboardView::Coo,
            DashboardView::Subsidiaries,
            DashboardView::Clients,
            DashboardView::Logistics,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        DashboardView::all().into_iter().find(|v| v.code() == code)
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DashboardView {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardView::from_code(s.trim()).ok_or_else(|| ParseViewError(s.to_string()))
    }
}
