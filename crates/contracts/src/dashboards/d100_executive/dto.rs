use super::series::TimeSeries;
use crate::enums::period::Period;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// KPI value as shown on a card: either preformatted text ("12.4%") or a raw number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KpiValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiValue::Text(s) => f.write_str(s),
            KpiValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for KpiValue {
    fn from(s: String) -> Self {
        KpiValue::Text(s)
    }
}

impl From<&str> for KpiValue {
    fn from(s: &str) -> Self {
        KpiValue::Text(s.to_string())
    }
}

impl From<f64> for KpiValue {
    fn from(n: f64) -> Self {
        KpiValue::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub title: String,
    pub value: KpiValue,
    /// Signed percentage change against the previous period
    pub change: Option<f64>,
    /// e.g. "%", "USD", "Days"
    pub unit: Option<String>,
    pub description: Option<String>,
}

impl KpiData {
    pub fn new(title: impl Into<String>, value: impl Into<KpiValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            unit: None,
            description: None,
        }
    }

    pub fn with_change(mut self, change: f64) -> Self {
        self.change = Some(change);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeData {
    pub name: String,
    pub value: f64,
    /// Fill colour token (CSS colour)
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarData {
    /// Axis label, e.g. "OTD"
    pub subject: String,
    pub value: f64,
    /// Axis ceiling, 100 for percentages
    pub full_mark: f64,
}

/// Wide per-subsidiary snapshot; one per subsidiary per query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidiaryPerformanceData {
    pub subsidiary_id: String,
    pub subsidiary_name: String,
    pub revenue_growth: f64,
    pub profit_margin: f64,
    pub market_share: f64,
    pub customer_satisfaction: f64,
    pub gross_profit: f64,
    pub ebitda: f64,
    pub operating_ratio: f64,
    pub cash_conversion_cycle: f64,
    pub on_time_delivery: f64,
    pub order_accuracy: f64,
    pub warehouse_utilization: f64,
    pub perfect_order_rate: f64,
    pub roic: f64,
    pub inventory_turnover: f64,
    pub ar_turnover: f64,
    pub ap_turnover: f64,
    pub satisfaction_score: f64,
    pub nps: f64,
    pub retention_rate: f64,
    pub new_acquisition: f64,
    pub inventory_accuracy: f64,
    pub transport_cost: f64,
    pub return_processing_rate: f64,
    pub cost_per_unit: f64,
}

impl SubsidiaryPerformanceData {
    /// Every numeric field paired with its snake_case name
    pub fn metrics(&self) -> [(&'static str, f64); 24] {
        [
            ("revenue_growth", self.revenue_growth),
            ("profit_margin", self.profit_margin),
            ("market_share", self.market_share),
            ("customer_satisfaction", self.customer_satisfaction),
            ("gross_profit", self.gross_profit),
            ("ebitda", self.ebitda),
            ("operating_ratio", self.operating_ratio),
            ("cash_conversion_cycle", self.cash_conversion_cycle),
            ("on_time_delivery", self.on_time_delivery),
            ("order_accuracy", self.order_accuracy),
            ("warehouse_utilization", self.warehouse_utilization),
            ("perfect_order_rate", self.perfect_order_rate),
            ("roic", self.roic),
            ("inventory_turnover", self.inventory_turnover),
            ("ar_turnover", self.ar_turnover),
            ("ap_turnover", self.ap_turnover),
            ("satisfaction_score", self.satisfaction_score),
            ("nps", self.nps),
            ("retention_rate", self.retention_rate),
            ("new_acquisition", self.new_acquisition),
            ("inventory_accuracy", self.inventory_accuracy),
            ("transport_cost", self.transport_cost),
            ("return_processing_rate", self.return_processing_rate),
            ("cost_per_unit", self.cost_per_unit),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientData {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    /// 0..=5
    pub satisfaction_score: f64,
    pub nps: f64,
    pub last_feedback: Option<String>,
    pub subsidiary_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierData {
    pub id: String,
    pub name: String,
    pub on_time_performance: f64,
    pub cost_per_shipment: f64,
    pub damage_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertData {
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Category charts comparing subsidiaries; labels are subsidiary names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialComparisonCharts {
    /// `Revenue` per subsidiary (gross profit)
    pub revenue: TimeSeries,
    /// `Margin` per subsidiary (profit margin)
    pub profit: TimeSeries,
}

/// Everything the six views render for one (subsidiary, period) selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBundle {
    /// Resolved subsidiary id; the first subsidiary when the request was unknown
    pub subsidiary_id: String,
    pub period: Period,
    pub period_labels: Vec<String>,

    // CEO
    pub kpis: Vec<KpiData>,
    pub revenue_trend: TimeSeries,
    pub roic_gauge: Vec<GaugeData>,
    pub subsidiary_comparison: Vec<SubsidiaryPerformanceData>,
    pub alerts: Vec<AlertData>,

    // CFO
    pub financial_kpis: Vec<KpiData>,
    pub revenue_expense_data: TimeSeries,
    pub margin_trend: TimeSeries,
    pub working_capital_metrics: Vec<KpiData>,
    pub profitability_by_subsidiary: Vec<SubsidiaryPerformanceData>,

    // COO
    pub operational_kpis: Vec<KpiData>,
    pub cycle_time_gauges: Vec<GaugeData>,
    pub operational_trend: TimeSeries,
    pub cost_per_unit_data: TimeSeries,
    pub operational_comparison: Vec<SubsidiaryPerformanceData>,

    // Subsidiaries
    pub subsidiary_matrix: Vec<SubsidiaryPerformanceData>,
    pub financial_comparison_charts: FinancialComparisonCharts,
    pub operational_comparison_radar: Vec<RadarData>,

    // Clients
    pub client_kpis: Vec<KpiData>,
    pub satisfaction_by_subsidiary: TimeSeries,
    pub top_clients: Vec<ClientData>,
    pub recent_feedback: Vec<ClientData>,

    // Logistics
    pub logistics_kpis: Vec<KpiData>,
    pub warehouse_utilization_data: TimeSeries,
    pub logistics_cost_trend: TimeSeries,
    pub carrier_performance: Vec<CarrierData>,
}

impl DashboardBundle {
    /// Series whose points are indexed by `period_labels`
    pub fn period_series(&self) -> [(&'static str, &TimeSeries); 7] {
        [
            ("revenue_trend", &self.revenue_trend),
            ("revenue_expense_data", &self.revenue_expense_data),
            ("margin_trend", &self.margin_trend),
            ("operational_trend", &self.operational_trend),
            ("cost_per_unit_data", &self.cost_per_unit_data),
            ("warehouse_utilization_data", &self.warehouse_utilization_data),
            ("logistics_cost_trend", &self.logistics_cost_trend),
        ]
    }
}
