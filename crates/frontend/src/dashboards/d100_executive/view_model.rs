//! Display rules shared by the six executive views.
//!
//! Everything here is pure so the formatting and ordering can be tested
//! without mounting components.

use chrono::{DateTime, Utc};
use contracts::dashboards::d100_executive::{
    AlertSeverity, CarrierData, ClientData, KpiData, SubsidiaryPerformanceData,
};

/// Units printed right after a KPI value; others (USD, Monthly Avg) are implied by the text
const INLINE_UNITS: [&str; 2] = ["%", "Days"];

const DEFAULT_CHANGE_CAPTION: &str = "vs last period";

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeDisplay {
    pub positive: bool,
    /// e.g. "2.5% vs last period"
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiDisplay {
    pub title: String,
    pub value: String,
    pub change: Option<ChangeDisplay>,
    /// Shown under the value only when there is no change line
    pub note: Option<String>,
}

pub fn kpi_display(kpi: &KpiData) -> KpiDisplay {
    let unit = kpi
        .unit
        .as_deref()
        .filter(|u| INLINE_UNITS.contains(u))
        .unwrap_or("");

    let change = kpi.change.map(|change| ChangeDisplay {
        positive: change >= 0.0,
        text: format!(
            "{}% {}",
            change.abs(),
            kpi.description.as_deref().unwrap_or(DEFAULT_CHANGE_CAPTION)
        ),
    });

    let note = match change {
        Some(_) => None,
        None => kpi.description.clone(),
    };

    KpiDisplay {
        title: kpi.title.clone(),
        value: format!("{}{}", kpi.value, unit),
        change,
        note,
    }
}

/// Subsidiaries ordered by revenue growth, best first
pub fn rank_by_revenue_growth(
    snapshots: &[SubsidiaryPerformanceData],
) -> Vec<(usize, &SubsidiaryPerformanceData)> {
    let mut sorted: Vec<&SubsidiaryPerformanceData> = snapshots.iter().collect();
    sorted.sort_by(|a, b| b.revenue_growth.total_cmp(&a.revenue_growth));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, s)| (i + 1, s))
        .collect()
}

/// Highest-revenue clients first, at most `limit`
pub fn top_clients_by_revenue(clients: &[ClientData], limit: usize) -> Vec<ClientData> {
    let mut sorted = clients.to_vec();
    sorted.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    sorted.truncate(limit);
    sorted
}

pub fn carriers_by_on_time(carriers: &[CarrierData]) -> Vec<CarrierData> {
    let mut sorted = carriers.to_vec();
    sorted.sort_by(|a, b| b.on_time_performance.total_cmp(&a.on_time_performance));
    sorted
}

/// Five stars, the first `floor(score)` filled
pub fn star_rating(score: f64) -> [bool; 5] {
    let filled = score.floor().clamp(0.0, 5.0) as usize;
    std::array::from_fn(|i| i < filled)
}

/// "rhcl" -> "RHCL"
pub fn subsidiary_code(id: &str) -> String {
    id.to_uppercase()
}

pub fn alert_icon(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Info => "info",
        AlertSeverity::Warning => "alert-triangle",
        AlertSeverity::Error => "x-circle",
    }
}

pub fn alert_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Info => "exec-alert exec-alert--info",
        AlertSeverity::Warning => "exec-alert exec-alert--warning",
        AlertSeverity::Error => "exec-alert exec-alert--error",
    }
}

/// "1:05:09 PM - 3/15/2024"
pub fn alert_time_text(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-I:%M:%S %p - %-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::dashboards::d100_executive::KpiValue;

    fn snapshot(id: &str, growth: f64) -> SubsidiaryPerformanceData {
        SubsidiaryPerformanceData {
            subsidiary_id: id.to_string(),
            subsidiary_name: id.to_uppercase(),
            revenue_growth: growth,
            profit_margin: 5.0,
            market_share: 10.0,
            customer_satisfaction: 80.0,
            gross_profit: 1_000_000.0,
            ebitda: 300_000.0,
            operating_ratio: 90.0,
            cash_conversion_cycle: 45.0,
            on_time_delivery: 95.0,
            order_accuracy: 97.0,
            warehouse_utilization: 80.0,
            perfect_order_rate: 90.0,
            roic: 12.0,
            inventory_turnover: 8.0,
            ar_turnover: 7.0,
            ap_turnover: 5.0,
            satisfaction_score: 4.5,
            nps: 50.0,
            retention_rate: 90.0,
            new_acquisition: 100.0,
            inventory_accuracy: 98.0,
            transport_cost: 80_000.0,
            return_processing_rate: 85.0,
            cost_per_unit: 9.99,
        }
    }

    fn client(id: &str, revenue: f64) -> ClientData {
        ClientData {
            id: id.to_string(),
            name: format!("Client {id}"),
            revenue,
            satisfaction_score: 4.2,
            nps: 40.0,
            last_feedback: None,
            subsidiary_id: "gfs".to_string(),
        }
    }

    #[test]
    fn test_kpi_with_change() {
        let kpi = KpiData::new("Revenue Growth", "7.5%").with_change(-2.5);
        let d = kpi_display(&kpi);
        assert_eq!(d.value, "7.5%");
        let change = d.change.unwrap();
        assert!(!change.positive);
        assert_eq!(change.text, "2.5% vs last period");
        assert_eq!(d.note, None);
    }

    #[test]
    fn test_kpi_zero_change_counts_as_positive() {
        let d = kpi_display(&KpiData::new("Market Share", "20%").with_change(0.0));
        assert!(d.change.unwrap().positive);
    }

    #[test]
    fn test_kpi_change_uses_description() {
        let kpi = KpiData::new("NPS", "45")
            .with_change(3.0)
            .with_description("vs Q2");
        assert_eq!(kpi_display(&kpi).change.unwrap().text, "3% vs Q2");
    }

    #[test]
    fn test_kpi_unit_rules() {
        let usd = KpiData::new("Gross Profit", "$1.20M").with_unit("USD");
        assert_eq!(kpi_display(&usd).value, "$1.20M");

        let pct = KpiData::new("Rate", KpiValue::Number(12.0)).with_unit("%");
        assert_eq!(kpi_display(&pct).value, "12%");

        let days = KpiData::new("Cycle", KpiValue::Number(40.0)).with_unit("Days");
        assert_eq!(kpi_display(&days).value, "40Days");

        let plain = KpiData::new("New Clients (YTD)", 120.0);
        assert_eq!(kpi_display(&plain).value, "120");
    }

    #[test]
    fn test_kpi_note_without_change() {
        let kpi = KpiData::new("Inventory Turnover", "8.1").with_description("rolling 12m");
        let d = kpi_display(&kpi);
        assert!(d.change.is_none());
        assert_eq!(d.note.as_deref(), Some("rolling 12m"));
    }

    #[test]
    fn test_rank_by_revenue_growth() {
        let data = vec![snapshot("a", 1.0), snapshot("b", 9.5), snapshot("c", -2.0)];
        let ranked = rank_by_revenue_growth(&data);
        let order: Vec<(usize, &str)> = ranked
            .iter()
            .map(|(rank, s)| (*rank, s.subsidiary_id.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "b"), (2, "a"), (3, "c")]);
    }

    #[test]
    fn test_top_clients_by_revenue() {
        let clients = vec![
            client("C1", 10.0),
            client("C2", 30.0),
            client("C3", 20.0),
        ];
        let top = top_clients_by_revenue(&clients, 2);
        let ids: Vec<&str> = top.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C2", "C3"]);
        assert!(top_clients_by_revenue(&[], 5).is_empty());
    }

    #[test]
    fn test_carriers_by_on_time() {
        let carrier = |id: &str, otp: f64| CarrierData {
            id: id.to_string(),
            name: id.to_string(),
            on_time_performance: otp,
            cost_per_shipment: 10.0,
            damage_rate: 1.0,
        };
        let sorted = carriers_by_on_time(&[carrier("T1", 90.0), carrier("T2", 97.1)]);
        assert_eq!(sorted[0].id, "T2");
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(star_rating(4.8), [true, true, true, true, false]);
        assert_eq!(star_rating(3.0), [true, true, true, false, false]);
        assert_eq!(star_rating(5.0), [true; 5]);
        assert_eq!(star_rating(0.4), [false; 5]);
    }

    #[test]
    fn test_subsidiary_code() {
        assert_eq!(subsidiary_code("rhcl"), "RHCL");
    }

    #[test]
    fn test_alert_time_text() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 13, 5, 9).unwrap();
        assert_eq!(alert_time_text(&ts), "1:05:09 PM - 3/15/2024");
    }

    #[test]
    fn test_alert_styles() {
        assert_eq!(alert_icon(AlertSeverity::Warning), "alert-triangle");
        assert!(alert_class(AlertSeverity::Error).ends_with("--error"));
    }
}
