//! Mock data source for the executive dashboard.
//!
//! Every call draws a fresh snapshot for all five subsidiaries and derives
//! the per-view collections from the selected one. Nothing is cached here;
//! see `state::BundleCache` and the `Memo` in `DashboardContext`.

use crate::shared::components::table::number_format::{format_currency_k, format_currency_m};
use crate::shared::random::{MetricRandom, MetricRange};
use chrono::{DateTime, Duration, Utc};
use contracts::dashboards::d100_executive::*;
use contracts::enums::Period;
use rand::Rng;
use thiserror::Error;

pub const REVENUE_GROWTH: MetricRange = MetricRange::new(-2.0, 10.0, 1);
pub const PROFIT_MARGIN: MetricRange = MetricRange::new(2.0, 15.0, 1);
pub const MARKET_SHARE: MetricRange = MetricRange::new(10.0, 30.0, 1);
pub const CUSTOMER_SATISFACTION: MetricRange = MetricRange::new(75.0, 95.0, 0);
pub const GROSS_PROFIT: MetricRange = MetricRange::new(500_000.0, 2_000_000.0, 0);
pub const EBITDA: MetricRange = MetricRange::new(200_000.0, 800_000.0, 0);
pub const OPERATING_RATIO: MetricRange = MetricRange::new(85.0, 95.0, 1);
pub const CASH_CONVERSION_CYCLE: MetricRange = MetricRange::new(30.0, 60.0, 0);
pub const ON_TIME_DELIVERY: MetricRange = MetricRange::new(90.0, 99.0, 1);
pub const ORDER_ACCURACY: MetricRange = MetricRange::new(95.0, 99.5, 1);
pub const WAREHOUSE_UTILIZATION: MetricRange = MetricRange::new(70.0, 90.0, 1);
pub const PERFECT_ORDER_RATE: MetricRange = MetricRange::new(85.0, 97.0, 1);
pub const ROIC: MetricRange = MetricRange::new(8.0, 18.0, 1);
pub const INVENTORY_TURNOVER: MetricRange = MetricRange::new(5.0, 12.0, 1);
pub const AR_TURNOVER: MetricRange = MetricRange::new(6.0, 10.0, 1);
pub const AP_TURNOVER: MetricRange = MetricRange::new(4.0, 8.0, 1);
pub const SATISFACTION_SCORE: MetricRange = MetricRange::new(4.0, 5.0, 1);
pub const NPS: MetricRange = MetricRange::new(30.0, 70.0, 0);
pub const RETENTION_RATE: MetricRange = MetricRange::new(80.0, 95.0, 0);
pub const NEW_ACQUISITION: MetricRange = MetricRange::new(50.0, 200.0, 0);
pub const INVENTORY_ACCURACY: MetricRange = MetricRange::new(97.0, 99.8, 1);
pub const TRANSPORT_COST: MetricRange = MetricRange::new(50_000.0, 150_000.0, 0);
pub const RETURN_PROCESSING_RATE: MetricRange = MetricRange::new(80.0, 95.0, 1);
pub const COST_PER_UNIT: MetricRange = MetricRange::new(5.0, 15.0, 2);

/// Snapshot field name -> range, in `SubsidiaryPerformanceData::metrics` order
pub const SNAPSHOT_RANGES: [(&str, MetricRange); 24] = [
    ("revenue_growth", REVENUE_GROWTH),
    ("profit_margin", PROFIT_MARGIN),
    ("market_share", MARKET_SHARE),
    ("customer_satisfaction", CUSTOMER_SATISFACTION),
    ("gross_profit", GROSS_PROFIT),
    ("ebitda", EBITDA),
    ("operating_ratio", OPERATING_RATIO),
    ("cash_conversion_cycle", CASH_CONVERSION_CYCLE),
    ("on_time_delivery", ON_TIME_DELIVERY),
    ("order_accuracy", ORDER_ACCURACY),
    ("warehouse_utilization", WAREHOUSE_UTILIZATION),
    ("perfect_order_rate", PERFECT_ORDER_RATE),
    ("roic", ROIC),
    ("inventory_turnover", INVENTORY_TURNOVER),
    ("ar_turnover", AR_TURNOVER),
    ("ap_turnover", AP_TURNOVER),
    ("satisfaction_score", SATISFACTION_SCORE),
    ("nps", NPS),
    ("retention_rate", RETENTION_RATE),
    ("new_acquisition", NEW_ACQUISITION),
    ("inventory_accuracy", INVENTORY_ACCURACY),
    ("transport_cost", TRANSPORT_COST),
    ("return_processing_rate", RETURN_PROCESSING_RATE),
    ("cost_per_unit", COST_PER_UNIT),
];

const CLIENT_FEEDBACK: [&str; 3] = [
    "Excellent service, very responsive.",
    "Some delays last quarter, but improving.",
    "Generally satisfied.",
];

const RECENT_FEEDBACK: [&str; 5] = [
    "Fast delivery, impressed.",
    "Driver was unprofessional.",
    "Packaging needs improvement.",
    "Support team resolved issue quickly.",
    "Consistent and reliable.",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("unknown subsidiary '{0}'")]
    UnknownSubsidiary(String),
}

/// What the dashboard is currently showing; the cache key of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardSelection {
    pub subsidiary_id: String,
    pub period: Period,
}

impl DashboardSelection {
    pub fn new(subsidiary_id: impl Into<String>, period: Period) -> Self {
        Self {
            subsidiary_id: subsidiary_id.into(),
            period,
        }
    }
}

/// Bundle for a selection with fresh entropy. Unknown ids fall back to the
/// first subsidiary.
pub fn get_dashboard_data(subsidiary_id: &str, period: Period) -> DashboardBundle {
    let mut rng = MetricRandom::from_entropy();
    generate_dashboard_data(&mut rng, Utc::now(), subsidiary_id, period)
}

/// Strict lookup: rejects ids that are not one of the fixed subsidiaries
pub fn try_dashboard_data(
    subsidiary_id: &str,
    period: Period,
) -> Result<DashboardBundle, DashboardError> {
    if find_subsidiary(subsidiary_id).is_none() {
        return Err(DashboardError::UnknownSubsidiary(subsidiary_id.to_string()));
    }
    Ok(get_dashboard_data(subsidiary_id, period))
}

/// Generates every view's data for one selection from an injectable generator
pub fn generate_dashboard_data<R: Rng>(
    rng: &mut MetricRandom<R>,
    now: DateTime<Utc>,
    subsidiary_id: &str,
    period: Period,
) -> DashboardBundle {
    let labels = period.labels();

    let snapshots: Vec<SubsidiaryPerformanceData> = SUBSIDIARIES
        .iter()
        .map(|sub| generate_snapshot(rng, sub))
        .collect();

    let current = snapshots
        .iter()
        .find(|s| s.subsidiary_id == subsidiary_id)
        .unwrap_or(&snapshots[0])
        .clone();

    log::debug!(
        "d100: generated dashboard data for '{}' (resolved '{}'), period {}",
        subsidiary_id,
        current.subsidiary_id,
        period
    );

    let revenue_trend = series(rng, labels, &["Revenue", "Margin"], 100_000.0, 500_000.0, 0);
    let revenue_expense_data =
        series(rng, labels, &["Revenue", "Expenses"], 100_000.0, 500_000.0, 0);
    let margin_trend = series(rng, labels, &["Gross Margin", "Net Margin"], 5.0, 25.0, 1);
    let operational_trend = series(rng, labels, &["OTD", "Accuracy"], 90.0, 100.0, 1);
    let cost_per_unit_data = series(rng, labels, &["CostPerUnit"], 5.0, 15.0, 2);
    let warehouse_utilization_data = series(rng, labels, &["Utilization"], 65.0, 95.0, 1);
    let logistics_cost_trend = series(
        rng,
        labels,
        &["Transport Cost", "Warehouse Cost"],
        40_000.0,
        160_000.0,
        0,
    );

    let kpis = vec![
        KpiData::new("Revenue Growth", format!("{}%", current.revenue_growth))
            .with_change(rng.random(-5.0, 5.0, 1)),
        KpiData::new("Profit Margin", format!("{}%", current.profit_margin))
            .with_change(rng.random(-2.0, 2.0, 1)),
        KpiData::new("Market Share", format!("{}%", current.market_share))
            .with_change(rng.random(-1.0, 1.0, 1)),
        KpiData::new(
            "Customer Satisfaction",
            format!("{}%", current.customer_satisfaction),
        )
        .with_change(rng.random(-3.0, 3.0, 0)),
    ];

    let alerts = vec![
        AlertData {
            id: "a1".to_string(),
            severity: AlertSeverity::Warning,
            message: format!(
                "High return rate detected for {}",
                current.subsidiary_name
            ),
            timestamp: now,
        },
        AlertData {
            id: "a2".to_string(),
            severity: AlertSeverity::Info,
            message: "Q3 planning meeting scheduled for next week.".to_string(),
            timestamp: now - Duration::days(1),
        },
        AlertData {
            id: "a3".to_string(),
            severity: AlertSeverity::Error,
            message: "Critical delay in Frankfurt hub affecting GFS.".to_string(),
            timestamp: now - Duration::hours(1),
        },
    ];

    let financial_kpis = vec![
        KpiData::new("Gross Profit", format_currency_m(current.gross_profit)).with_unit("USD"),
        KpiData::new("EBITDA", format_currency_m(current.ebitda)).with_unit("USD"),
        KpiData::new("Operating Ratio", format!("{}%", current.operating_ratio)),
        KpiData::new(
            "Cash Conversion Cycle",
            format!("{} Days", current.cash_conversion_cycle),
        ),
    ];

    let working_capital_metrics = vec![
        KpiData::new(
            "Inventory Turnover",
            format!("{:.1}", current.inventory_turnover),
        ),
        KpiData::new("AR Turnover", format!("{:.1}", current.ar_turnover)),
        KpiData::new("AP Turnover", format!("{:.1}", current.ap_turnover)),
    ];

    let operational_kpis = vec![
        KpiData::new("On-Time Delivery", format!("{}%", current.on_time_delivery)),
        KpiData::new("Order Accuracy", format!("{}%", current.order_accuracy)),
        KpiData::new(
            "Warehouse Utilization",
            format!("{}%", current.warehouse_utilization),
        ),
        KpiData::new(
            "Perfect Order Rate",
            format!("{}%", current.perfect_order_rate),
        ),
    ];

    let cycle_time_gauges = vec![
        GaugeData {
            name: "Order Fulfillment".to_string(),
            value: rng.random(12.0, 48.0, 0),
            color: "#82ca9d".to_string(),
        },
        GaugeData {
            name: "Dock-to-Stock".to_string(),
            value: rng.random(2.0, 8.0, 0),
            color: "#ffc658".to_string(),
        },
    ];

    let names: Vec<&str> = SUBSIDIARIES.iter().map(|s| s.name).collect();
    let snapshot_of = |name: &str| snapshots.iter().find(|s| s.subsidiary_name == name);
    let financial_comparison_charts = FinancialComparisonCharts {
        revenue: TimeSeries::from_fn(&names, &["Revenue"], |name, _| {
            snapshot_of(name).map(|s| s.gross_profit).unwrap_or(0.0)
        }),
        profit: TimeSeries::from_fn(&names, &["Margin"], |name, _| {
            snapshot_of(name).map(|s| s.profit_margin).unwrap_or(0.0)
        }),
    };
    let satisfaction_by_subsidiary = TimeSeries::from_fn(&names, &["Satisfaction"], |name, _| {
        snapshot_of(name).map(|s| s.satisfaction_score).unwrap_or(0.0)
    });

    let operational_comparison_radar = [
        ("OTD", current.on_time_delivery),
        ("Accuracy", current.order_accuracy),
        ("Utilization", current.warehouse_utilization),
        ("Perfect Order", current.perfect_order_rate),
        ("Inv. Accuracy", current.inventory_accuracy),
    ]
    .into_iter()
    .map(|(subject, value)| RadarData {
        subject: subject.to_string(),
        value,
        full_mark: 100.0,
    })
    .collect();

    let client_kpis = vec![
        KpiData::new(
            "Avg. Satisfaction",
            format!("{:.1}/5", current.satisfaction_score),
        ),
        KpiData::new("Net Promoter Score", format!("{}", current.nps)),
        KpiData::new("Retention Rate", format!("{}%", current.retention_rate)),
        KpiData::new("New Clients (YTD)", current.new_acquisition),
    ];

    let mut top_clients: Vec<ClientData> = (0..10)
        .map(|i| ClientData {
            id: format!("C{}", 100 + i),
            name: format!("Client {} Corp", letter(i)),
            revenue: rng.random(50_000.0, 500_000.0, 0),
            satisfaction_score: rng.random(3.5, 5.0, 1),
            nps: rng.random(20.0, 80.0, 0),
            last_feedback: Some(CLIENT_FEEDBACK[i % CLIENT_FEEDBACK.len()].to_string()),
            subsidiary_id: SUBSIDIARIES[i % SUBSIDIARIES.len()].id.to_string(),
        })
        .collect();
    top_clients.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    let recent_feedback = RECENT_FEEDBACK
        .iter()
        .enumerate()
        .map(|(i, feedback)| ClientData {
            id: format!("C{}", 200 + i),
            name: format!("Client {} Inc.", letter(10 + i)),
            revenue: rng.random(10_000.0, 100_000.0, 0),
            satisfaction_score: rng.random(3.0, 4.8, 1),
            nps: rng.random(10.0, 60.0, 0),
            last_feedback: Some(feedback.to_string()),
            subsidiary_id: SUBSIDIARIES[i % SUBSIDIARIES.len()].id.to_string(),
        })
        .collect();

    let logistics_kpis = vec![
        KpiData::new(
            "Warehouse Utilization",
            format!("{}%", current.warehouse_utilization),
        ),
        KpiData::new(
            "Inventory Accuracy",
            format!("{}%", current.inventory_accuracy),
        ),
        KpiData::new("Transport Cost (Avg)", format_currency_k(current.transport_cost))
            .with_unit("Monthly Avg"),
        KpiData::new(
            "Return Processing Rate",
            format!("{}%", current.return_processing_rate),
        ),
    ];

    let mut carrier_performance: Vec<CarrierData> = (1..=5)
        .map(|n| CarrierData {
            id: format!("T{}", n),
            name: format!("Carrier {} Express", n),
            on_time_performance: rng.random(88.0, 98.0, 1),
            cost_per_shipment: rng.random(8.0, 25.0, 2),
            damage_rate: rng.random(0.1, 2.5, 1),
        })
        .collect();
    carrier_performance.sort_by(|a, b| b.on_time_performance.total_cmp(&a.on_time_performance));

    DashboardBundle {
        subsidiary_id: current.subsidiary_id.clone(),
        period,
        period_labels: labels.iter().map(|l| l.to_string()).collect(),

        kpis,
        revenue_trend,
        roic_gauge: vec![GaugeData {
            name: "ROIC".to_string(),
            value: current.roic,
            color: "#8884d8".to_string(),
        }],
        subsidiary_comparison: snapshots.clone(),
        alerts,

        financial_kpis,
        revenue_expense_data,
        margin_trend,
        working_capital_metrics,
        profitability_by_subsidiary: snapshots.clone(),

        operational_kpis,
        cycle_time_gauges,
        operational_trend,
        cost_per_unit_data,
        operational_comparison: snapshots.clone(),

        subsidiary_matrix: snapshots,
        financial_comparison_charts,
        operational_comparison_radar,

        client_kpis,
        satisfaction_by_subsidiary,
        top_clients,
        recent_feedback,

        logistics_kpis,
        warehouse_utilization_data,
        logistics_cost_trend,
        carrier_performance,
    }
}

fn generate_snapshot<R: Rng>(
    rng: &mut MetricRandom<R>,
    sub: &Subsidiary,
) -> SubsidiaryPerformanceData {
    SubsidiaryPerformanceData {
        subsidiary_id: sub.id.to_string(),
        subsidiary_name: sub.name.to_string(),
        revenue_growth: rng.in_range(REVENUE_GROWTH),
        profit_margin: rng.in_range(PROFIT_MARGIN),
        market_share: rng.in_range(MARKET_SHARE),
        customer_satisfaction: rng.in_range(CUSTOMER_SATISFACTION),
        gross_profit: rng.in_range(GROSS_PROFIT),
        ebitda: rng.in_range(EBITDA),
        operating_ratio: rng.in_range(OPERATING_RATIO),
        cash_conversion_cycle: rng.in_range(CASH_CONVERSION_CYCLE),
        on_time_delivery: rng.in_range(ON_TIME_DELIVERY),
        order_accuracy: rng.in_range(ORDER_ACCURACY),
        warehouse_utilization: rng.in_range(WAREHOUSE_UTILIZATION),
        perfect_order_rate: rng.in_range(PERFECT_ORDER_RATE),
        roic: rng.in_range(ROIC),
        inventory_turnover: rng.in_range(INVENTORY_TURNOVER),
        ar_turnover: rng.in_range(AR_TURNOVER),
        ap_turnover: rng.in_range(AP_TURNOVER),
        satisfaction_score: rng.in_range(SATISFACTION_SCORE),
        nps: rng.in_range(NPS),
        retention_rate: rng.in_range(RETENTION_RATE),
        new_acquisition: rng.in_range(NEW_ACQUISITION),
        inventory_accuracy: rng.in_range(INVENTORY_ACCURACY),
        transport_cost: rng.in_range(TRANSPORT_COST),
        return_processing_rate: rng.in_range(RETURN_PROCESSING_RATE),
        cost_per_unit: rng.in_range(COST_PER_UNIT),
    }
}

/// Period-indexed series with every key drawn from `[min, max]`
fn series<R: Rng>(
    rng: &mut MetricRandom<R>,
    labels: &[&str],
    keys: &[&str],
    min: f64,
    max: f64,
    decimals: u32,
) -> TimeSeries {
    TimeSeries::from_fn(labels, keys, |_, _| rng.random(min, max, decimals))
}

/// 0 -> 'A', 10 -> 'K'
fn letter(i: usize) -> char {
    (b'A' + (i % 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn bundle(seed: u64, id: &str, period: Period) -> DashboardBundle {
        let mut rng = MetricRandom::seeded(seed);
        generate_dashboard_data(&mut rng, fixed_now(), id, period)
    }

    /// Same structure with every scalar blanked out
    fn shape(value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), shape(v)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(shape).collect()),
            _ => Value::Null,
        }
    }

    #[test]
    fn test_series_follow_period_labels() {
        for period in Period::all() {
            let b = bundle(1, "gfs", period);
            let expected: Vec<&str> = period.labels().to_vec();
            assert_eq!(b.period_labels, expected);
            for (name, series) in b.period_series() {
                assert_eq!(series.labels(), expected, "{name} for {period}");
            }
        }
    }

    #[test]
    fn test_snapshot_fields_within_ranges() {
        for seed in 0..25 {
            let b = bundle(seed, "rhcl", Period::Monthly);
            assert_eq!(b.subsidiary_matrix.len(), SUBSIDIARIES.len());
            for snapshot in &b.subsidiary_matrix {
                for ((name, value), (range_name, range)) in
                    snapshot.metrics().iter().zip(SNAPSHOT_RANGES.iter())
                {
                    assert_eq!(name, range_name);
                    assert!(range.contains(*value), "{name}={value} outside {range:?}");
                    let scaled = value * 10f64.powi(range.decimals as i32);
                    assert!((scaled - scaled.round()).abs() < 1e-6, "{name}={value}");
                }
            }
        }
    }

    #[test]
    fn test_one_snapshot_per_subsidiary_in_order() {
        let b = bundle(3, "tsc", Period::Annual);
        let ids: Vec<&str> = b
            .subsidiary_comparison
            .iter()
            .map(|s| s.subsidiary_id.as_str())
            .collect();
        assert_eq!(ids, vec!["rhcl", "gfs", "tsc", "fbd", "rfn"]);
        assert_eq!(b.subsidiary_comparison, b.profitability_by_subsidiary);
        assert_eq!(b.subsidiary_comparison, b.operational_comparison);
        assert_eq!(b.subsidiary_comparison, b.subsidiary_matrix);
    }

    #[test]
    fn test_selected_snapshot_drives_kpis() {
        let b = bundle(9, "fbd", Period::Monthly);
        let fbd = b
            .subsidiary_matrix
            .iter()
            .find(|s| s.subsidiary_id == "fbd")
            .unwrap();
        assert_eq!(b.subsidiary_id, "fbd");
        assert_eq!(
            b.kpis[0].value,
            KpiValue::Text(format!("{}%", fbd.revenue_growth))
        );
        assert_eq!(b.roic_gauge[0].value, fbd.roic);
        assert_eq!(b.operational_comparison_radar[4].value, fbd.inventory_accuracy);
        assert!(b.alerts[0].message.ends_with("Food & Beverage Distribution"));
    }

    #[test]
    fn test_unknown_subsidiary_matches_first_shape() {
        let unknown = bundle(5, "unknown-id", Period::Monthly);
        let rhcl = bundle(6, "rhcl", Period::Monthly);
        assert_eq!(unknown.subsidiary_id, "rhcl");
        assert_eq!(unknown.revenue_trend.len(), 12);
        assert_eq!(unknown.revenue_trend.labels()[0], "Jan");
        assert_eq!(unknown.revenue_trend.labels()[11], "Dec");
        let a = serde_json::to_value(&unknown).unwrap();
        let b = serde_json::to_value(&rhcl).unwrap();
        assert_eq!(shape(&a), shape(&b));
    }

    #[test]
    fn test_unknown_subsidiary_uses_first_snapshot() {
        let b = bundle(8, "nope", Period::Weekly);
        let first = &b.subsidiary_matrix[0];
        assert_eq!(b.kpis[1].value, KpiValue::Text(format!("{}%", first.profit_margin)));
    }

    #[test]
    fn test_gfs_quarterly_revenue_trend() {
        let b = bundle(12, "gfs", Period::Quarterly);
        assert_eq!(b.revenue_trend.labels(), vec!["Q1", "Q2", "Q3", "Q4"]);
        for point in &b.revenue_trend {
            let revenue = point.get("Revenue").unwrap();
            let margin = point.get("Margin").unwrap();
            assert!((100_000.0..=500_000.0).contains(&revenue));
            assert!((100_000.0..=500_000.0).contains(&margin));
        }
    }

    #[test]
    fn test_clients_and_carriers_are_sorted() {
        for seed in 0..10 {
            let b = bundle(seed, "rfn", Period::Monthly);
            assert_eq!(b.top_clients.len(), 10);
            assert!(b
                .top_clients
                .windows(2)
                .all(|w| w[0].revenue >= w[1].revenue));
            assert_eq!(b.carrier_performance.len(), 5);
            assert!(b
                .carrier_performance
                .windows(2)
                .all(|w| w[0].on_time_performance >= w[1].on_time_performance));
        }
    }

    #[test]
    fn test_clients_reference_known_subsidiaries() {
        let b = bundle(4, "gfs", Period::Monthly);
        for client in b.top_clients.iter().chain(b.recent_feedback.iter()) {
            assert!(find_subsidiary(&client.subsidiary_id).is_some());
            assert!((0.0..=5.0).contains(&client.satisfaction_score));
        }
        let mut ids: Vec<&str> = b.top_clients.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids.first(), Some(&"C100"));
        assert_eq!(ids.last(), Some(&"C109"));
        assert_eq!(b.recent_feedback[0].name, "Client K Inc.");
        assert_eq!(
            b.recent_feedback[4].last_feedback.as_deref(),
            Some("Consistent and reliable.")
        );
    }

    #[test]
    fn test_alert_timestamps() {
        let b = bundle(2, "rhcl", Period::Monthly);
        assert_eq!(b.alerts.len(), 3);
        assert_eq!(b.alerts[0].timestamp, fixed_now());
        assert_eq!(b.alerts[1].timestamp, fixed_now() - Duration::days(1));
        assert_eq!(b.alerts[2].timestamp, fixed_now() - Duration::hours(1));
        assert_eq!(b.alerts[2].severity, AlertSeverity::Error);
    }

    #[test]
    fn test_comparison_charts_use_subsidiary_names() {
        let b = bundle(7, "rhcl", Period::Monthly);
        let names: Vec<&str> = SUBSIDIARIES.iter().map(|s| s.name).collect();
        assert_eq!(b.financial_comparison_charts.revenue.labels(), names);
        assert_eq!(b.financial_comparison_charts.profit.keys(), vec!["Margin"]);
        assert_eq!(b.satisfaction_by_subsidiary.labels(), names);
        let gross: Vec<f64> = b.subsidiary_matrix.iter().map(|s| s.gross_profit).collect();
        assert_eq!(b.financial_comparison_charts.revenue.values("Revenue"), gross);
    }

    #[test]
    fn test_same_seed_same_bundle() {
        assert_eq!(
            bundle(42, "tsc", Period::Quarterly),
            bundle(42, "tsc", Period::Quarterly)
        );
    }

    #[test]
    fn test_try_dashboard_data_rejects_unknown_ids() {
        assert_eq!(
            try_dashboard_data("acme", Period::Monthly).unwrap_err(),
            DashboardError::UnknownSubsidiary("acme".to_string())
        );
        let b = try_dashboard_data("tsc", Period::Annual).unwrap();
        assert_eq!(b.subsidiary_id, "tsc");
        assert_eq!(b.period_labels.len(), 3);
    }
}
