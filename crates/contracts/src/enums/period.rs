use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ANNUAL_LABELS: &[&str] = &["2021", "2022", "2023"];
const QUARTERLY_LABELS: &[&str] = &["Q1", "Q2", "Q3", "Q4"];
const MONTHLY_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKLY_LABELS: &[&str] = &["W1", "W2", "W3", "W4"];

/// Reporting period selected in the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period '{0}', expected one of: daily, weekly, monthly, quarterly, annual")]
pub struct ParsePeriodError(pub String);

impl Period {
    /// Wire code, also used as the `<option value>` in the period selector
    pub fn code(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Annual => "annual",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Quarterly => "Quarterly",
            Period::Annual => "Annual",
        }
    }

    /// Ordered axis labels for every period-indexed series.
    ///
    /// Fixed lookup, not derived from a calendar. `Daily` shares the
    /// four-week table with `Weekly`.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Period::Annual => ANNUAL_LABELS,
            Period::Quarterly => QUARTERLY_LABELS,
            Period::Monthly => MONTHLY_LABELS,
            Period::Weekly | Period::Daily => WEEKLY_LABELS,
        }
    }

    pub fn all() -> Vec<Period> {
        vec![
            Period::Daily,
            Period::Weekly,
            Period::Monthly,
            Period::Quarterly,
            Period::Annual,
        ]
    }

    /// Periods offered in the header dropdown. Daily is too granular for an
    /// executive view and stays reachable only programmatically.
    pub fn selectable() -> Vec<Period> {
        vec![
            Period::Weekly,
            Period::Monthly,
            Period::Quarterly,
            Period::Annual,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            "quarterly" => Some(Period::Quarterly),
            "annual" => Some(Period::Annual),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::from_code(s.trim()).ok_or_else(|| ParsePeriodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_tables() {
        assert_eq!(Period::Annual.labels(), &["2021", "2022", "2023"]);
        assert_eq!(Period::Quarterly.labels(), &["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(Period::Monthly.labels().len(), 12);
        assert_eq!(Period::Monthly.labels()[0], "Jan");
        assert_eq!(Period::Monthly.labels()[11], "Dec");
        assert_eq!(Period::Weekly.labels(), &["W1", "W2", "W3", "W4"]);
    }

    #[test]
    fn test_daily_shares_weekly_labels() {
        assert_eq!(Period::Daily.labels(), Period::Weekly.labels());
    }

    #[test]
    fn test_parse_and_display() {
        for period in Period::all() {
            assert_eq!(period.code().parse::<Period>(), Ok(period));
            assert_eq!(period.to_string(), period.code());
        }
        assert_eq!(" quarterly ".parse::<Period>(), Ok(Period::Quarterly));
        assert!("hourly".parse::<Period>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Period::Annual).unwrap();
        assert_eq!(json, "\"annual\"");
        let back: Period = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(back, Period::Weekly);
    }

    #[test]
    fn test_selectable_hides_daily() {
        assert!(!Period::selectable().contains(&Period::Daily));
        assert_eq!(Period::selectable().len(), 4);
    }
}
