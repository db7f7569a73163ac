//! Period-indexed metric series.
//!
//! A series is an ordered sequence of points. Each point carries a period
//! label and a map from metric name to value. All points of one series share
//! the same metric key set; `TimeSeries::push` enforces it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("point '{period}' has keys {found:?}, series expects {expected:?}")]
    KeyMismatch {
        period: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// One point of a series. Serialised flat: `{"period":"Q1","Revenue":1.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Axis label, e.g. "Jan", "Q1" or a subsidiary name for category charts
    pub period: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<TimeSeriesPoint>) -> Result<Self, SeriesError> {
        let mut series = Self::new();
        for point in points {
            series.push(point)?;
        }
        Ok(series)
    }

    /// One point per label carrying exactly `keys`, valued by `value(label, key)`
    pub fn from_fn<L, F>(labels: &[L], keys: &[&str], mut value: F) -> Self
    where
        L: AsRef<str>,
        F: FnMut(&str, &str) -> f64,
    {
        let points = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                keys.iter().fold(TimeSeriesPoint::new(label), |point, key| {
                    let v = value(label, key);
                    point.with(*key, v)
                })
            })
            .collect();
        Self { points }
    }

    /// Appends a point, rejecting it when its key set differs from the first point's
    pub fn push(&mut self, point: TimeSeriesPoint) -> Result<(), SeriesError> {
        if let Some(first) = self.points.first() {
            if !first.values.keys().eq(point.values.keys()) {
                return Err(SeriesError::KeyMismatch {
                    period: point.period.clone(),
                    expected: first.values.keys().cloned().collect(),
                    found: point.values.keys().cloned().collect(),
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSeriesPoint> {
        self.points.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.period.as_str()).collect()
    }

    /// Metric keys shared by every point; empty for an empty series
    pub fn keys(&self) -> Vec<&str> {
        self.points.first().map(|p| p.keys()).unwrap_or_default()
    }

    /// Values of one metric in point order; missing values read as 0
    pub fn values(&self, key: &str) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.get(key).unwrap_or(0.0))
            .collect()
    }

    /// Smallest and largest value over the given keys
    pub fn value_range(&self, keys: &[&str]) -> Option<(f64, f64)> {
        self.points
            .iter()
            .flat_map(|p| keys.iter().filter_map(move |k| p.get(k)))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a TimeSeriesPoint;
    type IntoIter = std::slice::Iter<'a, TimeSeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(period: &str, revenue: f64, margin: f64) -> TimeSeriesPoint {
        TimeSeriesPoint::new(period)
            .with("Revenue", revenue)
            .with("Margin", margin)
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let series =
            TimeSeries::from_points(vec![point("Q2", 1.0, 2.0), point("Q1", 3.0, 4.0)]).unwrap();
        assert_eq!(series.labels(), vec!["Q2", "Q1"]);
        assert_eq!(series.values("Revenue"), vec![1.0, 3.0]);
    }

    #[test]
    fn test_push_rejects_different_key_set() {
        let mut series = TimeSeries::new();
        series.push(point("Q1", 1.0, 2.0)).unwrap();
        let err = series
            .push(TimeSeriesPoint::new("Q2").with("Revenue", 1.0))
            .unwrap_err();
        assert!(matches!(err, SeriesError::KeyMismatch { ref period, .. } if period == "Q2"));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_serialises_flat() {
        let series = TimeSeries::from_points(vec![point("Jan", 10.0, 5.5)]).unwrap();
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "period": "Jan", "Revenue": 10.0, "Margin": 5.5 }])
        );
        let back: TimeSeries = serde_json::from_value(json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn test_value_range() {
        let series =
            TimeSeries::from_points(vec![point("Q1", 10.0, 2.0), point("Q2", 30.0, 1.0)]).unwrap();
        assert_eq!(series.value_range(&["Revenue"]), Some((10.0, 30.0)));
        assert_eq!(series.value_range(&["Revenue", "Margin"]), Some((1.0, 30.0)));
        assert_eq!(series.value_range(&["Missing"]), None);
        assert_eq!(TimeSeries::new().value_range(&["Revenue"]), None);
    }

    #[test]
    fn test_from_fn_uses_every_key() {
        let series = TimeSeries::from_fn(&["W1", "W2"], &["OTD", "Accuracy"], |label, key| {
            if key == "OTD" && label == "W2" {
                2.0
            } else {
                1.0
            }
        });
        assert_eq!(series.labels(), vec!["W1", "W2"]);
        assert_eq!(series.keys(), vec!["Accuracy", "OTD"]);
        assert_eq!(series.values("OTD"), vec![1.0, 2.0]);
    }

    #[test]
    fn test_keys_of_empty_series() {
        assert!(TimeSeries::new().keys().is_empty());
    }
}
