//! Issue statistics and their conversion into chartable series.
//!
//! The server returns statistics in a few JSON shapes depending on the
//! metric. [`Series::from_json`] flattens all of them into labelled values:
//!
//! - an object of numbers: `{"2024-01": 3, "2024-02": 5}`
//! - an object of objects: `{"MON": {"NEW": 1, "FIXED": 2}}` becomes
//!   `MON NEW`, `MON FIXED`
//! - an array of objects: `[{"title": "Crash", "commentCount": 4}]`
//! - an array of numbers, labelled by position

use serde_json::{Map, Value};

use super::Api;
use crate::api::{Endpoint, Outcome, StatisticMetric, Transport};
use crate::types::ProjectId;

const LABEL_KEYS: &[&str] = &[
    "label", "title", "username", "name", "date", "day", "month", "status", "priority",
];
const VALUE_KEYS: &[&str] = &["count", "value", "total", "commentCount", "comments"];

/// A titled sequence of labelled values, ready for a chart sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: String,
    pub points: Vec<(String, f64)>,
}

impl Series {
    pub fn from_json(title: impl Into<String>, value: &Value) -> Self {
        let points = match value {
            Value::Object(map) => object_points(map),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| array_point(i, item))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            title: title.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, or zero when empty.
    pub fn max(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0, f64::max)
    }
}

fn object_points(map: &Map<String, Value>) -> Vec<(String, f64)> {
    let mut points = Vec::new();
    for (key, value) in map {
        match value {
            Value::Number(n) => {
                if let Some(n) = n.as_f64() {
                    points.push((key.clone(), n));
                }
            }
            Value::Object(inner) => {
                for (inner_key, inner_value) in inner {
                    if let Some(n) = inner_value.as_f64() {
                        points.push((format!("{key} {inner_key}"), n));
                    }
                }
            }
            _ => {}
        }
    }
    points
}

fn array_point(index: usize, item: &Value) -> Option<(String, f64)> {
    match item {
        Value::Number(n) => Some(((index + 1).to_string(), n.as_f64()?)),
        Value::Object(map) => {
            let label = LABEL_KEYS
                .iter()
                .find_map(|k| map.get(*k).and_then(label_text))
                .unwrap_or_else(|| format!("#{}", index + 1));
            let value = VALUE_KEYS
                .iter()
                .find_map(|k| map.get(*k).and_then(Value::as_f64))
                .or_else(|| {
                    map.iter()
                        .filter(|(k, _)| k.as_str() != "id")
                        .find_map(|(_, v)| v.as_f64())
                })?;
            Some((label, value))
        }
        _ => None,
    }
}

fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Issues reported per month across all projects.
pub async fn global_issues_per_month<T: Transport>(api: &Api<'_, T>) -> Outcome<Series> {
    api.call::<Value>(&Endpoint::GlobalIssuesPerMonth)
        .await
        .map(|value| Series::from_json("Issues per month (all projects)", &value))
}

pub async fn project_metric<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    metric: StatisticMetric,
) -> Outcome<Series> {
    let title = metric.title();
    api.call::<Value>(&Endpoint::ProjectStatistic(project, metric))
        .await
        .map(|value| Series::from_json(title, &value))
}
