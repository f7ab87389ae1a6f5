//! Table and chart data derived from the record set.
//!
//! These are pure functions of the current records: no network access, no
//! re-sorting. Chart bars appear in exactly the order the backend returned.

use crate::model::Record;
use serde::Serialize;

/// Column headings of the record table, including the actions column.
pub const TABLE_HEADERS: [&str; 6] = [
    "Name",
    "Phone Number",
    "Location",
    "Credit Score",
    "Tenure",
    "Actions",
];

pub const CHART_TITLE: &str = "Credit Score vs Tenure";
pub const CREDIT_SCORE_LABEL: &str = "Credit Score";
pub const TENURE_LABEL: &str = "Tenure";

/// One rendered table row. Edit/delete act on `record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub record: Record,
    pub cells: [String; 5],
}

pub fn table_rows(records: &[Record]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow {
            cells: [
                record.name.clone(),
                record.phone_number.clone(),
                record.location.clone(),
                record.credit_score.to_string(),
                record.tenure.to_string(),
            ],
            record: record.clone(),
        })
        .collect()
}

/// Which y-axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub axis: Axis,
    pub color: &'static str,
    pub values: Vec<i32>,
}

/// Data for the dual-axis bar chart: one category per record, labelled by
/// name, with credit score on the left axis and tenure on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn chart_data(records: &[Record]) -> ChartData {
    ChartData {
        labels: records.iter().map(|r| r.name.clone()).collect(),
        series: vec![
            ChartSeries {
                label: CREDIT_SCORE_LABEL,
                axis: Axis::Left,
                color: "rgba(75, 192, 192, 0.6)",
                values: records.iter().map(|r| r.credit_score).collect(),
            },
            ChartSeries {
                label: TENURE_LABEL,
                axis: Axis::Right,
                color: "rgba(153, 102, 255, 0.6)",
                values: records.iter().map(|r| r.tenure).collect(),
            },
        ],
    }
}

/// Rendering options passed alongside [`ChartData`] to the chart script.
pub fn chart_config() -> serde_json::Value {
    serde_json::json!({
        "title": CHART_TITLE,
        "leftAxisLabel": CREDIT_SCORE_LABEL,
        "rightAxisLabel": TENURE_LABEL,
        "legendPosition": "top",
    })
}
