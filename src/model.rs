//! Dataset documents as published under `datasets/`.
//!
//! Everything except a dataset's `tables` is optional when decoding so that
//! partially filled documents still render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub references: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableInfo {
    pub name: String,
    pub description: String,
    pub num_rows: u64,
    pub num_columns: u64,
    pub primary_key: Option<String>,
    pub time_column: Option<String>,
    pub foreign_keys: Vec<ForeignKey>,
    pub sample_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augmented: Option<bool>,
}

/// A directed link `from_table.from_column -> to_table.to_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInfo {
    pub id: String,
    pub name: String,
    pub task_type: String,
    pub description: String,
    pub entity_table: String,
    pub target_col: String,
    pub metrics: Vec<String>,
    pub difficulty: String,
    pub train_size: u64,
    pub val_size: u64,
    pub test_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_positive_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val_positive_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_positive_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalCoverage {
    pub start: String,
    pub end: String,
    pub days: u64,
}

/// A dataset document. `tables` is required; every other field may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_path: Option<String>,
    #[serde(default)]
    pub num_tables: u64,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub val_timestamp: String,
    #[serde(default)]
    pub test_timestamp: String,
    #[serde(default)]
    pub temporal_coverage: TemporalCoverage,
    pub tables: Vec<TableInfo>,
    #[serde(default)]
    pub tasks: Vec<TaskInfo>,
    #[serde(default)]
    pub statistics: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetIndex {
    pub datasets: Vec<DatasetSummary>,
}
