use serde::{Deserialize, Serialize};

/// An active threshold rule as listed by `GET /thresholds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name of the dataset the rule watches.
    pub table_name: String,
    pub column_name: String,
    /// Aggregate function name, one of the backend's capabilities.
    pub function: String,
    /// Comparison operator, one of the backend's capabilities.
    pub operator: String,
    pub value: f64,
}
