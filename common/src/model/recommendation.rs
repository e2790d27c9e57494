use serde::{Deserialize, Serialize};

/// A recommendation generated by the backend when a threshold was breached.
///
/// The numeric fields and the operator can be missing when the triggering
/// threshold has since been removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub id: Option<i64>,
    pub function_name: String,
    pub table_name: String,
    pub column_name: String,
    #[serde(default)]
    pub threshold_operator: Option<String>,
    #[serde(default)]
    pub threshold_value: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    pub recommendation_text: String,
    /// Generation time as written by the backend (RFC 3339 or SQLite
    /// `YYYY-MM-DD HH:MM:SS`).
    pub timestamp: String,
}
