use serde::{Deserialize, Serialize};

/// A declared link between a column of one dataset and a column of another,
/// as listed by `GET /relationships`.
///
/// Dataset names are resolved by the backend at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub id: Option<i64>,
    pub source_table_name: String,
    pub source_column: String,
    pub target_table_name: String,
    pub target_column: String,
}
