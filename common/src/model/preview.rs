use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// First rows of a dataset, as returned by `GET /tables/{id}/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePreview {
    /// Display name of the dataset.
    pub table_name: String,
    /// Column names as stored by the backend (sanitized).
    pub columns: Vec<String>,
    /// One map per row, keyed by column name.
    pub data: Vec<Map<String, Value>>,
}

impl TablePreview {
    /// Renders the cell of `row` under `column` as display text.
    ///
    /// Missing keys and JSON `null` render as an empty string, strings render
    /// without quotes and everything else uses its JSON form.
    pub fn cell(&self, row: usize, column: &str) -> String {
        match self.data.get(row).and_then(|r| r.get(column)) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
