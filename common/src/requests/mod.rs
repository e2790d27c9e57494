use serde::{Deserialize, Serialize};

use crate::model::dataset::DatasetId;

/// Request payload for `POST /relationships`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRelationship {
    pub source_table_id: DatasetId,
    pub source_column: String,
    pub target_table_id: DatasetId,
    pub target_column: String,
}

/// Request payload for `POST /thresholds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewThreshold {
    pub table_id: DatasetId,
    pub column_name: String,
    pub function: String,
    pub operator: String,
    pub value: f64,
}

/// The (dataset, column, function) triple whose current value the live
/// preview asks for. Sent as path segments of
/// `GET /tables/{id}/columns/{column}/{function}/current_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentValueQuery {
    pub table_id: DatasetId,
    pub column_name: String,
    pub function: String,
}
