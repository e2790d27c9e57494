//! Response envelopes of the backend.
//!
//! List endpoints wrap their collection in a single named field; a missing
//! field decodes as an empty collection. Mutating endpoints answer with
//! `{message}` on success and every endpoint answers `{error}` on failure.

use serde::{Deserialize, Serialize};

use crate::model::dataset::Dataset;
use crate::model::recommendation::Recommendation;
use crate::model::relationship::Relationship;
use crate::model::threshold::Threshold;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablesEnvelope {
    #[serde(default)]
    pub tables: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipsEnvelope {
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdsEnvelope {
    #[serde(default)]
    pub thresholds: Vec<Threshold>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsEnvelope {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Success answer of upload and create endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Failure answer of any endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

/// Answer of the current-value endpoint.
///
/// `current_value` is `null` when the backend could not compute a value; that
/// case comes with an error status and an `error` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentValue {
    #[serde(default)]
    pub current_value: Option<f64>,
}
