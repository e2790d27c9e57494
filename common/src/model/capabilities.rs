use serde::{Deserialize, Serialize};

/// The aggregate functions and comparison operators the backend accepts,
/// served by `GET /capabilities`.
///
/// The threshold form builds its option lists from this value only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub operators: Vec<String>,
}

impl Capabilities {
    /// No function or no operator to offer.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() || self.operators.is_empty()
    }
}
