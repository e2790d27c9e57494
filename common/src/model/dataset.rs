use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable backend identifier of an uploaded dataset.
///
/// The backend hands these out as integers; the client never interprets them
/// beyond equality and the string form used as the `value` of a `<select>`
/// option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(pub i64);

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(DatasetId)
    }
}

/// One uploaded tabular source as returned by `GET /tables`.
///
/// Created by a successful upload and immutable from the client's point of
/// view afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    /// Name of the file as the user uploaded it. Used for display.
    pub original_filename: String,
    /// Sanitized name the backend stores the data under.
    pub name: String,
    /// Column names in file order.
    #[serde(default)]
    pub headers: Vec<String>,
}
