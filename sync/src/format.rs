//! Display formatting shared by the list renderers.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Placeholder for values the backend left out.
pub const MISSING: &str = "N/A";

/// Numbers as the user typed them: `1000` rather than `1000.0`.
pub fn number(value: f64) -> String {
    value.to_string()
}

pub fn optional_number(value: Option<f64>) -> String {
    value.map(number).unwrap_or_else(|| MISSING.to_string())
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Human-readable form of a backend timestamp.
///
/// Accepts RFC 3339 and the zone-less formats SQLite writes (read as UTC).
/// Anything else is returned verbatim.
pub fn timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .ok()
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        });

    match parsed {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => raw.to_string(),
    }
}
