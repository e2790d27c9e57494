//! Wire models shared by the dashboard frontend, its synchronization core and
//! the host process.
//!
//! - `model`: the entities the backend reads out (datasets, relationships,
//!   thresholds, recommendations) plus capabilities and runtime client config.
//! - `requests`: payloads the client sends to the backend.
//! - `responses`: the envelopes the backend wraps its answers in.

pub mod model;
pub mod requests;
pub mod responses;
