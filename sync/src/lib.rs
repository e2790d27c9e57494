//! Client-side state synchronization core of the analytics dashboard.
//!
//! Four independently fetched collections (datasets, relationships,
//! thresholds, recommendations) reference each other; this crate keeps their
//! rendered state consistent after every user action. It is sans-IO: the
//! [`Dashboard`] consumes [`Msg`] values and answers with [`Command`] values,
//! and the shell runs those effects (network through a [`Backend`], timers,
//! file upload) and feeds the outcomes back as messages.
//!
//! Components, leaf first:
//! - [`notifier`]: scoped, self-clearing status messages.
//! - [`cache::EntityCache`]: the dataset snapshot every other part resolves through.
//! - [`selector::DependentSelector`]: dataset → column cascade, one per form pair.
//! - [`relationships`], [`thresholds`], [`recommendations`], [`datasets`]: the
//!   per-collection managers.
//! - [`dashboard`]: the refresh orchestrator owning all of the above.

pub mod backend;
pub mod cache;
pub mod dashboard;
pub mod datasets;
pub mod error;
pub mod format;
pub mod listing;
pub mod notifier;
pub mod recommendations;
pub mod relationships;
pub mod runtime;
pub mod selector;
pub mod thresholds;

pub use backend::Backend;
pub use dashboard::{Command, Dashboard, Msg, Request, Settings};
pub use error::{ClientError, ValidationError};
