// QRCraft Application Layer

pub mod commands;
pub mod error;
pub mod intents;
pub mod metrics;
pub mod persistence;
pub mod queries;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use intents::{dispatch, Intent, IntentOutcome};
pub use metrics::{Metrics, MetricsSnapshot};
pub use state::{Adapters, AppState, Session};
