use std::sync::Arc;

use crate::generator::FeedbackGenerator;
use crate::storage::{FeedbackLog, SessionStore};
use crate::usage::UsageLedger;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is constructed once in `main` and lives for the process
/// lifetime — there are no hidden module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub feedback_log: Arc<FeedbackLog>,
    pub usage: Arc<UsageLedger>,
    /// Pluggable feedback generator. Production: `LlmFeedbackGenerator`.
    pub generator: Arc<dyn FeedbackGenerator>,
}
