use std::fmt;

use tracing::{error, info};

use crate::state::app_state::AppState;

/// Process phases: starting → ready → stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Ready,
    Stopping,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Starting => "starting",
            Phase::Ready => "ready",
            Phase::Stopping => "stopping",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release everything the state holds. Nothing is persisted on the way out.
pub async fn shutdown(state: AppState) {
    info!(phase = %Phase::Stopping, "shutting down");

    if let Some(db) = state.into_db() {
        match db.close().await {
            Ok(()) => info!(phase = %Phase::Stopping, "database pool closed"),
            Err(e) => error!(phase = %Phase::Stopping, error = %e, "failed to close database pool"),
        }
    }
}
