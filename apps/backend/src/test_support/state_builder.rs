use std::time::Duration;

use crate::config::db::{DbConfig, DbKind};
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

pub const MEMORY_DB_URL: &str = "sqlite::memory:";

pub fn memory_db_config() -> DbConfig {
    DbConfig {
        url: MEMORY_DB_URL.to_string(),
        kind: DbKind::SqliteMemory,
        max_connections: 1,
        acquire_timeout: Duration::from_secs(5),
        sql_log: false,
    }
}

/// A fully bootstrapped state on a private in-memory SQLite database.
///
/// # Example
/// ```rust,no_run
/// use backend::test_support::memory_state;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let state = memory_state().await?;
/// assert!(state.db().is_some());
/// # Ok(())
/// # }
/// ```
pub async fn memory_state() -> Result<AppState, AppError> {
    build_state().with_db(memory_db_config()).build().await
}
