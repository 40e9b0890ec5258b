use sea_orm::DatabaseConnection;
use tracing::{error, info};

use crate::config::db::DbConfig;
use crate::error::AppError;
use crate::infra::db::{connect_db, probe_db};
use crate::infra::lifecycle::Phase;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_config: Option<DbConfig>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_config: None }
    }

    pub fn with_db(mut self, config: DbConfig) -> Self {
        self.db_config = Some(config);
        self
    }

    /// Run the starting phase. With a database this connects, applies the
    /// schema and probes connectivity; any failure is fatal and the
    /// state never reaches ready.
    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_config {
            Some(config) => {
                let conn = bootstrap_db(&config).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::new_without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

/// Single entrypoint: connect + apply schema + probe. No retries.
pub async fn bootstrap_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    info!(phase = %Phase::Starting, db_engine = config.kind.engine(), "bootstrapping database");

    let result = async {
        let conn = connect_db(config).await?;
        schema::ensure_schema(&conn).await?;
        probe_db(&conn).await?;
        Ok::<_, AppError>(conn)
    }
    .await;

    match result {
        Ok(conn) => {
            info!(phase = %Phase::Starting, "successfully connected to the database");
            Ok(conn)
        }
        Err(e) => {
            error!(phase = %Phase::Starting, error = %e, "failed to connect to the database");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_with_sqlite_memory_applies_schema() {
        let config = DbConfig::new("sqlite::memory:").unwrap();
        let state = build_state().with_db(config).build().await.unwrap();

        let db = state.db().expect("db configured");
        let missing = schema::missing_tables(db).await.unwrap();
        assert!(missing.is_empty(), "missing tables: {missing:?}");
    }
}
