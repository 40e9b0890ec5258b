//! Canonical relational schema for the assessment backend.
//!
//! `ensure_schema` applies every enum type, table and index with
//! create-if-missing semantics. Nothing is versioned: an existing table is
//! left as it is, whatever its shape.

pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};
use sea_orm_migration::SchemaManager;

mod tables;

/// Tables owned by this schema, in dependency order (parents first).
pub const TABLES: [&str; 6] = [
    "modules",
    "study_manuals",
    "questions",
    "users",
    "answers",
    "marks",
];

/// Apply the schema to `db` if it is not already present. Idempotent.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = format!("{:?}", db.get_database_backend());
    tracing::info!(backend = %backend, "applying schema (create-if-missing)");

    let manager = SchemaManager::new(db);
    let result = async {
        tables::create_enum_types(&manager).await?;
        tables::create_tables(&manager).await?;
        tables::create_indexes(&manager).await
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!(backend = %backend, tables = TABLES.len(), "schema ready");
            Ok(())
        }
        Err(e) => {
            tracing::error!(backend = %backend, error = %e, "schema apply failed");
            Err(e)
        }
    }
}

/// Names from [`TABLES`] that do not exist in the connected database.
pub async fn missing_tables(db: &DatabaseConnection) -> Result<Vec<&'static str>, DbErr> {
    let backend = db.get_database_backend();
    let mut missing = Vec::new();

    for table in TABLES {
        let stmt = match backend {
            DatabaseBackend::Postgres => Statement::from_sql_and_values(
                backend,
                "SELECT 1 FROM information_schema.tables \
                 WHERE table_schema = current_schema() AND table_name = $1",
                [table.into()],
            ),
            DatabaseBackend::Sqlite => Statement::from_sql_and_values(
                backend,
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table.into()],
            ),
            _ => return Err(DbErr::Custom("Unsupported database backend".into())),
        };

        if db.query_one(stmt).await?.is_none() {
            missing.push(table);
        }
    }

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    use super::*;

    // One pinned connection, otherwise each pooled connection sees its own empty database.
    async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opts)
            .await
            .expect("connect to sqlite memory")
    }

    #[tokio::test]
    async fn fresh_database_reports_every_table_missing() {
        let db = memory_db().await;
        let missing = missing_tables(&db).await.unwrap();
        assert_eq!(missing, TABLES.to_vec());
    }

    #[tokio::test]
    async fn ensure_schema_creates_all_tables() {
        let db = memory_db().await;
        ensure_schema(&db).await.unwrap();
        assert!(missing_tables(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let db = memory_db().await;
        ensure_schema(&db).await.unwrap();
        ensure_schema(&db).await.unwrap();
        assert!(missing_tables(&db).await.unwrap().is_empty());
    }
}
