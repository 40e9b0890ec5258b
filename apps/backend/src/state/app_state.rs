use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool; `None` only when the state was built without a database
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState owning the given connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (routes that never touch the store)
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Hand the pool back for an explicit close during shutdown.
    pub fn into_db(self) -> Option<DatabaseConnection> {
        self.db
    }
}
