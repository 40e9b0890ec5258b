#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod test_support;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::{DbConfig, DbKind};
pub use config::server::ServerConfig;
pub use db::require_db;
pub use db::txn::with_txn;
pub use error::AppError;
pub use infra::db::{connect_db, probe_db};
pub use infra::lifecycle::{shutdown, Phase};
pub use infra::state::{bootstrap_db, build_state};
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
