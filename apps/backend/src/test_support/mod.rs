//! Helpers for integration tests: a ready-to-use in-memory state and an
//! initialized actix test service wired like production.

pub mod app_builder;
pub mod state_builder;

pub use app_builder::create_test_app;
pub use state_builder::{memory_db_config, memory_state};
