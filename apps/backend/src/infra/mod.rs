//! Infrastructure layer - connection pool, schema bootstrap, and process lifecycle.

pub mod db;
pub mod lifecycle;
pub mod state;
