//! Shared helpers for the backend's integration tests: one-time logging
//! setup and collision-free test data.

pub mod logging;
pub mod unique_helpers;
