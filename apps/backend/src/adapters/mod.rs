//! SeaORM adapters, one per table.
//!
//! Thin insert / find / update wrappers. Every function is generic over
//! `ConnectionTrait`, so it runs on a pooled connection or inside a
//! transaction. Store errors come back as `sea_orm::DbErr` untranslated:
//! check, unique and foreign-key violations are the database's own.

pub mod answers_sea;
pub mod marks_sea;
pub mod modules_sea;
pub mod questions_sea;
pub mod study_manuals_sea;
pub mod users_sea;
