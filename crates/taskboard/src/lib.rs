//! Shared vocabulary for the taskboard schema.
//!
//! Row models, the task enums, password hashing and a small read-only
//! query layer. The web application and the seed tooling both build on
//! these types so that what gets written matches what gets read.

pub mod auth;
pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::AppError;
