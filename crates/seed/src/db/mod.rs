//! Database integration for seeding.
//!
//! The [`Seeder`] writes a [`SeedData`](crate::dataset::SeedData) set with
//! insert-if-absent statements and reads every row back, so callers see
//! what is actually stored.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeded, Seeder};
