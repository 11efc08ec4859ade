//! Development seed data for taskboard.
//!
//! Ensures the fixed roles, demo users, default project and its starter
//! tasks exist. Every write is insert-if-absent on a fixed key, so running
//! the seeder against an already seeded database changes nothing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let pool = config.connect().await?;
//! let report = Seeder::new(pool)
//!     .with_hash_cost(config.hash_cost)
//!     .run(&DEFAULT_SEED)
//!     .await?;
//! ```

pub mod config;
pub mod dataset;
pub mod db;

pub use taskboard::models::{EffortLevel, TaskStatus};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::dataset::{
        DEFAULT_SEED, ProjectSeed, RoleSeed, SeedData, TaskSeed, UserSeed,
    };
    pub use crate::db::{SeedError, SeedReport, Seeded, Seeder};
    pub use crate::{EffortLevel, TaskStatus};
}
