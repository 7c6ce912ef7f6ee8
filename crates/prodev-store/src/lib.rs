//! # prodev-store
//!
//! SQLite-backed storage for the `user_data` table:
//!
//! - [`Database`]: thread-safe connection wrapper with schema setup
//! - [`csv`]: minimal CSV reading for the `user_id,name,email,age` layout
//! - [`record::UserRecord`]: validated row type (UUID id, age 0–150)
//! - [`seed`]: idempotent CSV → table loading with skip-and-continue
//!   validation
//! - [`stream`]: lazy pagination and row-at-a-time iteration over the
//!   seeded table

#![deny(unsafe_code)]

pub mod csv;
pub mod database;
pub mod error;
pub mod record;
pub mod schema;
pub mod seed;
pub mod stream;

pub use database::Database;
pub use error::{Result, StoreError};
pub use record::{MAX_AGE, MIN_AGE, RowError, UserRecord};
pub use seed::{SeedReport, SetupStatus, seed_from_csv, validate_setup};
