//! # userhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the store port traits defined in `userhub-app::ports::storage`
//! - Own the path of the single database file, injected through [`Config`]
//! - Bootstrap the `users` collection (sqlx embedded migrations)
//! - Open one connection per logical operation; no pool is kept
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `userhub-app` (for port traits) and `userhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod connection;
pub mod error;
pub mod store;

pub use connection::SqliteUserConnection;
pub use error::StorageError;
pub use store::{Config, SqliteUserStore};
