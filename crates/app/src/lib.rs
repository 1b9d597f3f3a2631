//! # userhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **store port** that persistence adapters must implement:
//!   - `UserStore` — opens a fresh connection to the backing store
//!   - `UserConnection` — list, lookup, upsert, delete, close
//! - Define the **user repository** use-case (`All`, `One`, `Save`, `Delete`),
//!   which opens and closes one connection per call
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `userhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
