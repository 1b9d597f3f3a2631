//! # userhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the root route (`GET /` → `Running API v1`) and the plain-text
//!   `404` for any unknown path
//! - Serve a **JSON API** over users (`/api/users`, `/api/users/{id}`)
//! - Map HTTP requests into user repository calls (driving adapter)
//! - Map repository results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `userhub-app` (for port traits and services) and `userhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
