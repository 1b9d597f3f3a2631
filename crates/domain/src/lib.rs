//! # userhub-domain
//!
//! Pure domain model for the userhub service.
//!
//! ## Responsibilities
//! - Foundational types: the typed user identifier and the error taxonomy
//! - Define the **User** record (identity, display name, optional role)
//! - Contain the validation gate that guards persistence
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod user;
