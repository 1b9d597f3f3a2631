//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`UserHubError`]
//! via `From`. Adapters box their source errors into
//! [`UserHubError::StoreUnavailable`] so the domain never names an IO crate.

/// Top-level error returned by every user operation.
#[derive(Debug, thiserror::Error)]
pub enum UserHubError {
    /// The record failed validation and was not persisted.
    #[error("record is invalid")]
    RecordInvalid(#[from] ValidationError),

    /// No record matches the requested identifier.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store could not be opened, queried, or released.
    #[error("store unavailable")]
    StoreUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a record or request value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid identifier: {value}")]
    InvalidId { value: String },
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
