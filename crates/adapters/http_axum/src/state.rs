//! Shared application state for axum handlers.

use std::sync::Arc;

use userhub_app::ports::UserStore;
use userhub_app::services::user_repository::UserRepository;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// User CRUD use-cases.
    pub user_repository: Arc<UserRepository<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
        }
    }
}

impl<S> AppState<S>
where
    S: UserStore + Send + Sync + 'static,
{
    /// Create a new application state from a repository instance.
    pub fn new(user_repository: UserRepository<S>) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
        }
    }
}
