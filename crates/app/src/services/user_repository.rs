//! User repository — use-cases for reading and writing users.
//!
//! Every operation opens its own connection through the [`UserStore`] port and
//! closes it before returning, whatever the outcome. Nothing is cached between
//! calls, so the repository itself carries no mutable state and can be shared
//! freely across request handlers.

use userhub_domain::error::UserHubError;
use userhub_domain::id::UserId;
use userhub_domain::user::User;

use crate::ports::{UserConnection, UserStore};

/// Application service mapping user operations onto store connections.
pub struct UserRepository<S> {
    store: S,
}

impl<S: UserStore + Sync> UserRepository<S> {
    /// Create a new repository backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every stored user.
    ///
    /// # Errors
    ///
    /// Returns [`UserHubError::StoreUnavailable`] if the store cannot be
    /// opened, read, or closed.
    pub async fn all(&self) -> Result<Vec<User>, UserHubError> {
        tracing::debug!("listing users");
        let mut conn = self.store.open().await?;
        let result = conn.list_all().await;
        release(conn, result).await
    }

    /// Look up a single user by id.
    ///
    /// # Errors
    ///
    /// Returns [`UserHubError::NotFound`] when no user carries `id`, or
    /// [`UserHubError::StoreUnavailable`] on store failure.
    pub async fn one(&self, id: UserId) -> Result<User, UserHubError> {
        tracing::debug!(user_id = %id, "fetching user");
        let mut conn = self.store.open().await?;
        let result = conn.find_by_id(id).await;
        release(conn, result).await
    }

    /// Delete a user by id.
    ///
    /// The record is resolved first since the store removes full values.
    ///
    /// # Errors
    ///
    /// Returns [`UserHubError::NotFound`] when `id` does not resolve, or
    /// [`UserHubError::StoreUnavailable`] on store failure.
    pub async fn delete(&self, id: UserId) -> Result<(), UserHubError> {
        tracing::debug!(user_id = %id, "deleting user");
        let mut conn = self.store.open().await?;
        let result = match conn.find_by_id(id).await {
            Ok(user) => conn.delete_record(&user).await,
            Err(err) => Err(err),
        };
        release(conn, result).await
    }

    /// Create or overwrite a user, returning the persisted value.
    ///
    /// The record is validated before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns [`UserHubError::RecordInvalid`] if the name is empty, or
    /// [`UserHubError::StoreUnavailable`] on store failure.
    pub async fn save(&self, user: User) -> Result<User, UserHubError> {
        user.validate()?;
        tracing::debug!(user_id = %user.id, "saving user");
        let mut conn = self.store.open().await?;
        let result = conn.upsert(&user).await;
        release(conn, result).await.map(|()| user)
    }
}

/// Close `conn` and combine the outcome with the operation's result.
///
/// An operation failure takes precedence over a close failure.
async fn release<C, T>(conn: C, result: Result<T, UserHubError>) -> Result<T, UserHubError>
where
    C: UserConnection,
{
    let closed = conn.close().await;
    if let Err(err) = &closed {
        tracing::warn!(error = %err, "failed to close store connection");
    }
    let value = result?;
    closed?;
    Ok(value)
}
