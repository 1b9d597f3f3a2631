//! Storage port — the embedded store holding the `users` collection.
//!
//! A [`UserStore`] hands out short-lived [`UserConnection`]s. Each connection
//! is one self-contained session against the backing file: it is opened for a
//! single logical operation and released with [`UserConnection::close`].

use std::future::Future;

use userhub_domain::error::UserHubError;
use userhub_domain::id::UserId;
use userhub_domain::user::User;

/// Opens connections to the backing store.
pub trait UserStore {
    /// Connection type produced by [`open`](Self::open).
    type Connection: UserConnection + Send;

    /// Establish a handle to the backing file, creating it if absent.
    ///
    /// Fails with [`UserHubError::StoreUnavailable`] when the file cannot be
    /// created or opened, including when another holder keeps it locked.
    fn open(&self) -> impl Future<Output = Result<Self::Connection, UserHubError>> + Send;
}

/// One open session on the `users` collection.
pub trait UserConnection: Sized {
    /// Every record in the collection, in store-defined order.
    ///
    /// An empty collection yields an empty `Vec`, not an error.
    fn list_all(&mut self) -> impl Future<Output = Result<Vec<User>, UserHubError>> + Send;

    /// The record carrying `id`, or [`UserHubError::NotFound`].
    fn find_by_id(&mut self, id: UserId)
    -> impl Future<Output = Result<User, UserHubError>> + Send;

    /// Write `user` keyed by its id, overwriting any record with the same id.
    fn upsert(&mut self, user: &User) -> impl Future<Output = Result<(), UserHubError>> + Send;

    /// Remove the record equal to `user`.
    ///
    /// Fails with [`UserHubError::NotFound`] when no stored record matches.
    fn delete_record(
        &mut self,
        user: &User,
    ) -> impl Future<Output = Result<(), UserHubError>> + Send;

    /// Release the handle. Consumes the connection.
    fn close(self) -> impl Future<Output = Result<(), UserHubError>> + Send;
}
