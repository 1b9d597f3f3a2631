//! `SQLite` store setup and per-operation connection opening.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

use userhub_app::ports::UserStore;
use userhub_domain::error::UserHubError;

use crate::connection::SqliteUserConnection;
use crate::error::StorageError;

/// File used when no path is configured.
pub const DEFAULT_PATH: &str = "users.db";

/// Configuration for the `SQLite` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the database file. Created on first use.
    pub path: PathBuf,
    /// How long an operation waits on a lock held elsewhere before failing.
    /// `None` keeps the sqlx default.
    pub busy_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl Config {
    /// Configuration for the file at `path` with the default busy timeout.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: None,
        }
    }

    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }

    /// Build a [`SqliteUserStore`] from this configuration.
    ///
    /// Creates the database file if missing and bootstraps the `users`
    /// collection, then releases the connection used to do so.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be opened or the schema
    /// cannot be applied.
    pub async fn build(self) -> Result<SqliteUserStore, StorageError> {
        let mut options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);
        if let Some(timeout) = self.busy_timeout {
            options = options.busy_timeout(timeout);
        }
        SqliteUserStore::initialize(options).await
    }
}

/// Store handing out one fresh `SQLite` connection per [`open`](UserStore::open).
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    options: SqliteConnectOptions,
}

impl SqliteUserStore {
    async fn initialize(options: SqliteConnectOptions) -> Result<Self, StorageError> {
        let mut conn = options.connect().await?;
        let migrated = sqlx::migrate!("./migrations").run(&mut conn).await;
        conn.close().await?;
        migrated?;

        tracing::info!(path = %options.get_filename().display(), "user store ready");
        Ok(Self { options })
    }

    /// Path of the backing database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.options.get_filename()
    }
}

impl UserStore for SqliteUserStore {
    type Connection = SqliteUserConnection;

    fn open(&self) -> impl Future<Output = Result<SqliteUserConnection, UserHubError>> + Send {
        let options = self.options.clone();
        async move {
            let conn = options.connect().await.map_err(|err| {
                tracing::error!(error = %err, "failed to open user store");
                StorageError::from(err)
            })?;
            tracing::trace!("opened store connection");
            Ok(SqliteUserConnection::new(conn))
        }
    }
}
