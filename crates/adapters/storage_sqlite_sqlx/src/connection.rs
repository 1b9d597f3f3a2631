//! `SQLite` implementation of [`UserConnection`] over the `users` table.

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, FromRow, Row, SqliteConnection};

use userhub_app::ports::UserConnection;
use userhub_domain::error::{NotFoundError, UserHubError};
use userhub_domain::id::UserId;
use userhub_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let role: Option<String> = row.try_get("role")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(User { id, name, role }))
    }
}

const SELECT_ALL: &str = "SELECT id, name, role FROM users";
const SELECT_BY_ID: &str = "SELECT id, name, role FROM users WHERE id = ?";
const UPSERT: &str = "INSERT INTO users (id, name, role) VALUES (?, ?, ?) \
     ON CONFLICT(id) DO UPDATE SET name = excluded.name, role = excluded.role";
const DELETE_RECORD: &str = "DELETE FROM users WHERE id = ? AND name = ? AND role IS ?";

fn not_found(id: UserId) -> UserHubError {
    NotFoundError {
        entity: "User",
        id: id.to_string(),
    }
    .into()
}

/// A single open connection to the user store file.
pub struct SqliteUserConnection {
    conn: SqliteConnection,
}

impl SqliteUserConnection {
    pub(crate) fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }
}

impl UserConnection for SqliteUserConnection {
    async fn list_all(&mut self) -> Result<Vec<User>, UserHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&mut self.conn)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_id(&mut self, id: UserId) -> Result<User, UserHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&mut self.conn)
            .await
            .map_err(StorageError::from)?;

        row.map(|w| w.0).ok_or_else(|| not_found(id))
    }

    async fn upsert(&mut self, user: &User) -> Result<(), UserHubError> {
        sqlx::query(UPSERT)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(user.role.as_deref())
            .execute(&mut self.conn)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn delete_record(&mut self, user: &User) -> Result<(), UserHubError> {
        let result = sqlx::query(DELETE_RECORD)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(user.role.as_deref())
            .execute(&mut self.conn)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(user.id));
        }
        Ok(())
    }

    async fn close(self) -> Result<(), UserHubError> {
        self.conn.close().await.map_err(StorageError::from)?;
        tracing::trace!("closed store connection");
        Ok(())
    }
}
