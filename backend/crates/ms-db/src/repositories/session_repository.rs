use crate::error::Result as DbErrorResult;

use sqlx::{Row, SqlitePool};

/// `client_id` of frontend (site) sessions in the host CMS.
pub const FRONTEND_CLIENT_ID: i64 = 0;

/// Read access to host CMS sessions.
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// True when `username` has a non-guest frontend session active after
    /// `not_before` (unix seconds, exclusive).
    pub async fn has_active_frontend_session(
        &self,
        username: &str,
        not_before: i64,
    ) -> DbErrorResult<bool> {
        let row = sqlx::query(
            r#"
              SELECT COUNT(*) AS active
              FROM host_sessions
              WHERE username = ? COLLATE NOCASE
                AND guest = 0
                AND client_id = ?
                AND time > ?
              "#,
        )
        .bind(username)
        .bind(FRONTEND_CLIENT_ID)
        .bind(not_before)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get::<i64, _>("active") > 0)
    }
}
