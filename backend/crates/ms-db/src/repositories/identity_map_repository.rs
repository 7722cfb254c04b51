use crate::error::Result as DbErrorResult;

use ms_core::IdentityPair;

use chrono::Utc;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

/// Local user id to remote user id pairs.
pub struct IdentityMapRepository {
    pool: SqlitePool,
}

impl IdentityMapRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a pair. An existing pair for the same local id is replaced.
    pub async fn add(&self, pair: IdentityPair) -> DbErrorResult<()> {
        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO moodle_user_sync (local_user_id, remote_user_id, created_at)
              VALUES (?, ?, ?)
              ON CONFLICT(local_user_id) DO UPDATE SET
                  remote_user_id = excluded.remote_user_id,
                  created_at = excluded.created_at
              "#,
        )
        .bind(pair.local_user_id)
        .bind(pair.remote_user_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete the pairs for every given local id. Returns rows removed.
    pub async fn remove(&self, local_user_ids: &[i64]) -> DbErrorResult<u64> {
        if local_user_ids.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("DELETE FROM moodle_user_sync WHERE local_user_id IN (");
        let mut ids = builder.separated(", ");
        for id in local_user_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(")");

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    pub async fn lookup(&self, local_user_id: i64) -> DbErrorResult<Option<i64>> {
        let row = sqlx::query(
            r#"
              SELECT remote_user_id
              FROM moodle_user_sync
              WHERE local_user_id = ?
              "#,
        )
        .bind(local_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| row.get::<i64, _>("remote_user_id")))
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<IdentityPair>> {
        let rows = sqlx::query(
            r#"
              SELECT local_user_id, remote_user_id
              FROM moodle_user_sync
              ORDER BY local_user_id
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                IdentityPair::new(
                    row.get::<i64, _>("local_user_id"),
                    row.get::<i64, _>("remote_user_id"),
                )
            })
            .collect())
    }
}
