//! The `likes` join table: which user marked which message as a favorite.

use sqlx::{FromRow, SqlitePool};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Likes {
    pub id: i64,
    pub user_id: i64,
    pub message_id: i64,
}

impl Likes {
    /// Insert a like. Liking the same message twice is an integrity error.
    pub async fn create(pool: &SqlitePool, user_id: i64, message_id: i64) -> Result<Likes> {
        Ok(
            sqlx::query_as("INSERT INTO likes (user_id, message_id) VALUES (?, ?) RETURNING *")
                .bind(user_id)
                .bind(message_id)
                .fetch_one(pool)
                .await?,
        )
    }

    pub async fn delete(pool: &SqlitePool, user_id: i64, message_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = ? AND message_id = ?")
            .bind(user_id)
            .bind(message_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip the like for `(user_id, message_id)`. Returns `true` when the message is
    /// liked afterwards.
    pub async fn toggle(pool: &SqlitePool, user_id: i64, message_id: i64) -> Result<bool> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM likes WHERE user_id = ? AND message_id = ?")
            .bind(user_id)
            .bind(message_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            sqlx::query("INSERT INTO likes (user_id, message_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(message_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(removed == 0)
    }

    pub async fn for_message(pool: &SqlitePool, message_id: i64) -> Result<Vec<Likes>> {
        Ok(sqlx::query_as("SELECT * FROM likes WHERE message_id = ? ORDER BY id")
            .bind(message_id)
            .fetch_all(pool)
            .await?)
    }

    pub async fn for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Likes>> {
        Ok(sqlx::query_as("SELECT * FROM likes WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(pool)
            .await?)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM likes")
            .fetch_one(pool)
            .await?)
    }
}
