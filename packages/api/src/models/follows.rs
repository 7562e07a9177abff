//! The `follows` join table: one row per directed "A follows B" edge.

use sqlx::{FromRow, SqlitePool};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Follows {
    pub user_being_followed_id: i64,
    pub user_following_id: i64,
}

impl Follows {
    /// Record that `user_following_id` follows `user_being_followed_id`.
    ///
    /// Inserting an edge that already exists is an integrity error.
    pub async fn create(
        pool: &SqlitePool,
        user_being_followed_id: i64,
        user_following_id: i64,
    ) -> Result<Follows> {
        Ok(sqlx::query_as(
            "INSERT INTO follows (user_being_followed_id, user_following_id) VALUES (?, ?) RETURNING *",
        )
        .bind(user_being_followed_id)
        .bind(user_following_id)
        .fetch_one(pool)
        .await?)
    }

    pub async fn delete(
        pool: &SqlitePool,
        user_being_followed_id: i64,
        user_following_id: i64,
    ) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM follows WHERE user_being_followed_id = ? AND user_following_id = ?",
        )
        .bind(user_being_followed_id)
        .bind(user_following_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(
        pool: &SqlitePool,
        user_being_followed_id: i64,
        user_following_id: i64,
    ) -> Result<bool> {
        Ok(sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM follows
                WHERE user_being_followed_id = ? AND user_following_id = ?
            )
            "#,
        )
        .bind(user_being_followed_id)
        .bind(user_following_id)
        .fetch_one(pool)
        .await?)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM follows")
            .fetch_one(pool)
            .await?)
    }
}
