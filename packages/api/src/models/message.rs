//! Messages ("warbles") and the joined rows used to render feeds.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::error::{Error, Result};

/// Longest message text accepted, in characters.
pub const MAX_MESSAGE_LEN: usize = 140;

/// A row from the `messages` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Message {
    pub id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}

/// A message joined with the fields of its author needed to render it.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FeedMessage {
    pub id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub username: String,
    pub image_url: String,
}

const FEED_COLUMNS: &str = "m.id, m.text, m.timestamp, m.user_id, u.username, u.image_url";

impl Message {
    /// Trim `text` and check it is between 1 and [`MAX_MESSAGE_LEN`] characters.
    pub fn validate_text(text: &str) -> Result<&str> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidMessage("message text is required".into()));
        }
        let len = text.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(Error::InvalidMessage(format!(
                "message is {len} characters, the limit is {MAX_MESSAGE_LEN}"
            )));
        }
        Ok(text)
    }

    /// Post a message for `user_id`, stamped with the current UTC time.
    pub async fn create(pool: &SqlitePool, user_id: i64, text: &str) -> Result<Message> {
        let text = Self::validate_text(text)?;
        Ok(sqlx::query_as(
            "INSERT INTO messages (text, timestamp, user_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(text)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_one(pool)
        .await?)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Message>> {
        Ok(sqlx::query_as("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn find_with_author(pool: &SqlitePool, id: i64) -> Result<Option<FeedMessage>> {
        Ok(sqlx::query_as(&format!(
            "SELECT {FEED_COLUMNS} FROM messages m JOIN users u ON u.id = m.user_id WHERE m.id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    /// Delete a message and its likes. Returns whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Messages written by `user_id`, newest first.
    pub async fn by_author(pool: &SqlitePool, user_id: i64, limit: i64) -> Result<Vec<FeedMessage>> {
        Ok(sqlx::query_as(&format!(
            r#"
            SELECT {FEED_COLUMNS} FROM messages m
            JOIN users u ON u.id = m.user_id
            WHERE m.user_id = ?
            ORDER BY m.timestamp DESC, m.id DESC
            LIMIT ?
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?)
    }

    /// The home timeline of `user_id`: their own messages and those of everyone they
    /// follow, newest first.
    pub async fn timeline(pool: &SqlitePool, user_id: i64, limit: i64) -> Result<Vec<FeedMessage>> {
        Ok(sqlx::query_as(&format!(
            r#"
            SELECT {FEED_COLUMNS} FROM messages m
            JOIN users u ON u.id = m.user_id
            WHERE m.user_id = ?1
               OR m.user_id IN (
                   SELECT user_being_followed_id FROM follows WHERE user_following_id = ?1
               )
            ORDER BY m.timestamp DESC, m.id DESC
            LIMIT ?2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?)
    }

    /// Messages liked by `user_id`, most recently liked first.
    pub async fn liked_by(pool: &SqlitePool, user_id: i64) -> Result<Vec<FeedMessage>> {
        Ok(sqlx::query_as(&format!(
            r#"
            SELECT {FEED_COLUMNS} FROM messages m
            JOIN users u ON u.id = m.user_id
            JOIN likes l ON l.message_id = m.id
            WHERE l.user_id = ?
            ORDER BY l.id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::fresh_pool;
    use crate::{Likes, User};

    #[tokio::test]
    async fn message_belongs_to_user() {
        let (_dir, pool) = fresh_pool().await;
        let user = User::signup(&pool, "testing", "testing@test.com", "password", None)
            .await
            .unwrap();

        Message::create(&pool, user.id, "a warble").await.unwrap();

        let messages = user.messages(&pool).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "a warble");
        assert_eq!(messages[0].user_id, user.id);
    }

    #[tokio::test]
    async fn message_likes() {
        let (_dir, pool) = fresh_pool().await;
        let author = User::signup(&pool, "testing", "testing@test.com", "password", None)
            .await
            .unwrap();
        let msg1 = Message::create(&pool, author.id, "a warble").await.unwrap();
        Message::create(&pool, author.id, "a very interesting warble")
            .await
            .unwrap();
        let fan = User::signup(&pool, "yetanothertest", "t@email.com", "password", None)
            .await
            .unwrap();

        Likes::create(&pool, fan.id, msg1.id).await.unwrap();

        let likes = Likes::for_user(&pool, fan.id).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].message_id, msg1.id);
        assert_eq!(fan.likes(&pool).await.unwrap()[0].id, msg1.id);
    }

    #[tokio::test]
    async fn create_rejects_blank_and_long_text() {
        let (_dir, pool) = fresh_pool().await;
        let user = User::signup(&pool, "testing", "testing@test.com", "password", None)
            .await
            .unwrap();

        assert!(matches!(
            Message::create(&pool, user.id, "   ").await,
            Err(Error::InvalidMessage(_))
        ));
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert!(matches!(
            Message::create(&pool, user.id, &long).await,
            Err(Error::InvalidMessage(_))
        ));

        let exact = "é".repeat(MAX_MESSAGE_LEN);
        let msg = Message::create(&pool, user.id, &exact).await.unwrap();
        assert_eq!(msg.text, exact);
    }

    #[tokio::test]
    async fn message_requires_existing_user() {
        let (_dir, pool) = fresh_pool().await;
        let err = Message::create(&pool, 4242, "orphan").await.unwrap_err();
        assert!(err.is_integrity());
    }

    #[tokio::test]
    async fn timeline_contains_self_and_followed_only() {
        let (_dir, pool) = fresh_pool().await;
        let me = User::signup(&pool, "me", "me@test.com", "password", None).await.unwrap();
        let friend = User::signup(&pool, "friend", "f@test.com", "password", None)
            .await
            .unwrap();
        let stranger = User::signup(&pool, "stranger", "s@test.com", "password", None)
            .await
            .unwrap();
        me.follow(&pool, friend.id).await.unwrap();

        Message::create(&pool, me.id, "mine").await.unwrap();
        Message::create(&pool, friend.id, "theirs").await.unwrap();
        Message::create(&pool, stranger.id, "nobody's").await.unwrap();

        let feed = Message::timeline(&pool, me.id, 100).await.unwrap();
        let texts: Vec<_> = feed.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["theirs", "mine"]);
        assert_eq!(feed[0].username, "friend");

        assert_eq!(Message::timeline(&pool, me.id, 1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_likes() {
        let (_dir, pool) = fresh_pool().await;
        let author = User::signup(&pool, "author", "a@test.com", "password", None)
            .await
            .unwrap();
        let fan = User::signup(&pool, "fan", "f@test.com", "password", None)
            .await
            .unwrap();
        let msg = Message::create(&pool, author.id, "short lived").await.unwrap();
        Likes::create(&pool, fan.id, msg.id).await.unwrap();

        assert!(Message::delete(&pool, msg.id).await.unwrap());
        assert!(!Message::delete(&pool, msg.id).await.unwrap());
        assert_eq!(Likes::count(&pool).await.unwrap(), 0);
        assert!(Message::find_with_author(&pool, msg.id).await.unwrap().is_none());
    }
}
