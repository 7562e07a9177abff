//! # User model
//!
//! Defines the two representations of a Warbler user:
//!
//! ## [`User`]
//!
//! The complete row from the `users` table, including the Argon2 `password` hash. It
//! derives [`sqlx::FromRow`] so it can be loaded straight from `SELECT *` queries. Its
//! methods cover signup, authentication and every relationship collection:
//!
//! - `following` / `followers`: read through the `follows` join table, in either
//!   direction of the edge.
//! - `messages`: the user's own messages, newest first.
//! - `likes`: messages the user has liked, read through the `likes` join table.
//!
//! ## [`UserInfo`]
//!
//! A projection without the password hash. This is what the view layer receives, so a
//! page can never render the hash by accident.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::{Follows, Message};
use crate::auth::{hash_password, verify_password};
use crate::error::{Error, Result};

/// Profile picture used when a user does not provide one.
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.svg";

/// Header image used when a user does not provide one.
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.svg";

/// Full user record from the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Argon2id PHC string.
    pub password: String,
}

/// User information safe to hand to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Counts shown on a profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct UserStats {
    pub messages: i64,
    pub following: i64,
    pub followers: i64,
    pub likes: i64,
}

/// Editable profile fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl User {
    /// Sign up a user: hash the password and insert the row.
    ///
    /// An empty password is rejected before the database is touched. Empty or already
    /// taken usernames and emails are rejected by the table constraints and come back as
    /// [`Error::Integrity`].
    pub async fn signup(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password: &str,
        image_url: Option<&str>,
    ) -> Result<User> {
        if password.is_empty() {
            return Err(Error::InvalidPassword);
        }

        let hashed = hash_password(password)?;
        let image_url = non_blank(image_url).unwrap_or(DEFAULT_IMAGE_URL);

        let user = sqlx::query_as(
            "INSERT INTO users (username, email, password, image_url) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(username)
        .bind(email)
        .bind(&hashed)
        .bind(image_url)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find a user with `username` whose password hash matches `password`.
    ///
    /// Returns `Ok(None)` for an unknown username as well as a wrong password.
    pub async fn authenticate(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        if verify_password(password, &user.password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
        Ok(sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// All users whose username contains `query`, or every user when there is no query.
    ///
    /// The match is a plain substring test, so `%` and `_` in the query are literal.
    pub async fn search(pool: &SqlitePool, query: Option<&str>) -> Result<Vec<User>> {
        let users = match non_blank(query) {
            Some(term) => {
                sqlx::query_as("SELECT * FROM users WHERE instr(username, ?) > 0 ORDER BY id")
                    .bind(term)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM users ORDER BY id")
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(users)
    }

    /// Users this user follows.
    pub async fn following(&self, pool: &SqlitePool) -> Result<Vec<User>> {
        Ok(sqlx::query_as(
            r#"
            SELECT u.* FROM users u
            JOIN follows f ON f.user_being_followed_id = u.id
            WHERE f.user_following_id = ?
            ORDER BY u.id
            "#,
        )
        .bind(self.id)
        .fetch_all(pool)
        .await?)
    }

    /// Users following this user.
    pub async fn followers(&self, pool: &SqlitePool) -> Result<Vec<User>> {
        Ok(sqlx::query_as(
            r#"
            SELECT u.* FROM users u
            JOIN follows f ON f.user_following_id = u.id
            WHERE f.user_being_followed_id = ?
            ORDER BY u.id
            "#,
        )
        .bind(self.id)
        .fetch_all(pool)
        .await?)
    }

    /// Is this user following `other_id`?
    pub async fn is_following(&self, pool: &SqlitePool, other_id: i64) -> Result<bool> {
        Follows::exists(pool, other_id, self.id).await
    }

    /// Is this user followed by `other_id`?
    pub async fn is_followed_by(&self, pool: &SqlitePool, other_id: i64) -> Result<bool> {
        Follows::exists(pool, self.id, other_id).await
    }

    /// Start following `other_id`. Following someone twice is a no-op.
    pub async fn follow(&self, pool: &SqlitePool, other_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (user_being_followed_id, user_following_id)
            VALUES (?, ?)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(other_id)
        .bind(self.id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Stop following `other_id`.
    pub async fn unfollow(&self, pool: &SqlitePool, other_id: i64) -> Result<bool> {
        Follows::delete(pool, other_id, self.id).await
    }

    /// This user's messages, newest first.
    pub async fn messages(&self, pool: &SqlitePool) -> Result<Vec<Message>> {
        Ok(sqlx::query_as(
            "SELECT * FROM messages WHERE user_id = ? ORDER BY timestamp DESC, id DESC",
        )
        .bind(self.id)
        .fetch_all(pool)
        .await?)
    }

    /// Messages this user has liked, in the order they were liked.
    pub async fn likes(&self, pool: &SqlitePool) -> Result<Vec<Message>> {
        Ok(sqlx::query_as(
            r#"
            SELECT m.* FROM messages m
            JOIN likes l ON l.message_id = m.id
            WHERE l.user_id = ?
            ORDER BY l.id
            "#,
        )
        .bind(self.id)
        .fetch_all(pool)
        .await?)
    }

    /// Ids of the messages this user has liked.
    pub async fn liked_message_ids(&self, pool: &SqlitePool) -> Result<Vec<i64>> {
        Ok(sqlx::query_scalar("SELECT message_id FROM likes WHERE user_id = ? ORDER BY id")
            .bind(self.id)
            .fetch_all(pool)
            .await?)
    }

    pub async fn stats(&self, pool: &SqlitePool) -> Result<UserStats> {
        Ok(sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM messages WHERE user_id = ?1) AS messages,
                (SELECT COUNT(*) FROM follows WHERE user_following_id = ?1) AS following,
                (SELECT COUNT(*) FROM follows WHERE user_being_followed_id = ?1) AS followers,
                (SELECT COUNT(*) FROM likes WHERE user_id = ?1) AS likes
            "#,
        )
        .bind(self.id)
        .fetch_one(pool)
        .await?)
    }

    /// Overwrite the editable profile fields. Blank image URLs fall back to the defaults.
    pub async fn update_profile(&self, pool: &SqlitePool, update: &ProfileUpdate) -> Result<User> {
        let image_url = non_blank(update.image_url.as_deref()).unwrap_or(DEFAULT_IMAGE_URL);
        let header_image_url = non_blank(update.header_image_url.as_deref())
            .unwrap_or(DEFAULT_HEADER_IMAGE_URL);

        Ok(sqlx::query_as(
            r#"
            UPDATE users
            SET username = ?, email = ?, image_url = ?, header_image_url = ?, bio = ?, location = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&update.username)
        .bind(&update.email)
        .bind(image_url)
        .bind(header_image_url)
        .bind(non_blank(update.bio.as_deref()))
        .bind(non_blank(update.location.as_deref()))
        .bind(self.id)
        .fetch_one(pool)
        .await?)
    }

    /// Delete the user. Messages, follows and likes go with it.
    pub async fn delete(&self, pool: &SqlitePool) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(self.id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Convert to UserInfo for rendering.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
            header_image_url: self.header_image_url.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::fresh_pool;

    async fn two_users(pool: &SqlitePool) -> (User, User) {
        let user1 = User::signup(pool, "test1", "email1@email.com", "password", None)
            .await
            .unwrap();
        let user2 = User::signup(pool, "test2", "email2@email.com", "password", None)
            .await
            .unwrap();
        (user1, user2)
    }

    #[tokio::test]
    async fn new_user_has_no_messages_or_followers() {
        let (_dir, pool) = fresh_pool().await;
        let user = User::signup(&pool, "testuser", "test@test.com", "HASHED_PASSWORD", None)
            .await
            .unwrap();

        assert!(user.messages(&pool).await.unwrap().is_empty());
        assert!(user.followers(&pool).await.unwrap().is_empty());
        assert_eq!(user.stats(&pool).await.unwrap(), UserStats::default());
    }

    #[tokio::test]
    async fn follow_is_directional() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, user2) = two_users(&pool).await;

        user1.follow(&pool, user2.id).await.unwrap();

        assert!(user2.following(&pool).await.unwrap().is_empty());
        assert_eq!(user2.followers(&pool).await.unwrap().len(), 1);
        assert!(user1.followers(&pool).await.unwrap().is_empty());
        assert_eq!(user1.following(&pool).await.unwrap().len(), 1);

        assert_eq!(user2.followers(&pool).await.unwrap()[0].id, user1.id);
        assert_eq!(user1.following(&pool).await.unwrap()[0].id, user2.id);
    }

    #[tokio::test]
    async fn is_following() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, user2) = two_users(&pool).await;
        user1.follow(&pool, user2.id).await.unwrap();

        assert!(user1.is_following(&pool, user2.id).await.unwrap());
        assert!(!user2.is_following(&pool, user1.id).await.unwrap());
    }

    #[tokio::test]
    async fn is_followed_by() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, user2) = two_users(&pool).await;
        user1.follow(&pool, user2.id).await.unwrap();

        assert!(!user1.is_followed_by(&pool, user2.id).await.unwrap());
        assert!(user2.is_followed_by(&pool, user1.id).await.unwrap());
    }

    #[tokio::test]
    async fn follow_twice_then_unfollow() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, user2) = two_users(&pool).await;

        user1.follow(&pool, user2.id).await.unwrap();
        user1.follow(&pool, user2.id).await.unwrap();
        assert_eq!(Follows::count(&pool).await.unwrap(), 1);

        assert!(user1.unfollow(&pool, user2.id).await.unwrap());
        assert!(!user1.unfollow(&pool, user2.id).await.unwrap());
        assert!(user1.following(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn valid_signup() {
        let (_dir, pool) = fresh_pool().await;
        let user = User::signup(&pool, "testtesttest", "testtest@test.com", "password", None)
            .await
            .unwrap();

        let user = User::find(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(user.username, "testtesttest");
        assert_eq!(user.email, "testtest@test.com");
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);
        assert_ne!(user.password, "password");
        assert!(user.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn empty_username_is_integrity_error() {
        let (_dir, pool) = fresh_pool().await;
        let err = User::signup(&pool, "", "test@test.com", "password", None)
            .await
            .unwrap_err();
        assert!(err.is_integrity(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn empty_email_is_integrity_error() {
        let (_dir, pool) = fresh_pool().await;
        let err = User::signup(&pool, "testtest", "", "password", None)
            .await
            .unwrap_err();
        assert!(err.is_integrity(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn duplicate_username_or_email_is_integrity_error() {
        let (_dir, pool) = fresh_pool().await;
        two_users(&pool).await;

        let err = User::signup(&pool, "test1", "other@email.com", "password", None)
            .await
            .unwrap_err();
        assert!(err.is_integrity());

        let err = User::signup(&pool, "other", "email2@email.com", "password", None)
            .await
            .unwrap_err();
        assert!(err.is_integrity());
    }

    #[tokio::test]
    async fn empty_password_fails_before_insert() {
        let (_dir, pool) = fresh_pool().await;
        let err = User::signup(&pool, "testtest", "email@email.com", "", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPassword));
        assert!(User::search(&pool, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn valid_authentication() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, _) = two_users(&pool).await;

        let user = User::authenticate(&pool, &user1.username, "password")
            .await
            .unwrap()
            .expect("credentials are valid");
        assert_eq!(user.id, user1.id);
    }

    #[tokio::test]
    async fn invalid_username() {
        let (_dir, pool) = fresh_pool().await;
        two_users(&pool).await;
        assert!(User::authenticate(&pool, "badusername", "password")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn wrong_password() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, _) = two_users(&pool).await;
        assert!(User::authenticate(&pool, &user1.username, "badpassword")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn search_matches_substring_literally() {
        let (_dir, pool) = fresh_pool().await;
        for (name, email) in [
            ("testuser", "a@test.com"),
            ("abc", "b@test.com"),
            ("testing", "c@test.com"),
            ("te%st", "d@test.com"),
        ] {
            User::signup(&pool, name, email, "password", None).await.unwrap();
        }

        let names = |users: Vec<User>| users.into_iter().map(|u| u.username).collect::<Vec<_>>();

        assert_eq!(
            names(User::search(&pool, Some("test")).await.unwrap()),
            vec!["testuser", "testing"]
        );
        assert_eq!(names(User::search(&pool, Some("%")).await.unwrap()), vec!["te%st"]);
        assert_eq!(User::search(&pool, Some("  ")).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_profile_and_collisions() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, user2) = two_users(&pool).await;

        let update = ProfileUpdate {
            username: "renamed".into(),
            email: user1.email.clone(),
            image_url: Some(String::new()),
            header_image_url: Some("/static/images/custom.jpg".into()),
            bio: Some("hello there".into()),
            location: Some("   ".into()),
        };
        let updated = user1.update_profile(&pool, &update).await.unwrap();
        assert_eq!(updated.username, "renamed");
        assert_eq!(updated.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(updated.header_image_url, "/static/images/custom.jpg");
        assert_eq!(updated.bio.as_deref(), Some("hello there"));
        assert_eq!(updated.location, None);
        assert_eq!(updated.password, user1.password);

        let clash = ProfileUpdate {
            username: user2.username.clone(),
            email: user1.email.clone(),
            ..Default::default()
        };
        assert!(user1.update_profile(&pool, &clash).await.unwrap_err().is_integrity());
    }

    #[tokio::test]
    async fn delete_cascades_to_relationships() {
        let (_dir, pool) = fresh_pool().await;
        let (user1, user2) = two_users(&pool).await;
        user1.follow(&pool, user2.id).await.unwrap();
        user2.follow(&pool, user1.id).await.unwrap();
        let msg = Message::create(&pool, user1.id, "going away").await.unwrap();
        crate::Likes::create(&pool, user2.id, msg.id).await.unwrap();

        user1.delete(&pool).await.unwrap();

        assert!(User::find(&pool, user1.id).await.unwrap().is_none());
        assert!(Message::find(&pool, msg.id).await.unwrap().is_none());
        assert_eq!(Follows::count(&pool).await.unwrap(), 0);
        assert_eq!(crate::Likes::count(&pool).await.unwrap(), 0);
        assert_eq!(user2.stats(&pool).await.unwrap(), UserStats::default());
    }

    #[test]
    fn info_has_no_password() {
        let user = User {
            id: 7,
            email: "e@x.com".into(),
            username: "seven".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.into(),
            bio: None,
            location: Some("Earth".into()),
            password: "$argon2id$secret".into(),
        };
        let info = user.to_info();
        assert_eq!(info.id, 7);
        assert_eq!(info.username, "seven");
        assert_eq!(info.location.as_deref(), Some("Earth"));
    }
}
