//! Error types for the Warbler data layer.

use thiserror::Error;

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for model operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Password was empty; raised before any database access.
    #[error("Password must not be empty")]
    InvalidPassword,

    /// Message text failed validation.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// A unique, not-null, check or foreign key constraint rejected the write.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Hashing or parsing a password hash failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Schema migration failed.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl Error {
    /// Whether this error came from a violated table constraint.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Error::Integrity(_))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation => {
                    return Error::Integrity(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Error::Database(err)
    }
}
