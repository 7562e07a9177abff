use std::env;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Database {
    /// SQLite URL, e.g. `sqlite://warbler.db`.
    pub url: String,
    pub connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://warbler.db".into(),
            connections: 5,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Session {
    /// Send the session cookie over HTTPS only.
    pub secure: bool,
    /// Hours of inactivity before a session expires.
    pub inactivity: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            inactivity: 24 * 7,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
}

impl Settings {
    /// Defaults, overridden by `warbler.toml`, overridden by the environment.
    ///
    /// Environment variables carry a `WARBLER_` prefix and split on `__`, so
    /// `WARBLER_SERVER__PORT` sets `server.port`. `DATABASE_URL` always wins for
    /// `database.url`.
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.url", "sqlite://warbler.db")?
            .set_default("database.connections", 5)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("session.secure", false)?
            .set_default("session.inactivity", 24 * 7)?
            .add_source(
                File::with_name("warbler.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("WARBLER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("DATABASE_URL", "sqlite://warbler-test.db");
        set_var("WARBLER_SERVER__PORT", "8123");
        set_var("WARBLER_SESSION__SECURE", "true");
        let settings = Settings::new().expect("settings");
        println!("Settings = {:?}", settings);
        assert_eq!(settings.database.url, "sqlite://warbler-test.db");
        assert_eq!(settings.database.connections, 5);
        assert_eq!(settings.server.address(), "127.0.0.1:8123");
        assert!(settings.session.secure);
    }
}
