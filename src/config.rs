//! Database connection configuration
//!
//! Connection parameters are read once at startup from the environment,
//! with a `.env` file honored if present: `host`, `user`, `password`,
//! `database`, and an optional `port`.

use crate::error::{BenchError, Result};
use sqlx::mysql::MySqlConnectOptions;
use std::env;

const DEFAULT_PORT: u16 = 3306;

/// Connection parameters for the target MySQL instance
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Load configuration from the environment, reading `.env` first.
    pub fn from_env() -> Result<Self> {
        // Existing process environment wins over .env entries.
        dotenvy::dotenv().ok();

        let port = match env::var("port") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| BenchError::Config(format!("invalid port value: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: require("host")?,
            port,
            user: require("user")?,
            password: require("password")?,
            database: require("database")?,
        })
    }

    /// Connection options for sqlx
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| BenchError::Config(format!("missing environment variable: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_named_in_error() {
        let err = require("optbench_no_such_variable").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("optbench_no_such_variable"), "got: {msg}");
    }
}
