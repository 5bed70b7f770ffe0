// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub db_max_connections: u32,
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://trivia.db?mode=rwc".to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            db_max_connections: 5,
            seed_categories: true,
        }
    }
}

impl Config {
    /// Reads the configuration from the environment (and `.env`, if present).
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: parse_var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            seed_categories: parse_var("SEED_CATEGORIES").unwrap_or(defaults.seed_categories),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}
