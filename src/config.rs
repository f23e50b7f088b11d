use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

/// Listen port used when PORT is not set at all.
const DEFAULT_PORT: u16 = 9999;

/// Connection string used when DATABASE_URL is not configured.
const DEFAULT_DATABASE_URL: &str = "sqlite:ticks.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub host: String,
    pub static_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        // An absent PORT falls back to the default; a malformed one is a
        // configuration mistake and aborts startup.
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number (0-65535)")?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let static_root = env::var("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Ok(Config {
            database_url,
            port,
            host,
            static_root,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Static root: {}", self.static_root.display());
        tracing::info!("  Service listening on: {}:{}", self.host, self.port);
    }
}
