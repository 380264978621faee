use std::{env, net::SocketAddr};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Without a database everything lives in memory for the life of the process.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw.parse().with_context(|| format!("invalid PORT {raw:?}"))?,
            Err(_) => 3050,
        };
        let db_max_connections: u32 = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid DB_MAX_CONNECTIONS {raw:?}"))?,
            Err(_) => 5,
        };
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
