use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub http_addr: String,
    pub mongo_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let http_addr = env_or("HTTP_ADDR", "0.0.0.0:8080");
        let _parsed_http_addr = SocketAddr::from_str(&http_addr)
            .map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        let mongo_addr = env_or("MONGO_ADDR", "mongo:27017");
        if mongo_addr.trim().is_empty() {
            return Err(anyhow!("invalid MONGO_ADDR: must not be empty"));
        }

        Ok(Self {
            http_addr,
            mongo_addr,
        })
    }

    /// Connection string for the document store.
    pub fn mongo_uri(&self) -> String {
        format!("mongodb://{}", self.mongo_addr)
    }
}
