use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    /// Store name reported in storage error responses.
    pub store_label: String,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store = match env_or("CONTACTFORM_STORE", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Invalid CONTACTFORM_STORE: {other}")),
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreBackend::Postgres && database_url.is_none() {
            return Err("Missing required environment variable: DATABASE_URL".to_string());
        }

        let host: IpAddr = env_or("CONTACTFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACTFORM_HOST: {e}"))?;

        let port: u16 = env_or("CONTACTFORM_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CONTACTFORM_PORT: {e}"))?;

        let max_body_size: usize = env_or("CONTACTFORM_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CONTACTFORM_MAX_BODY_SIZE: {e}"))?;

        let store_label = env_or("CONTACTFORM_STORE_LABEL", "DynamoDB");
        let log_level = env_or("CONTACTFORM_LOG_LEVEL", "info");

        Ok(Config {
            store,
            database_url,
            host,
            port,
            max_body_size,
            store_label,
            log_level,
        })
    }
}
