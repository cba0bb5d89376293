use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub log_dir: PathBuf,
    pub session_secure: bool,
}

impl Config {
    /// Reads the environment, after whatever `.env` supplies.
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://fyyur.db".to_owned());
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_owned())
            .parse()
            .context("BIND_ADDR must be an address like 0.0.0.0:8080")?;
        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| "logs".to_owned()).into();
        let session_secure = matches!(lookup("SESSION_SECURE").as_deref(), Some("true" | "1"));

        Ok(Config { database_url, bind_addr, log_dir, session_secure })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_url, "sqlite://fyyur.db");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(!config.session_secure);
    }

    #[test]
    fn overrides_and_bad_address() {
        let env = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "127.0.0.1:5000"),
            ("SESSION_SECURE", "1"),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.session_secure);

        let err = Config::from_lookup(|key| (key == "BIND_ADDR").then(|| "nowhere".to_owned())).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
