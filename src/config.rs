use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Base URL of the external auth service; `/login` and `/register` are appended.
    pub auth_api_url: String,
    pub storage_path: String,
    /// Seconds a non-remembered token stays in session storage.
    pub session_token_ttl: u64,
    pub log_dir: String,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            auth_api_url: "http://127.0.0.1:5000/api/auth".to_string(),
            storage_path: "data/client_storage.json".to_string(),
            session_token_ttl: 3600,
            log_dir: "logs".to_string(),
            rate_login_per_min: 60,
            rate_register_per_min: 30,
            rate_protected_per_min: 1000,
            api_prefix: "/api".to_string(),
        }
    }
}

fn parsed<T: FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{key} has an invalid value: {raw}"))),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            auth_api_url: env::var("AUTH_API_URL")
                .map_err(|_| AppError::Config("AUTH_API_URL must be set".to_string()))?,
            storage_path: env::var("STORAGE_PATH").unwrap_or(defaults.storage_path),
            session_token_ttl: parsed("SESSION_TOKEN_TTL", defaults.session_token_ttl)?,
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),

            rate_login_per_min: parsed("RATE_LOGIN_PER_MIN", defaults.rate_login_per_min)?,
            rate_register_per_min: parsed("RATE_REGISTER_PER_MIN", defaults.rate_register_per_min)?,
            rate_protected_per_min: parsed(
                "RATE_PROTECTED_PER_MIN",
                defaults.rate_protected_per_min,
            )?,

            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default() {
        let value: u32 = parsed("STAFF_PORTAL_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.api_prefix, "/api");
        assert!(config.rate_login_per_min > 0);
    }
}
