// src/config.rs
//! Startup configuration. All three knobs are read from the environment
//! exactly once; `dotenvy` has already loaded `.env` by the time the
//! first `get()` runs.

use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub app_env: String,
}

impl Config {
    fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Self {
            port,
            cors_origin,
            app_env,
        }
    }

    /// Whether 500 responses carry the real error message.
    pub fn expose_error_detail(&self) -> bool {
        self.app_env == "development"
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}
