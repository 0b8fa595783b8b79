use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// `OPENAI_API_KEY` may be absent; original-quote calls then fail with an auth error.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub quotes_path: PathBuf,
    pub export_path: PathBuf,
    pub static_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            quotes_path: env_or("QUOTES_PATH", "famous_quotes.json").into(),
            export_path: env_or("EXPORT_PATH", "data/out.csv").into(),
            static_dir: env_or("STATIC_DIR", "static").into(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            quotes_path: "famous_quotes.json".into(),
            export_path: "data/out.csv".into(),
            static_dir: "static".into(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
