use std::{env, time::Duration};

use anyhow::Context;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
    pub image: ImageApiConfig,
    pub http_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct ImageApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Served in place of a generated image when the image API answers with an error status.
    pub fallback_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://recipes.db?mode=rwc".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let http_timeout = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let gemini = GeminiConfig {
            api_key: env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-flash-latest".to_string()),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
        };

        let image = ImageApiConfig {
            base_url: env::var("FAL_API_BASE_URL").context("FAL_API_BASE_URL must be set")?,
            api_key: env::var("FAL_API_KEY").context("FAL_API_KEY must be set")?,
            fallback_url: env::var("FALLBACK_IMAGE_URL").unwrap_or_default(),
        };

        Ok(Self {
            database_url,
            host,
            port,
            gemini,
            image,
            http_timeout,
        })
    }
}
