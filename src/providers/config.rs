use crate::errors::{ConfigError, QuoteResult};
use std::env;
use std::time::Duration;

pub const OPENSUBTITLES_BASE_URL: &str = "https://api.opensubtitles.com/api/v1";
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_USER_AGENT: &str = "MovieQuoteSearch v1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and endpoint for the OpenSubtitles REST API
#[derive(Debug, Clone)]
pub struct OpenSubtitlesConfig {
    pub base_url: String,
    pub api_key: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl OpenSubtitlesConfig {
    pub fn new(
        api_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: OPENSUBTITLES_BASE_URL.to_string(),
            api_key: api_key.into(),
            username: username.into(),
            password: password.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `OPENSUBTITLES_API_KEY`, `OPENSUBTITLES_USERNAME` and
    /// `OPENSUBTITLES_PASSWORD`; all three are required.
    pub fn from_env() -> QuoteResult<Self> {
        let api_key = non_empty_var("OPENSUBTITLES_API_KEY");
        let username = non_empty_var("OPENSUBTITLES_USERNAME");
        let password = non_empty_var("OPENSUBTITLES_PASSWORD");

        match (api_key, username, password) {
            (Some(api_key), Some(username), Some(password)) => {
                Ok(Self::new(api_key, username, password))
            }
            (api_key, username, password) => {
                let missing: Vec<&str> = [
                    ("OPENSUBTITLES_API_KEY", api_key.is_none()),
                    ("OPENSUBTITLES_USERNAME", username.is_none()),
                    ("OPENSUBTITLES_PASSWORD", password.is_none()),
                ]
                .iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| *name)
                .collect();
                Err(ConfigError::new(format!(
                    "OpenSubtitles credentials missing: {}",
                    missing.join(", ")
                ))
                .into())
            }
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Key and endpoints for The Movie Database API
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: TMDB_BASE_URL.to_string(),
            image_base_url: TMDB_IMAGE_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// `None` when `TMDB_API_KEY` is unset, which disables metadata lookups
    pub fn from_env() -> Option<Self> {
        non_empty_var("TMDB_API_KEY").map(Self::new)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
