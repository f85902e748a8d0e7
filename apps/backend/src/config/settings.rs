//! Process-wide configuration.
//!
//! Built once in `main` (or by a test) and injected into the state builder.
//! Nothing downstream reads the environment directly.

use std::env;

use crate::error::AppError;

pub const DEFAULT_PROJECT_NAME: &str = "Items API";
pub const DEFAULT_API_V1_STR: &str = "/api/v1";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./app.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_name: String,
    /// Route prefix for the versioned API, e.g. `/api/v1`. Never ends with `/`.
    pub api_v1_str: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Raw `CORS_ALLOWED_ORIGINS` entries; filtering happens in the CORS middleware.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            api_v1_str: DEFAULT_API_V1_STR.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read settings from the process environment.
    ///
    /// Variables already set in the environment win over `.env` entries.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unknown keys are never consulted.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string());

        let project_name = get("PROJECT_NAME")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.project_name);

        let api_v1_str = match get("API_V1_STR") {
            Some(raw) => normalize_prefix(&raw)?,
            None => defaults.api_v1_str,
        };

        let database_url = match get("DATABASE_URL") {
            Some(url) if url.is_empty() => {
                return Err(AppError::config("DATABASE_URL must not be empty"));
            }
            Some(url) => url,
            None => defaults.database_url,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                    )));
                }
            },
            None => defaults.db_max_connections,
        };

        let host = get("BACKEND_HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match get("BACKEND_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => defaults.port,
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            project_name,
            api_v1_str,
            database_url,
            db_max_connections,
            host,
            port,
            cors_allowed_origins,
        })
    }
}

fn normalize_prefix(raw: &str) -> Result<String, AppError> {
    if !raw.starts_with('/') {
        return Err(AppError::config(format!(
            "API_V1_STR must start with '/', got '{raw}'"
        )));
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AppError::config("API_V1_STR must not be the bare root '/'"));
    }
    Ok(trimmed.to_string())
}
