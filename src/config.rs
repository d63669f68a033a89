use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{header, method, origin};
use crate::cors::Cors;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use crate::util::split_header_list;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
pub const ENV_EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE_SECONDS: &str = "CORS_MAX_AGE_SECONDS";

const WILDCARD: &str = "*";

/// Externalised CORS policy, as read from JSON or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Exact-match origin whitelist; `["*"]` allows any origin.
    pub origins: Vec<String>,
    pub methods: Vec<String>,
    /// Request headers a preflight may ask for; `["*"]` allows any.
    pub headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache lifetime; `null` omits `Access-Control-Max-Age`.
    pub max_age_seconds: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec![
                origin::ANGULAR_STORE.to_string(),
                origin::ANGULAR_ADMIN.to_string(),
                origin::LOCAL_GATEWAY.to_string(),
            ],
            methods: [
                method::GET,
                method::POST,
                method::PUT,
                method::DELETE,
                method::OPTIONS,
            ]
            .map(String::from)
            .to_vec(),
            headers: [
                header::CONTENT_TYPE,
                header::COOKIE,
                header::SET_COOKIE,
                header::AUTHORIZATION,
            ]
            .map(String::from)
            .to_vec(),
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age_seconds: Some(3600),
            options_success_status: 204,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CORS configuration from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CORS configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid CORS configuration: {0}")]
    Invalid(#[from] ValidationError),
}

impl CorsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Reads overrides from the process environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Starts from the defaults and applies every variable `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ALLOWED_ORIGINS) {
            config.origins = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_METHODS) {
            config.methods = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_HEADERS) {
            config.headers = split_list(&value);
        }
        if let Some(value) = lookup(ENV_EXPOSED_HEADERS) {
            config.exposed_headers = split_list(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_CREDENTIALS) {
            config.allow_credentials = parse_env(ENV_ALLOW_CREDENTIALS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_AGE_SECONDS) {
            config.max_age_seconds = Some(parse_env(ENV_MAX_AGE_SECONDS, &value)?);
        }

        Ok(config)
    }

    pub fn to_options(&self) -> CorsOptions {
        let origin = if is_wildcard(&self.origins) {
            Origin::any()
        } else {
            Origin::list(self.origins.iter().cloned())
        };

        let allowed_headers = if is_wildcard(&self.headers) {
            AllowedHeaders::any()
        } else {
            AllowedHeaders::list(self.headers.iter().cloned())
        };

        CorsOptions {
            origin,
            methods: AllowedMethods::list(self.methods.iter().cloned()),
            allowed_headers,
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().cloned()),
            credentials: self.allow_credentials,
            max_age: self.max_age_seconds,
            options_success_status: self.options_success_status,
        }
    }

    pub fn build(&self) -> Result<Cors, ConfigError> {
        let cors = Cors::new(self.to_options())?;
        info!(
            origins = ?self.origins,
            credentials = self.allow_credentials,
            max_age_seconds = ?self.max_age_seconds,
            "CORS policy loaded"
        );
        Ok(cors)
    }
}

fn is_wildcard(values: &[String]) -> bool {
    matches!(values, [only] if only.trim() == WILDCARD)
}

fn split_list(value: &str) -> Vec<String> {
    split_header_list(value).map(str::to_string).collect()
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
