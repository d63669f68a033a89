use std::sync::Arc;

use monostore_web::{ConfigError, Cors, CorsConfig};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
}

/// Builds the policy from `CORS_*` overrides (and `.env`) on top of the monostore defaults.
pub fn build_state() -> Result<AppState, ConfigError> {
    let cors = CorsConfig::from_env()?.build()?;

    Ok(AppState {
        cors: Arc::new(cors),
    })
}

pub mod middleware;
