use anyhow::Result;
use common::static_plan;
use ::config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;
use crate::store::PlanStore;

/// Server settings, read from defaults and `CLOUDKITCHEN_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Seed the store before accepting requests
    pub seed_on_startup: bool,
    /// Per-request timeout applied by the router
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load `.env`, then layer environment overrides on top of the defaults
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .set_default("bind_address", "0.0.0.0:8001")?
            .set_default("seed_on_startup", false)?
            .set_default("request_timeout_secs", 30_i64)?
            .add_source(Environment::with_prefix("CLOUDKITCHEN").try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initialize application state, seeding the store when configured to
pub async fn initialize_app_state(config: &AppConfig) -> AppState {
    let state = AppState {
        store: PlanStore::new(),
        seed_plan: static_plan().clone(),
    };

    if config.seed_on_startup {
        info!("Seeding business plan on startup");
        state.store.seed(&state.seed_plan).await;
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_app_state_honours_seed_flag() {
        let mut config = AppConfig {
            bind_address: "127.0.0.1:0".to_string(),
            seed_on_startup: false,
            request_timeout_secs: 30,
        };
        let state = initialize_app_state(&config).await;
        assert!(!state.store.is_seeded().await);

        config.seed_on_startup = true;
        let state = initialize_app_state(&config).await;
        assert!(state.store.is_seeded().await);
    }
}
