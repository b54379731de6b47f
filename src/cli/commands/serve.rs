use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::create_router;

pub async fn serve(bind_address: Option<String>, seed: bool) -> Result<()> {
    trace!("Entering serve function");
    info!("Cloud kitchen business plan server starting up");

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    if let Some(bind_address) = bind_address {
        config.bind_address = bind_address;
    }
    config.seed_on_startup |= seed;
    debug!("Bind address: {}", config.bind_address);
    debug!("Seed on startup: {}", config.seed_on_startup);

    // Initialize application state
    trace!("Initializing application state");
    let state = initialize_app_state(&config).await;
    debug!("Application state initialized successfully");

    // Create router
    trace!("Creating application router");
    let app = create_router(state, config.request_timeout());
    debug!("Router created successfully");

    // Start server
    let bind_address = config.bind_address;
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Business plan API running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
