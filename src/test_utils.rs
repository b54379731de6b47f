#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use crate::store::PlanStore;
    use axum::Router;
    use common::static_plan;
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create AppState with an empty store
    pub fn setup_test_app_state() -> AppState {
        AppState {
            store: PlanStore::new(),
            seed_plan: static_plan().clone(),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing around the given state
    pub fn setup_test_app_with_state(state: AppState) -> Router {
        let _ = init_test_tracing();
        create_router(state, Duration::from_secs(30))
    }

    /// Create axum app for testing with an unseeded store
    pub fn setup_test_app() -> Router {
        setup_test_app_with_state(setup_test_app_state())
    }
}
