use crate::handlers::{
    business_plan::{
        get_financial, get_investment, get_locations, get_market_analysis, get_menu, get_overview,
        seed_business_plan,
    },
    health::health_check,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Business plan sections
        .route("/api/business-plan/overview", get(get_overview))
        .route("/api/business-plan/market-analysis", get(get_market_analysis))
        .route("/api/business-plan/financial", get(get_financial))
        .route("/api/business-plan/menu", get(get_menu))
        .route("/api/business-plan/locations", get(get_locations))
        .route("/api/business-plan/investment", get(get_investment))
        .route("/api/business-plan/seed", post(seed_business_plan))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
