use axum::{extract::State, response::Json};
use common::{
    FinancialResponse, InvestmentResponse, LocationsResponse, MarketAnalysisResponse,
    MenuResponse, OverviewResponse, PlanSections, SeedResponse,
};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};
use crate::store::SeedOutcome;

/// Split the stored plan into its section payloads.
async fn stored_sections(state: &AppState) -> Result<PlanSections, ApiError> {
    trace!("Reading business plan from store");
    let stored = state.store.current().await.ok_or(ApiError::NotSeeded)?;
    debug!("Serving sections of business plan '{}'", stored.id);
    Ok(PlanSections::from_plan(&stored.plan))
}

/// Get business plan overview including company info and executive summary
#[utoipa::path(
    get,
    path = "/api/business-plan/overview",
    tag = "business-plan",
    responses(
        (status = 200, description = "Company info and executive summary", body = OverviewResponse),
        (status = 404, description = "Business plan not seeded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_overview(State(state): State<AppState>) -> Result<Json<OverviewResponse>, ApiError> {
    Ok(Json(stored_sections(&state).await?.overview))
}

/// Get market analysis data including Shanghai market info and growth trends
#[utoipa::path(
    get,
    path = "/api/business-plan/market-analysis",
    tag = "business-plan",
    responses(
        (status = 200, description = "Market sizing, growth and cost comparison", body = MarketAnalysisResponse),
        (status = 404, description = "Business plan not seeded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_market_analysis(
    State(state): State<AppState>,
) -> Result<Json<MarketAnalysisResponse>, ApiError> {
    Ok(Json(stored_sections(&state).await?.market_analysis))
}

/// Get financial projections
#[utoipa::path(
    get,
    path = "/api/business-plan/financial",
    tag = "business-plan",
    responses(
        (status = 200, description = "Initial investment, revenue projection and profitability", body = FinancialResponse),
        (status = 404, description = "Business plan not seeded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_financial(State(state): State<AppState>) -> Result<Json<FinancialResponse>, ApiError> {
    Ok(Json(stored_sections(&state).await?.financial))
}

/// Get menu items and food options
#[utoipa::path(
    get,
    path = "/api/business-plan/menu",
    tag = "business-plan",
    responses(
        (status = 200, description = "Menu", body = MenuResponse),
        (status = 404, description = "Business plan not seeded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_menu(State(state): State<AppState>) -> Result<Json<MenuResponse>, ApiError> {
    Ok(Json(stored_sections(&state).await?.menu))
}

/// Get location information and expansion plans
#[utoipa::path(
    get,
    path = "/api/business-plan/locations",
    tag = "business-plan",
    responses(
        (status = 200, description = "Kitchen locations tagged by phase", body = LocationsResponse),
        (status = 404, description = "Business plan not seeded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_locations(State(state): State<AppState>) -> Result<Json<LocationsResponse>, ApiError> {
    Ok(Json(stored_sections(&state).await?.locations))
}

/// Get investment requirements and ROI projections
#[utoipa::path(
    get,
    path = "/api/business-plan/investment",
    tag = "business-plan",
    responses(
        (status = 200, description = "Investment ask, usage, ROI and success metrics", body = InvestmentResponse),
        (status = 404, description = "Business plan not seeded", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_investment(State(state): State<AppState>) -> Result<Json<InvestmentResponse>, ApiError> {
    Ok(Json(stored_sections(&state).await?.investment))
}

/// Seed the store with the business plan (development only, idempotent)
#[utoipa::path(
    post,
    path = "/api/business-plan/seed",
    tag = "business-plan",
    responses(
        (status = 200, description = "Plan seeded or already present", body = SeedResponse)
    )
)]
#[instrument(skip(state))]
pub async fn seed_business_plan(State(state): State<AppState>) -> Json<SeedResponse> {
    let response = match state.store.seed(&state.seed_plan).await {
        SeedOutcome::Inserted { id } => {
            info!("Business plan data seeded with id {}", id);
            SeedResponse {
                message: "Business plan data seeded successfully".to_string(),
                inserted_id: Some(id),
            }
        }
        SeedOutcome::AlreadyExists => SeedResponse {
            message: "Business plan data already exists".to_string(),
            inserted_id: None,
        },
    };

    Json(response)
}
