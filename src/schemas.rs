use chrono::{DateTime, Utc};
use common::{
    BusinessPlan, Company, CostComparison, Demographic, ExecutiveSummary, FinancialData,
    FinancialResponse, GrowthPoint, Investment, InvestmentItem, InvestmentResponse, Location,
    LocationsResponse, MarketAnalysisResponse, MarketData, MarketSizing, Menu, MenuItem,
    MenuResponse, OverviewResponse, Profitability, RevenuePoint, RoiProjection, SeedResponse,
    SuccessMetrics, UsageItem,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::store::PlanStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// In-memory business plan store
    pub store: PlanStore,
    /// Plan inserted by the seed endpoint
    pub seed_plan: BusinessPlan,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Store status ("seeded" or "empty")
    pub store: String,
    /// Identifier of the stored plan
    pub plan_id: Option<String>,
    /// When the stored plan was seeded
    pub seeded_at: Option<DateTime<Utc>>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::business_plan::get_overview,
        crate::handlers::business_plan::get_market_analysis,
        crate::handlers::business_plan::get_financial,
        crate::handlers::business_plan::get_menu,
        crate::handlers::business_plan::get_locations,
        crate::handlers::business_plan::get_investment,
        crate::handlers::business_plan::seed_business_plan,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            OverviewResponse,
            MarketAnalysisResponse,
            FinancialResponse,
            MenuResponse,
            LocationsResponse,
            InvestmentResponse,
            SeedResponse,
            Company,
            ExecutiveSummary,
            MarketData,
            MarketSizing,
            GrowthPoint,
            CostComparison,
            Demographic,
            FinancialData,
            InvestmentItem,
            RevenuePoint,
            Profitability,
            Menu,
            MenuItem,
            Location,
            Investment,
            UsageItem,
            RoiProjection,
            SuccessMetrics,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "business-plan", description = "Shanghai Cloud Kitchen business plan sections")
    ),
    info(
        title = "Cloud Kitchen Business Plan API",
        version = "0.1.0",
        description = "Read-only sections of the Shanghai Cloud Kitchen investment presentation"
    )
)]
pub struct ApiDoc;
