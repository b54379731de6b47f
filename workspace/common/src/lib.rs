//! Types and logic shared between the business-plan backend and frontend.
//! The wire structs mirror the backend handlers' payloads so the frontend can
//! deserialize API responses without duplicating shapes; everything else here
//! is pure and runs natively in tests.

pub mod aggregate;
pub mod charts;
mod error;
mod fetch_state;
pub mod navigation;
mod plan;
pub mod presentation;
mod static_plan;
mod wire;

pub use aggregate::{BusinessPlanApi, LOAD_FAILED_MESSAGE, load_business_plan};
pub use error::{ErrorClass, RequestError, within_deadline};
pub use fetch_state::{FetchState, drive_fetch};
pub use navigation::{NAVIGATION_SECTIONS, NavigationSection, SectionIcon, SectionScroller, ViewState};
pub use plan::{
    BusinessPlan, Company, CostComparison, Demographic, ExecutiveSummary, FinancialData,
    GrowthPoint, Investment, InvestmentItem, Location, MarketData, MarketSizing, Menu, MenuItem,
    Phase, Profitability, RevenuePoint, RoiProjection, SuccessMetrics, UsageItem,
};
pub use static_plan::{PLAN_ID, static_plan};
pub use wire::{
    FinancialResponse, InvestmentResponse, LocationsResponse, MarketAnalysisResponse,
    MenuResponse, OverviewResponse, PlanSections, SeedResponse,
};
