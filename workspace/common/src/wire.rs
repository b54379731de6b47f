//! Payloads of the `/api/business-plan` endpoints and their reshaping into
//! the [`BusinessPlan`] view-model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::plan::{BusinessPlan, Company, ExecutiveSummary, FinancialData, Investment, Location, MarketData, Menu};

/// `GET /api/business-plan/overview`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OverviewResponse {
    pub company: Company,
    pub executive_summary: ExecutiveSummary,
}

/// `GET /api/business-plan/market-analysis`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MarketAnalysisResponse {
    pub market_data: MarketData,
}

/// `GET /api/business-plan/financial`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FinancialResponse {
    pub financial_data: FinancialData,
}

/// `GET /api/business-plan/menu`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MenuResponse {
    pub menu: Menu,
}

/// `GET /api/business-plan/locations`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}

/// `GET /api/business-plan/investment`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InvestmentResponse {
    pub investment: Investment,
}

/// `POST /api/business-plan/seed`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<String>,
}

/// The six raw section responses, one slot per endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanSections {
    pub overview: OverviewResponse,
    pub market_analysis: MarketAnalysisResponse,
    pub financial: FinancialResponse,
    pub menu: MenuResponse,
    pub locations: LocationsResponse,
    pub investment: InvestmentResponse,
}

impl PlanSections {
    /// Split a complete plan into the payloads the backend serves.
    pub fn from_plan(plan: &BusinessPlan) -> Self {
        Self {
            overview: OverviewResponse {
                company: plan.company.clone(),
                executive_summary: plan.executive_summary.clone(),
            },
            market_analysis: MarketAnalysisResponse {
                market_data: plan.market_data.clone(),
            },
            financial: FinancialResponse {
                financial_data: plan.financial_data.clone(),
            },
            menu: MenuResponse {
                menu: plan.menu.clone(),
            },
            locations: LocationsResponse {
                locations: plan.locations.clone(),
            },
            investment: InvestmentResponse {
                investment: plan.investment.clone(),
            },
        }
    }
}

impl From<PlanSections> for BusinessPlan {
    fn from(sections: PlanSections) -> Self {
        BusinessPlan {
            company: sections.overview.company,
            executive_summary: sections.overview.executive_summary,
            market_data: sections.market_analysis.market_data,
            menu: sections.menu.menu,
            financial_data: sections.financial.financial_data,
            locations: sections.locations.locations,
            investment: sections.investment.investment,
        }
    }
}
