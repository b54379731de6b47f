//! Joins the six business-plan sections into one view-model.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::RequestError;
use crate::plan::BusinessPlan;
use crate::static_plan::static_plan;
use crate::wire::{
    FinancialResponse, InvestmentResponse, LocationsResponse, MarketAnalysisResponse,
    MenuResponse, OverviewResponse, PlanSections, SeedResponse,
};

/// Message shown when an aggregate failure carries no text of its own.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load business plan data";

/// Read and seed operations of the business-plan API.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded wasm executor.
#[async_trait(?Send)]
pub trait BusinessPlanApi {
    async fn get_overview(&self) -> Result<OverviewResponse, RequestError>;
    async fn get_market_analysis(&self) -> Result<MarketAnalysisResponse, RequestError>;
    async fn get_financial(&self) -> Result<FinancialResponse, RequestError>;
    async fn get_menu(&self) -> Result<MenuResponse, RequestError>;
    async fn get_locations(&self) -> Result<LocationsResponse, RequestError>;
    async fn get_investment(&self) -> Result<InvestmentResponse, RequestError>;
    async fn seed_database(&self) -> Result<SeedResponse, RequestError>;
}

/// Seed best-effort, fetch all six sections concurrently and reshape them.
///
/// The join is all-or-nothing: the first failing section fails the whole
/// load and no partially filled plan is returned.
pub async fn load_business_plan<A>(api: &A) -> Result<BusinessPlan, RequestError>
where
    A: BusinessPlanApi + ?Sized,
{
    info!("Fetching business plan data");

    match api.seed_database().await {
        Ok(seed) => debug!("Seed request finished: {}", seed.message),
        Err(err) => warn!("Database seeding failed or already exists: {}", err),
    }

    let (overview, market_analysis, financial, menu, locations, investment) = futures::try_join!(
        api.get_overview(),
        api.get_market_analysis(),
        api.get_financial(),
        api.get_menu(),
        api.get_locations(),
        api.get_investment(),
    )?;

    let sections = PlanSections {
        overview,
        market_analysis,
        financial,
        menu,
        locations,
        investment,
    };
    let plan = BusinessPlan::from(sections).apply_defaults(static_plan());

    info!("Business plan data loaded successfully");
    Ok(plan)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Serves the static plan, failing the endpoints it was told to fail.
    #[derive(Default)]
    pub struct ScriptedApi {
        pub failing: Vec<&'static str>,
        pub calls: RefCell<Vec<&'static str>>,
    }

    impl ScriptedApi {
        pub fn failing(endpoints: &[&'static str]) -> Self {
            Self {
                failing: endpoints.to_vec(),
                ..Default::default()
            }
        }

        fn respond<T>(&self, endpoint: &'static str, value: T) -> Result<T, RequestError> {
            self.calls.borrow_mut().push(endpoint);
            if self.failing.contains(&endpoint) {
                Err(RequestError::Network(format!("{endpoint} unreachable")))
            } else {
                Ok(value)
            }
        }

        fn sections(&self) -> PlanSections {
            PlanSections::from_plan(static_plan())
        }
    }

    #[async_trait(?Send)]
    impl BusinessPlanApi for ScriptedApi {
        async fn get_overview(&self) -> Result<OverviewResponse, RequestError> {
            self.respond("overview", self.sections().overview)
        }

        async fn get_market_analysis(&self) -> Result<MarketAnalysisResponse, RequestError> {
            self.respond("market-analysis", self.sections().market_analysis)
        }

        async fn get_financial(&self) -> Result<FinancialResponse, RequestError> {
            self.respond("financial", self.sections().financial)
        }

        async fn get_menu(&self) -> Result<MenuResponse, RequestError> {
            self.respond("menu", self.sections().menu)
        }

        async fn get_locations(&self) -> Result<LocationsResponse, RequestError> {
            self.respond("locations", self.sections().locations)
        }

        async fn get_investment(&self) -> Result<InvestmentResponse, RequestError> {
            self.respond("investment", self.sections().investment)
        }

        async fn seed_database(&self) -> Result<SeedResponse, RequestError> {
            self.respond(
                "seed",
                SeedResponse {
                    message: "Business plan data already exists".to_string(),
                    inserted_id: None,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedApi;
    use super::*;
    use crate::fetch_state::{FetchState, drive_fetch};

    const READS: [&str; 6] = ["overview", "market-analysis", "financial", "menu", "locations", "investment"];

    #[tokio::test]
    async fn test_all_sections_succeed() {
        let api = ScriptedApi::default();
        let plan = load_business_plan(&api).await.unwrap();

        assert_eq!(&plan, static_plan());
        assert_eq!(api.calls.borrow()[0], "seed");
    }

    #[tokio::test]
    async fn test_any_single_failure_fails_the_aggregate() {
        for endpoint in READS {
            let api = ScriptedApi::failing(&[endpoint]);
            let mut states = Vec::new();
            drive_fetch(load_business_plan(&api), LOAD_FAILED_MESSAGE, |s| states.push(s)).await;

            assert_eq!(states.len(), 2, "{endpoint}");
            assert!(states[0].is_loading());
            match &states[1] {
                FetchState::Error(message) => assert!(message.contains(endpoint)),
                other => panic!("expected error for {endpoint}, got {other:?}"),
            }
            assert!(states[1].data().is_none());
        }
    }

    #[tokio::test]
    async fn test_seed_failure_does_not_block_reads() {
        let api = ScriptedApi::failing(&["seed"]);
        let plan = load_business_plan(&api).await;

        assert!(plan.is_ok());
        let calls = api.calls.borrow();
        for endpoint in READS {
            assert!(calls.contains(&endpoint), "{endpoint} was not requested");
        }
    }

    #[tokio::test]
    async fn test_sparse_payloads_are_normalized() {
        struct SparseApi;

        #[async_trait(?Send)]
        impl BusinessPlanApi for SparseApi {
            async fn get_overview(&self) -> Result<OverviewResponse, RequestError> {
                Ok(OverviewResponse::default())
            }
            async fn get_market_analysis(&self) -> Result<MarketAnalysisResponse, RequestError> {
                Ok(MarketAnalysisResponse::default())
            }
            async fn get_financial(&self) -> Result<FinancialResponse, RequestError> {
                Ok(FinancialResponse::default())
            }
            async fn get_menu(&self) -> Result<MenuResponse, RequestError> {
                Ok(MenuResponse::default())
            }
            async fn get_locations(&self) -> Result<LocationsResponse, RequestError> {
                Ok(LocationsResponse::default())
            }
            async fn get_investment(&self) -> Result<InvestmentResponse, RequestError> {
                Ok(InvestmentResponse::default())
            }
            async fn seed_database(&self) -> Result<SeedResponse, RequestError> {
                Err(RequestError::Status { status: 500, message: "seed".to_string() })
            }
        }

        let plan = load_business_plan(&SparseApi).await.unwrap();
        assert_eq!(plan.investment.amount, "1,500,000 RMB");
        assert_eq!(plan.financial_data.profitability.net_profit, 1_260_000);
        assert!(plan.locations.is_empty());
    }
}
