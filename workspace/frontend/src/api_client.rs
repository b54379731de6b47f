//! HTTP gateway to the business-plan backend.

use std::time::Duration;

use async_trait::async_trait;
use common::{
    BusinessPlanApi, FinancialResponse, InvestmentResponse, LocationsResponse,
    MarketAnalysisResponse, MenuResponse, OverviewResponse, RequestError, SeedResponse,
    within_deadline,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::settings;

/// Deadline applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the `/api/business-plan` endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the backend configured in [`settings`]
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().api_base_url())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        self.send("GET", path, Request::get(&url)).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        self.send("POST", path, Request::post(&url)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, RequestError> {
        log::debug!("API Request: {} {}", method, path);

        let exchange = async {
            let response = request
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            read_response(path, response).await
        };
        let deadline = TimeoutFuture::new(REQUEST_TIMEOUT.as_millis() as u32);
        let result = within_deadline(exchange, deadline, REQUEST_TIMEOUT)
            .await
            .and_then(|result| result);

        if let Err(err) = &result {
            log::error!("API Error: {} {} - {}", method, path, err);
            err.log_classification();
        }
        result
    }
}

async fn read_response<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, RequestError> {
    let status = response.status();
    log::debug!("API Response: {} {}", status, path);

    if !response.ok() {
        let status_text = response.status_text();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status_text,
        };
        return Err(RequestError::Status { status, message });
    }

    log::trace!("{} - Response received, parsing JSON", path);
    response
        .json::<T>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl BusinessPlanApi for ApiClient {
    async fn get_overview(&self) -> Result<OverviewResponse, RequestError> {
        self.get("/business-plan/overview").await
    }

    async fn get_market_analysis(&self) -> Result<MarketAnalysisResponse, RequestError> {
        self.get("/business-plan/market-analysis").await
    }

    async fn get_financial(&self) -> Result<FinancialResponse, RequestError> {
        self.get("/business-plan/financial").await
    }

    async fn get_menu(&self) -> Result<MenuResponse, RequestError> {
        self.get("/business-plan/menu").await
    }

    async fn get_locations(&self) -> Result<LocationsResponse, RequestError> {
        self.get("/business-plan/locations").await
    }

    async fn get_investment(&self) -> Result<InvestmentResponse, RequestError> {
        self.get("/business-plan/investment").await
    }

    async fn seed_database(&self) -> Result<SeedResponse, RequestError> {
        self.post("/business-plan/seed").await
    }
}
