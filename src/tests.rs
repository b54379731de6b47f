#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        setup_test_app, setup_test_app_state, setup_test_app_with_state,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{
        BusinessPlan, FinancialResponse, InvestmentResponse, LocationsResponse,
        MarketAnalysisResponse, MenuResponse, OverviewResponse, Phase, PlanSections,
        SeedResponse, PLAN_ID,
    };

    const SECTION_PATHS: [&str; 6] = [
        "/api/business-plan/overview",
        "/api/business-plan/market-analysis",
        "/api/business-plan/financial",
        "/api/business-plan/menu",
        "/api/business-plan/locations",
        "/api/business-plan/investment",
    ];

    async fn seeded_server() -> TestServer {
        let server = TestServer::new(setup_test_app()).unwrap();
        server
            .post("/api/business-plan/seed")
            .await
            .assert_status(StatusCode::OK);
        server
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/health").await;
        response.assert_status(StatusCode::OK);

        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.store, "empty");
        assert!(body.plan_id.is_none());
        assert!(body.seeded_at.is_none());
    }

    #[tokio::test]
    async fn test_sections_are_not_found_before_seeding() {
        let server = TestServer::new(setup_test_app()).unwrap();

        for path in SECTION_PATHS {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);

            let body: ErrorResponse = response.json();
            assert!(!body.success);
            assert_eq!(body.code, "BUSINESS_PLAN_NOT_FOUND");
            assert_eq!(body.error, "Business plan not found");
        }
    }

    #[tokio::test]
    async fn test_seed_then_already_exists() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let first: SeedResponse = server.post("/api/business-plan/seed").await.json();
        assert_eq!(first.message, "Business plan data seeded successfully");
        assert_eq!(first.inserted_id.as_deref(), Some(PLAN_ID));

        let second = server.post("/api/business-plan/seed").await;
        second.assert_status(StatusCode::OK);
        let raw: serde_json::Value = second.json();
        assert_eq!(raw["message"], "Business plan data already exists");
        assert!(raw.get("inserted_id").is_none());

        let health: HealthResponse = server.get("/health").await.json();
        assert_eq!(health.store, "seeded");
        assert_eq!(health.plan_id.as_deref(), Some(PLAN_ID));
        assert!(health.seeded_at.is_some());
    }

    #[tokio::test]
    async fn test_overview_uses_snake_case_keys() {
        let server = seeded_server().await;

        let response = server.get("/api/business-plan/overview").await;
        response.assert_status(StatusCode::OK);

        let raw: serde_json::Value = response.json();
        assert!(raw.get("company").is_some());
        assert!(raw.get("executive_summary").is_some());

        let body: OverviewResponse = response.json();
        assert_eq!(body.company.name, "SHANGHAI CLOUD KITCHEN PROJECT");
    }

    #[tokio::test]
    async fn test_locations_are_split_across_both_phases() {
        let server = seeded_server().await;

        let body: LocationsResponse = server.get("/api/business-plan/locations").await.json();
        assert_eq!(body.locations.len(), 4);

        let phase_one = body.locations.iter().filter(|l| l.phase == Phase::One).count();
        let phase_two = body.locations.iter().filter(|l| l.phase == Phase::Two).count();
        assert_eq!(phase_one, 2);
        assert_eq!(phase_two, 2);
    }

    #[tokio::test]
    async fn test_investment_section() {
        let server = seeded_server().await;

        let body: InvestmentResponse = server.get("/api/business-plan/investment").await.json();
        assert_eq!(body.investment.amount, "1,500,000 RMB");
        assert_eq!(body.investment.roi_projection.len(), 3);
        let usage_total: u32 = body.investment.usage.iter().map(|u| u.percentage).sum();
        assert_eq!(usage_total, 100);
    }

    #[tokio::test]
    async fn test_sections_reassemble_into_the_seeded_plan() {
        let state = setup_test_app_state();
        let expected = state.seed_plan.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();
        server.post("/api/business-plan/seed").await;

        let sections = PlanSections {
            overview: server.get(SECTION_PATHS[0]).await.json::<OverviewResponse>(),
            market_analysis: server.get(SECTION_PATHS[1]).await.json::<MarketAnalysisResponse>(),
            financial: server.get(SECTION_PATHS[2]).await.json::<FinancialResponse>(),
            menu: server.get(SECTION_PATHS[3]).await.json::<MenuResponse>(),
            locations: server.get(SECTION_PATHS[4]).await.json::<LocationsResponse>(),
            investment: server.get(SECTION_PATHS[5]).await.json::<InvestmentResponse>(),
        };

        assert_eq!(BusinessPlan::from(sections), expected);
    }

    #[tokio::test]
    async fn test_swagger_document_is_served() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"].get("/api/business-plan/seed").is_some());
    }
}
