#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{PathItemType, RefOr, schema::Schema};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        match components.schemas.get(name).unwrap() {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for name in [
            "ErrorResponse",
            "HealthResponse",
            "OverviewResponse",
            "MarketAnalysisResponse",
            "FinancialResponse",
            "MenuResponse",
            "LocationsResponse",
            "InvestmentResponse",
            "SeedResponse",
            "Location",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        assert!(properties.contains(&"error".to_string()));
        assert!(properties.contains(&"code".to_string()));
        assert!(properties.contains(&"success".to_string()));
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        assert!(properties.contains(&"status".to_string()));
        assert!(properties.contains(&"version".to_string()));
        assert!(properties.contains(&"store".to_string()));
    }

    #[test]
    fn test_overview_response_keeps_wire_key_names() {
        let properties = object_properties("OverviewResponse");
        assert!(properties.contains(&"company".to_string()));
        assert!(properties.contains(&"executive_summary".to_string()));
    }

    #[test]
    fn test_section_paths_document_not_found() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/api/business-plan/overview",
            "/api/business-plan/market-analysis",
            "/api/business-plan/financial",
            "/api/business-plan/menu",
            "/api/business-plan/locations",
            "/api/business-plan/investment",
        ] {
            let item = openapi.paths.paths.get(path).unwrap();
            let get = item.operations.get(&PathItemType::Get).unwrap();
            assert!(get.responses.responses.contains_key("200"));
            assert!(get.responses.responses.contains_key("404"));
        }

        let seed = openapi.paths.paths.get("/api/business-plan/seed").unwrap();
        assert!(seed.operations.contains_key(&PathItemType::Post));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi = ApiDoc::openapi();
        let openapi_json = serde_json::to_string(&openapi).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }
}
