//! Analysis endpoint tests
//!
//! Every request goes through the real actix app; only the text generator is
//! scripted.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_failure, assert_success};
    use crate::common::fixtures::{FENCED_REPLY, FULL_REPLY, PROSE_REPLY, UNKNOWN_PRODUCT_REPLY};
    use crate::common::{IntakeFactory, ScriptedGenerator};
    use actix_web::test;
    use print_advisor::core::providers::ProviderError;
    use serde_json::{Value, json};

    fn analyze_request(payload: &Value) -> test::TestRequest {
        test::TestRequest::post().uri("/api/analyze").set_json(payload)
    }

    #[actix_web::test]
    async fn test_prompt_carries_volumes_and_needs() {
        let generator = ScriptedGenerator::replying(FENCED_REPLY);
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let request = generator.last_request().unwrap();
        assert!(request.user.contains("5000"));
        assert!(request.user.contains("1200"));
        assert!(request.user.contains("scanning"));
        assert!(request.system.contains("hp-e78625dn"));
    }

    #[actix_web::test]
    async fn test_fenced_reply_is_hydrated() {
        let generator = ScriptedGenerator::replying(FENCED_REPLY);
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let analysis = assert_success(&body);
        let recommendations = analysis["recommendations"].as_array().unwrap();

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0]["productId"], "hp-e78625dn");
        assert_eq!(recommendations[0]["product"]["model"], "E78625dn");
        assert_eq!(analysis["summary"], "ok");
        assert!(analysis["generatedAt"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_product_gets_placeholder() {
        let generator = ScriptedGenerator::replying(UNKNOWN_PRODUCT_REPLY);
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let recommendation = &assert_success(&body)["recommendations"][0];

        assert_eq!(recommendation["productId"], "does-not-exist");
        assert_eq!(recommendation["product"]["name"], "Unknown Product");
        assert_eq!(recommendation["product"]["speed"], 0);
        assert_eq!(recommendation["product"]["id"], "does-not-exist");
    }

    #[actix_web::test]
    async fn test_full_reply_keeps_order_and_extra_fields() {
        let generator = ScriptedGenerator::replying(FULL_REPLY);
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        let analysis = assert_success(&body);

        let ids: Vec<&str> = analysis["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["productId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["hp-e57540dn", "hp-e78625dn"]);
        assert_eq!(analysis["recommendations"][0]["confidence"], "high");
        assert_eq!(analysis["recommendations"][0]["quantity"], 4);
        assert_eq!(analysis["estimatedSavings"], "15-20% on running costs");
        assert_eq!(analysis["nextSteps"], json!(["Book a site survey"]));
    }

    #[actix_web::test]
    async fn test_missing_sections_are_rejected_without_a_call() {
        let generator = ScriptedGenerator::replying(FENCED_REPLY);
        let app = crate::init_app!(generator.clone());

        let payload = IntakeFactory::without(&["printVolume", "budgetTimeline"]);
        let req = analyze_request(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "Missing required fields: printVolume, budgetTimeline");
        assert_eq!(generator.calls(), 0);
    }

    #[actix_web::test]
    async fn test_invalid_section_is_rejected_without_a_call() {
        let generator = ScriptedGenerator::replying(FENCED_REPLY);
        let app = crate::init_app!(generator.clone());

        let mut payload = IntakeFactory::create();
        payload["printVolume"] = json!({ "mono": -1, "colour": 0 });
        let req = analyze_request(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request: printVolume")
        );
        assert_eq!(generator.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unconfigured_service() {
        let generator = ScriptedGenerator::unconfigured();
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "AI service not configured");
    }

    #[actix_web::test]
    async fn test_authentication_failure() {
        let generator = ScriptedGenerator::failing(ProviderError::authentication(
            "anthropic",
            "invalid x-api-key",
        ));
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "AI service authentication failed");
    }

    #[actix_web::test]
    async fn test_rate_limit_is_429_with_retry_after() {
        let generator =
            ScriptedGenerator::failing(ProviderError::rate_limit("anthropic", Some(30)));
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 429);
        assert_eq!(resp.headers().get("retry-after").unwrap(), "30");

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "AI service is busy. Please try again later.");
    }

    #[actix_web::test]
    async fn test_reply_without_text_block() {
        let generator = ScriptedGenerator::replying_without_text();
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "Failed to generate analysis");
    }

    #[actix_web::test]
    async fn test_prose_reply_is_a_parse_failure() {
        let generator = ScriptedGenerator::replying(PROSE_REPLY);
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "Failed to parse analysis results");
        assert!(!body.to_string().contains("I'm sorry"));
    }

    #[actix_web::test]
    async fn test_wrong_shape_is_a_parse_failure() {
        let generator =
            ScriptedGenerator::replying(r#"{"summary": 42, "recommendations": "none"}"#);
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "Failed to parse analysis results");
    }

    #[actix_web::test]
    async fn test_other_upstream_failure_surfaces_its_message() {
        let generator =
            ScriptedGenerator::failing(ProviderError::api_error("anthropic", 529, "Overloaded"));
        let app = crate::init_app!(generator.clone());

        let req = analyze_request(&IntakeFactory::create()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Overloaded"));
    }

    #[actix_web::test]
    async fn test_duplicate_capabilities_render_once() {
        let generator = ScriptedGenerator::replying(FENCED_REPLY);
        let app = crate::init_app!(generator.clone());

        let mut payload = IntakeFactory::create();
        payload["workflowNeeds"] = json!(["scanning", "scanning", "fax"]);
        test::call_service(&app, analyze_request(&payload).to_request()).await;

        let user = generator.last_request().unwrap().user;
        assert_eq!(user.matches("- scanning").count(), 1);
        assert_eq!(user.matches("- fax").count(), 1);
    }
}
