//! Full-stack tests: actix app, real Anthropic client, mock upstream

#[cfg(test)]
mod tests {
    use crate::common::IntakeFactory;
    use crate::common::assertions::{assert_failure, assert_success};
    use crate::common::fixtures::FENCED_REPLY;
    use actix_web::{test, web};
    use print_advisor::config::Config;
    use print_advisor::server::{HttpServer, ServerBuilder};
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, api_key: Option<&str>) -> Config {
        let mut config = Config::default();
        config.anthropic.base_url = server.uri();
        config.anthropic.api_key = api_key.map(str::to_string);
        config
    }

    #[actix_web::test]
    async fn test_end_to_end_success() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{ "type": "text", "text": FENCED_REPLY }]
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = ServerBuilder::new()
            .with_config(config_for(&upstream, Some("sk-ant-test")))
            .build_state()
            .await
            .unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(IntakeFactory::create())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let analysis = assert_success(&body);
        assert_eq!(analysis["recommendations"][0]["product"]["model"], "E78625dn");
    }

    #[actix_web::test]
    async fn test_no_credential_means_no_network_call() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let state = ServerBuilder::new()
            .with_config(config_for(&upstream, None))
            .build_state()
            .await
            .unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(IntakeFactory::create())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "AI service not configured");
    }

    #[actix_web::test]
    async fn test_upstream_401_is_authentication_failure() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": { "type": "authentication_error", "message": "invalid x-api-key" }
            })))
            .mount(&upstream)
            .await;

        let state = ServerBuilder::new()
            .with_config(config_for(&upstream, Some("sk-ant-revoked")))
            .build_state()
            .await
            .unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(IntakeFactory::create())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_failure(&body, "AI service authentication failed");
    }

    #[actix_web::test]
    async fn test_health_reflects_missing_credential() {
        let upstream = MockServer::start().await;
        let state = ServerBuilder::new()
            .with_config(config_for(&upstream, None))
            .build_state()
            .await
            .unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["aiConfigured"], false);
    }
}
