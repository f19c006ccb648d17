use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitelens_cli::errors::SitelensError;
use sitelens_cli::services::evaluation_client::EvaluationClient;
use sitelens_cli::structs::config::eval_settings::EvalSettings;
use sitelens_cli::traits::result_evaluator::ResultEvaluator;

use crate::common::valid_result_value;

const DEPLOYMENT_PATH: &str = "/openai/deployments/gpt-audit/chat/completions";

fn settings_for(server: &MockServer) -> EvalSettings {
    EvalSettings {
        endpoint: server.uri(),
        api_key: "test-key".to_string(),
        deployment: "gpt-audit".to_string(),
        api_version: "2024-08-01-preview".to_string(),
    }
}

fn completion_body(content: String) -> serde_json::Value {
    json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    })
}

#[tokio::test]
async fn success_returns_validated_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(DEPLOYMENT_PATH))
        .and(query_param("api-version", "2024-08-01-preview"))
        .and(header("api-key", "test-key"))
        .and(body_partial_json(json!({
            "response_format": { "type": "json_schema" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body(valid_result_value(82.0).to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = EvaluationClient::new(settings_for(&server));
    let result = client.evaluate("https://example.com/", &[]).await.unwrap();

    assert_eq!(result.overall, 82.0);
    assert_eq!(result.breakdown.content_clarity, 85.0);
}

#[tokio::test]
async fn non_json_content_is_a_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(DEPLOYMENT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("the site looks fine to me".to_string())),
        )
        .mount(&server)
        .await;

    let client = EvaluationClient::new(settings_for(&server));
    let error = client.evaluate("https://example.com/", &[]).await.unwrap_err();

    assert!(matches!(error, SitelensError::MalformedResponse { .. }));
}

#[tokio::test]
async fn missing_message_content_is_a_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(DEPLOYMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = EvaluationClient::new(settings_for(&server));
    let error = client.evaluate("https://example.com/", &[]).await.unwrap_err();

    assert!(matches!(error, SitelensError::MalformedResponse { .. }));
}

#[tokio::test]
async fn schema_violating_payload_names_the_field() {
    let server = MockServer::start().await;

    let mut payload = valid_result_value(82.0);
    payload["summary"]
        .as_object_mut()
        .unwrap()
        .remove("developerTodo");

    Mock::given(method("POST"))
        .and(path(DEPLOYMENT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body(payload.to_string())),
        )
        .mount(&server)
        .await;

    let client = EvaluationClient::new(settings_for(&server));
    let error = client.evaluate("https://example.com/", &[]).await.unwrap_err();

    match error {
        SitelensError::SchemaViolation { violations } => {
            assert!(violations.contains(&"summary.developerTodo".to_string()));
        }
        other => panic!("expected SchemaViolation, got {:?}", other),
    }
}

#[tokio::test]
async fn auth_rejection_is_evaluation_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(DEPLOYMENT_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = EvaluationClient::new(settings_for(&server));
    let error = client.evaluate("https://example.com/", &[]).await.unwrap_err();

    match error {
        SitelensError::EvaluationUnavailable { status_code, .. } => {
            assert_eq!(status_code, Some(401));
        }
        other => panic!("expected EvaluationUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn quota_exhaustion_is_evaluation_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(DEPLOYMENT_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let client = EvaluationClient::new(settings_for(&server));
    let error = client.evaluate("https://example.com/", &[]).await.unwrap_err();

    match error {
        SitelensError::EvaluationUnavailable { status_code, reason } => {
            assert_eq!(status_code, Some(429));
            assert!(reason.contains("quota"));
        }
        other => panic!("expected EvaluationUnavailable, got {:?}", other),
    }
}
