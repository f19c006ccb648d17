use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::constants::{evaluation_timeout, EVALUATION_MAX_TOKENS};
use crate::errors::{SitelensError, SitelensResult};
use crate::helpers::prompt_generator;
use crate::prompts::audit_system_prompt::AUDIT_SYSTEM_PROMPT;
use crate::services::result_schema;
use crate::structs::accessibility_finding::AccessibilityFinding;
use crate::structs::ai::chat_completion_request::ChatCompletionRequest;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::response_format::{JsonSchemaFormat, ResponseFormat};
use crate::structs::audit_result::AuditResult;
use crate::structs::config::eval_settings::EvalSettings;
use crate::traits::result_evaluator::ResultEvaluator;

/// Issues one schema-constrained chat-completions call per run and validates
/// the returned payload. Stateless across runs; retries are the caller's
/// responsibility.
pub struct EvaluationClient {
    client: Client,
    settings: EvalSettings,
}

impl EvaluationClient {
    pub fn new(settings: EvalSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.deployment,
            self.settings.api_version
        )
    }

    fn build_request(&self, url: &str, findings: &[AccessibilityFinding]) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: AUDIT_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt_generator::generate_audit_prompt(url, findings),
                },
            ],
            max_tokens: Some(EVALUATION_MAX_TOKENS),
            temperature: Some(0.0),
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchemaFormat {
                    name: result_schema::SCHEMA_NAME.to_string(),
                    strict: true,
                    schema: result_schema::json_schema().clone(),
                },
            },
        }
    }
}

#[async_trait]
impl ResultEvaluator for EvaluationClient {
    async fn evaluate(
        &self,
        url: &str,
        findings: &[AccessibilityFinding],
    ) -> SitelensResult<AuditResult> {
        let request_body = self.build_request(url, findings);

        let response = self
            .client
            .post(self.chat_completions_url())
            .header("api-key", &self.settings.api_key)
            .header("Content-Type", "application/json")
            .timeout(evaluation_timeout())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                SitelensError::evaluation_unavailable(
                    &e.to_string(),
                    e.status().map(|s| s.as_u16()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 | 403 => SitelensError::evaluation_unavailable(
                    &format!("authentication rejected: {}", error_text),
                    Some(status.as_u16()),
                ),
                429 => SitelensError::evaluation_unavailable(
                    &format!("quota exceeded: {}", error_text),
                    Some(429),
                ),
                _ => SitelensError::evaluation_unavailable(
                    &format!("HTTP {}: {}", status, error_text),
                    Some(status.as_u16()),
                ),
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            SitelensError::malformed_response(&format!("response body is not JSON: {}", e))
        })?;

        let content = payload
            .get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                SitelensError::malformed_response("no message content in evaluation response")
            })?;

        let candidate: Value = serde_json::from_str(content).map_err(|e| {
            SitelensError::malformed_response(&format!(
                "message content is not valid JSON: {}",
                e
            ))
        })?;

        result_schema::validate(&candidate)
    }
}
