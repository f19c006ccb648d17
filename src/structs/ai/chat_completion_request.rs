use serde::Serialize;

use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::response_format::ResponseFormat;

/// Request body for a deployment-scoped chat-completions call. The model is
/// selected by the deployment in the URL, not by the body.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
}
