use serde::Serialize;
use serde_json::Value;

/// Schema-constrained decoding request: the evaluator is told to emit a
/// response that structurally conforms to the supplied JSON schema.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: Value,
}
