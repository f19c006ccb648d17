//! Canonical shape of an audit result. One declarative definition with two
//! renderings: the runtime validator below and the JSON-schema constraint
//! document handed to the evaluator for schema-constrained decoding. Both
//! are generated from the same field and enum constants so they cannot
//! drift apart.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::errors::{SitelensError, SitelensResult};
use crate::structs::audit_result::AuditResult;

pub const BREAKDOWN_FIELDS: [&str; 5] = [
    "accessibility",
    "contentClarity",
    "navigation",
    "visualDesign",
    "mobileFriendliness",
];

pub const IMPROVEMENT_TEXT_FIELDS: [&str; 3] = ["title", "why", "how"];

pub const PRIORITY_VALUES: [&str; 3] = ["high", "medium", "low"];

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

pub const SCHEMA_NAME: &str = "ux_audit_result";

static JSON_SCHEMA: Lazy<Value> = Lazy::new(build_json_schema);

/// The constraint document supplied to the evaluator.
pub fn json_schema() -> &'static Value {
    &JSON_SCHEMA
}

fn score_schema() -> Value {
    json!({ "type": "number", "minimum": SCORE_MIN, "maximum": SCORE_MAX })
}

fn build_json_schema() -> Value {
    let mut breakdown_properties = serde_json::Map::new();
    for field in BREAKDOWN_FIELDS {
        breakdown_properties.insert(field.to_string(), score_schema());
    }

    let mut improvement_properties = serde_json::Map::new();
    for field in IMPROVEMENT_TEXT_FIELDS {
        improvement_properties.insert(field.to_string(), json!({ "type": "string" }));
    }
    improvement_properties.insert(
        "priority".to_string(),
        json!({ "type": "string", "enum": PRIORITY_VALUES }),
    );

    json!({
        "type": "object",
        "properties": {
            "overall": score_schema(),
            "breakdown": {
                "type": "object",
                "properties": Value::Object(breakdown_properties),
                "required": BREAKDOWN_FIELDS,
                "additionalProperties": false
            },
            "improvements": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": Value::Object(improvement_properties),
                    "required": ["title", "why", "how", "priority"],
                    "additionalProperties": false
                }
            },
            "summary": {
                "type": "object",
                "properties": {
                    "executive": { "type": "string" },
                    "developerTodo": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["executive", "developerTodo"],
                "additionalProperties": false
            }
        },
        "required": ["overall", "breakdown", "improvements", "summary"],
        "additionalProperties": false
    })
}

/// Validates a candidate payload against the schema. Unknown top-level
/// fields are tolerated; every required field, type, range and enum
/// constraint must hold. On rejection the error names each violated field
/// by its dotted path.
pub fn validate(candidate: &Value) -> SitelensResult<AuditResult> {
    let mut violations: Vec<String> = Vec::new();

    check_score(candidate.get("overall"), "overall", &mut violations);

    match candidate.get("breakdown") {
        Some(Value::Object(breakdown)) => {
            for field in BREAKDOWN_FIELDS {
                check_score(
                    breakdown.get(field),
                    &format!("breakdown.{}", field),
                    &mut violations,
                );
            }
        }
        _ => violations.push("breakdown".to_string()),
    }

    match candidate.get("improvements") {
        Some(Value::Array(entries)) => {
            for (index, entry) in entries.iter().enumerate() {
                check_improvement(entry, index, &mut violations);
            }
        }
        _ => violations.push("improvements".to_string()),
    }

    match candidate.get("summary") {
        Some(Value::Object(summary)) => {
            if !summary.get("executive").is_some_and(Value::is_string) {
                violations.push("summary.executive".to_string());
            }
            match summary.get("developerTodo") {
                Some(Value::Array(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        if !item.is_string() {
                            violations.push(format!("summary.developerTodo[{}]", index));
                        }
                    }
                }
                _ => violations.push("summary.developerTodo".to_string()),
            }
        }
        _ => violations.push("summary".to_string()),
    }

    if !violations.is_empty() {
        return Err(SitelensError::schema_violation(violations));
    }

    serde_json::from_value(candidate.clone())
        .map_err(|e| SitelensError::schema_violation(vec![e.to_string()]))
}

fn check_score(value: Option<&Value>, path: &str, violations: &mut Vec<String>) {
    match value.and_then(Value::as_f64) {
        Some(score) if (SCORE_MIN..=SCORE_MAX).contains(&score) => {}
        _ => violations.push(path.to_string()),
    }
}

fn check_improvement(entry: &Value, index: usize, violations: &mut Vec<String>) {
    for field in IMPROVEMENT_TEXT_FIELDS {
        if !entry.get(field).is_some_and(Value::is_string) {
            violations.push(format!("improvements[{}].{}", index, field));
        }
    }

    match entry.get("priority").and_then(Value::as_str) {
        Some(priority) if PRIORITY_VALUES.contains(&priority) => {}
        _ => violations.push(format!("improvements[{}].priority", index)),
    }
}
