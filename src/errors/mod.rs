use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum SitelensError {
    // Pre-flight errors
    InvalidInput {
        url: String,
        reason: String,
    },
    MissingConfiguration {
        variables: Vec<String>,
    },

    // Capture stage errors
    CaptureFailed {
        url: String,
        reason: String,
    },

    // Evaluation stage errors
    EvaluationUnavailable {
        reason: String,
        status_code: Option<u16>,
    },
    MalformedResponse {
        reason: String,
    },
    SchemaViolation {
        violations: Vec<String>,
    },

    // Persistence errors
    PersistenceFailed {
        path: String,
        reason: String,
    },
}

impl SitelensError {
    pub fn invalid_input(url: &str, reason: &str) -> Self {
        Self::InvalidInput {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_configuration(variables: Vec<String>) -> Self {
        Self::MissingConfiguration { variables }
    }

    pub fn capture_failed(url: &str, reason: &str) -> Self {
        Self::CaptureFailed {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn evaluation_unavailable(reason: &str, status_code: Option<u16>) -> Self {
        Self::EvaluationUnavailable {
            reason: reason.to_string(),
            status_code,
        }
    }

    pub fn malformed_response(reason: &str) -> Self {
        Self::MalformedResponse {
            reason: reason.to_string(),
        }
    }

    pub fn schema_violation(violations: Vec<String>) -> Self {
        Self::SchemaViolation { violations }
    }

    pub fn persistence_failed(path: &str, reason: &str) -> Self {
        Self::PersistenceFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { url, reason } => {
                format!("Invalid target URL '{}': {}\n💡 Provide an absolute http(s) URL, e.g. https://example.com", url, reason)
            }
            Self::MissingConfiguration { variables } => {
                format!("Missing required configuration: {}\n💡 Export the listed environment variables before running an audit", variables.join(", "))
            }
            Self::CaptureFailed { url, reason } => {
                format!("Screenshot capture failed for '{}': {}\n💡 Check that Chrome is running with remote debugging enabled and the URL is reachable", url, reason)
            }
            Self::EvaluationUnavailable { reason, status_code } => {
                let mut msg = format!("Evaluation service unavailable: {}", reason);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your endpoint, credential and quota, then retry the run");
                msg
            }
            Self::MalformedResponse { reason } => {
                format!("Evaluation response could not be parsed: {}\n💡 The model returned unstructured output; rerunning the audit usually resolves this", reason)
            }
            Self::SchemaViolation { violations } => {
                format!("Evaluation response violates the result schema (fields: {})\n💡 Rerun the audit; persistent violations indicate a schema/deployment mismatch", violations.join(", "))
            }
            Self::PersistenceFailed { path, reason } => {
                format!("Failed to write audit artifacts at '{}': {}\n💡 Check directory permissions and free disk space", path, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for SitelensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SitelensError {}

/// Result type alias for sitelens operations
pub type SitelensResult<T> = Result<T, SitelensError>;

impl From<serde_json::Error> for SitelensError {
    fn from(error: serde_json::Error) -> Self {
        SitelensError::MalformedResponse {
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SitelensError {
    fn from(error: reqwest::Error) -> Self {
        SitelensError::EvaluationUnavailable {
            reason: error.to_string(),
            status_code: error.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_lists_every_variable() {
        let error = SitelensError::missing_configuration(vec![
            "AZURE_OPENAI_ENDPOINT".to_string(),
            "AZURE_OPENAI_API_KEY".to_string(),
        ]);

        let message = error.user_message();
        assert!(message.contains("AZURE_OPENAI_ENDPOINT"));
        assert!(message.contains("AZURE_OPENAI_API_KEY"));
    }

    #[test]
    fn schema_violation_names_violated_fields() {
        let error = SitelensError::schema_violation(vec![
            "breakdown.navigation".to_string(),
            "improvements[0].priority".to_string(),
        ]);

        let message = error.user_message();
        assert!(message.contains("breakdown.navigation"));
        assert!(message.contains("improvements[0].priority"));
    }
}
