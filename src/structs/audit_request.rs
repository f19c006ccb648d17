use chrono::{DateTime, Utc};
use url::Url;

use crate::errors::{SitelensError, SitelensResult};

/// Immutable input to a single audit run. Construction validates the target
/// URL before any external call is made.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub url: Url,
    pub created_at: DateTime<Utc>,
}

impl AuditRequest {
    pub fn new(raw_url: &str) -> SitelensResult<Self> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            return Err(SitelensError::invalid_input(raw_url, "URL is empty"));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| SitelensError::invalid_input(raw_url, &e.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SitelensError::invalid_input(
                raw_url,
                "only http and https URLs are supported",
            ));
        }

        if url.host_str().is_none() {
            return Err(SitelensError::invalid_input(raw_url, "URL has no host"));
        }

        Ok(Self {
            url,
            created_at: Utc::now(),
        })
    }
}
