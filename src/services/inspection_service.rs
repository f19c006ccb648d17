use std::sync::Arc;

use async_trait::async_trait;

use crate::services::browser::{BrowserClient, CdpError, PageSession};
use crate::structs::accessibility_finding::AccessibilityFinding;
use crate::traits::page_inspector::PageInspector;

const MISSING_ALT_TEXT_ID: &str = "missing-alt-text";
const MISSING_ALT_TEXT_DESCRIPTION: &str = "Images missing alternate text";

const UNLABELED_INPUT_ID: &str = "unlabeled-form-input";
const UNLABELED_INPUT_DESCRIPTION: &str =
    "Form inputs without an associated label or accessible name";

const MISSING_ALT_TEXT_PREDICATE: &str = r#"
Array.from(document.querySelectorAll('img'))
    .filter((img) => !img.hasAttribute('alt') || img.getAttribute('alt').trim() === '')
    .map((img) => img.tagName.toLowerCase())
"#;

const UNLABELED_INPUT_PREDICATE: &str = r#"
Array.from(document.querySelectorAll('input, select, textarea'))
    .filter((el) => !['hidden', 'submit', 'button', 'reset'].includes((el.getAttribute('type') || '').toLowerCase()))
    .filter((el) => {
        const id = el.getAttribute('id');
        const referenced = id ? document.querySelector(`label[for="${CSS.escape(id)}"]`) !== null : false;
        const wrapped = el.closest('label') !== null;
        const named = el.hasAttribute('aria-label') || el.hasAttribute('aria-labelledby') || el.hasAttribute('title');
        return !referenced && !wrapped && !named;
    })
    .map((el) => el.tagName.toLowerCase())
"#;

/// Evaluates the two baseline accessibility predicates against the live DOM.
/// Inspection is advisory: any internal failure degrades to an empty finding
/// sequence and a logged warning, never a failed run.
pub struct InspectionService {
    browser_endpoint: String,
}

impl InspectionService {
    pub fn new(browser_endpoint: String) -> Self {
        Self { browser_endpoint }
    }

    async fn inspect_inner(&self, url: &str) -> Result<Vec<AccessibilityFinding>, CdpError> {
        let client = Arc::new(BrowserClient::connect(&self.browser_endpoint).await?);
        let page = BrowserClient::open_page(&client).await?;

        let checked = Self::run_checks(&page, url).await;

        if let Err(e) = page.close().await {
            log::warn!("failed to close inspection page target: {}", e);
        }

        checked
    }

    async fn run_checks(
        page: &PageSession,
        url: &str,
    ) -> Result<Vec<AccessibilityFinding>, CdpError> {
        page.navigate(url).await?;
        page.wait_for_load().await?;

        let mut findings = Vec::new();

        let missing_alt = Self::evaluate_tag_list(page, MISSING_ALT_TEXT_PREDICATE).await?;
        if !missing_alt.is_empty() {
            findings.push(AccessibilityFinding::new(
                MISSING_ALT_TEXT_ID,
                MISSING_ALT_TEXT_DESCRIPTION,
                missing_alt,
            ));
        }

        let unlabeled = Self::evaluate_tag_list(page, UNLABELED_INPUT_PREDICATE).await?;
        if !unlabeled.is_empty() {
            findings.push(AccessibilityFinding::new(
                UNLABELED_INPUT_ID,
                UNLABELED_INPUT_DESCRIPTION,
                unlabeled,
            ));
        }

        Ok(findings)
    }

    async fn evaluate_tag_list(
        page: &PageSession,
        predicate: &str,
    ) -> Result<Vec<String>, CdpError> {
        let value = page.evaluate(predicate).await?;
        let tags = value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Ok(tags)
    }
}

#[async_trait]
impl PageInspector for InspectionService {
    async fn inspect(&self, url: &str) -> Vec<AccessibilityFinding> {
        match self.inspect_inner(url).await {
            Ok(findings) => findings,
            Err(e) => {
                log::warn!(
                    "⚠️ Accessibility inspection failed, continuing without findings: {}",
                    e
                );
                Vec::new()
            }
        }
    }
}
