use async_trait::async_trait;

use crate::structs::accessibility_finding::AccessibilityFinding;

#[async_trait]
pub trait PageInspector: Send + Sync {
    /// Surfaces accessibility defects on the page. Must not fail the run:
    /// implementations degrade internal errors to an empty sequence.
    async fn inspect(&self, url: &str) -> Vec<AccessibilityFinding>;
}
