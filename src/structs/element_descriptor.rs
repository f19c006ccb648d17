use serde::{Deserialize, Serialize};

/// Minimal locator for an element affected by a finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub tag: String,
}

impl ElementDescriptor {
    pub fn new(tag: String) -> Self {
        Self { tag }
    }
}
