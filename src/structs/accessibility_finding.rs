use serde::{Deserialize, Serialize};

use crate::structs::element_descriptor::ElementDescriptor;

/// One detected accessibility defect class, aggregating every offending
/// element found on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityFinding {
    pub id: String,
    pub description: String,
    pub elements: Vec<ElementDescriptor>,
}

impl AccessibilityFinding {
    pub fn new(id: &str, description: &str, tags: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            elements: tags.into_iter().map(ElementDescriptor::new).collect(),
        }
    }

    pub fn occurrence_count(&self) -> usize {
        self.elements.len()
    }
}
