use serde::{Deserialize, Serialize};

use crate::enums::priority::Priority;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub title: String,
    pub why: String,
    pub how: String,
    pub priority: Priority,
}
