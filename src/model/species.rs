//! Species records attached to annotations.

use serde::{Deserialize, Serialize};

/// A bat species assignable to an annotation. Taxonomy fields are required
/// on the wire; only the six-letter code is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub species_code: String,
    pub family: String,
    pub genus: String,
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_code_6: Option<String>,
}

impl Species {
    pub fn new(species_code: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            species_code: species_code.into(),
            family: String::new(),
            genus: String::new(),
            common_name: common_name.into(),
            species_code_6: None,
        }
    }

    /// Text shown on overlay labels: the short code when non-empty,
    /// otherwise the common name.
    pub fn label(&self) -> &str {
        if self.species_code.is_empty() {
            &self.common_name
        } else {
            &self.species_code
        }
    }
}
