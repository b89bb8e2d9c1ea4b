//! Search result types.

use serde::{Deserialize, Serialize};

/// Maximum number of results requested from the search service per query.
pub const RESULT_LIMIT: usize = 10;

/// Text shown in place of a missing or empty description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Page identifier, unique per result and used to build the article link.
    pub id: u64,
    /// Page title.
    pub title: String,
    /// Short description, absent for some pages.
    #[serde(default)]
    pub description: Option<String>,
}

impl ResultItem {
    /// Creates a new result item.
    pub fn new(id: u64, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description,
        }
    }

    /// Returns the canonical article URL for this result.
    pub fn article_url(&self, language: &str) -> String {
        format!("https://{}.wikipedia.org/?curid={}", language, self.id)
    }

    /// Returns the description, substituting a placeholder when it is
    /// absent or empty.
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => NO_DESCRIPTION_PLACEHOLDER,
        }
    }
}
