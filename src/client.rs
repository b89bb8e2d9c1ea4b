//! Wikipedia REST API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{Result, ResultItem, SearchBackend, SearchError};

/// Client for the Wikipedia title search REST endpoint.
pub struct WikiClient {
    client: Client,
    language: String,
    base_url: Option<String>,
}

impl WikiClient {
    /// Creates a new client for English Wikipedia.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent("Mozilla/5.0 (compatible; wikisearch/0.1)")
                .build()
                .expect("Failed to create HTTP client"),
            language: "en".to_string(),
            base_url: None,
        }
    }

    /// Sets the Wikipedia language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Overrides the API base URL. Used to point the client at a local
    /// server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Returns the configured language.
    pub fn language(&self) -> &str {
        &self.language
    }

    fn base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => format!("https://{}.wikipedia.org/w/rest.php/v1", self.language),
        }
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    // The REST API omits the field entirely in some error-shaped payloads;
    // that is treated as zero results, not a decode failure.
    pages: Option<Vec<ResultItem>>,
}

#[async_trait]
impl SearchBackend for WikiClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ResultItem>> {
        let url = format!(
            "{}/search/title?q={}&limit={}",
            self.base_url(),
            urlencoding::encode(query),
            limit
        );
        debug!(%url, "dispatching title search");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let body = response.text().await?;
        let payload: SearchResponse = serde_json::from_str(&body)?;

        Ok(payload.pages.unwrap_or_default())
    }
}
