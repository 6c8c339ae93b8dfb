//! HTTP client and connection settings for the graph API.

use std::time::Duration;

use ontoseed_core::SpaceId;

/// Errors from entity construction and publishing.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Entity construction error: {0}")]
    Construction(String),

    #[error("No signing key configured for publishing")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Publish rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Configuration for publishing to the graph API.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub api_url: String,
    /// Credential used to sign edit bodies. Checked at publish time.
    pub signing_key: Option<String>,
    pub edit_name: String,
    pub author: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            signing_key: None,
            edit_name: "Seed ontology".to_string(),
            author: None,
            timeout_secs: 30,
        }
    }
}

/// Graph API publisher.
///
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct PublishClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: PublishConfig,
}

impl PublishClient {
    /// Build the HTTP client. No request is made here.
    pub fn new(config: PublishConfig) -> Result<Self, GraphError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::debug!(api_url = %config.api_url, "Publish client ready");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// URL edits for `space_id` are posted to.
    ///
    /// The space id is always a single escaped path segment.
    pub fn endpoint(&self, space_id: &SpaceId) -> Result<reqwest::Url, GraphError> {
        let invalid = |reason: String| GraphError::InvalidUrl {
            url: self.config.api_url.clone(),
            reason,
        };

        let mut url =
            reqwest::Url::parse(&self.config.api_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(["spaces", space_id.as_str(), "edits"]);
        Ok(url)
    }
}
