//! Publishing op batches to a remote space.
//!
//! One call, one request. Failures are returned as-is; nothing is retried.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use ontoseed_core::{Id, Op, SpaceId};

use crate::client::{GraphError, PublishClient};
use crate::edit::{sign_body, Edit};

/// Header carrying the signature of the request body.
pub const SIGNATURE_HEADER: &str = "x-ontoseed-signature";

/// Header carrying the content hash of the published ops.
pub const CONTENT_HASH_HEADER: &str = "x-ontoseed-content-hash";

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub space_id: SpaceId,
    pub edit_id: Id,
    pub content_hash: String,
    pub op_count: usize,
    pub cid: Option<String>,
    pub tx_hash: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Writes a batch of ops to a space.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish_ops(&self, ops: &[Op], space_id: &SpaceId)
        -> Result<PublishReceipt, GraphError>;
}

/// Response body of the edits endpoint. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct PublishResponse {
    #[serde(default)]
    edit_id: Option<Id>,
    #[serde(default)]
    cid: Option<String>,
    #[serde(default)]
    tx_hash: Option<String>,
}

#[async_trait]
impl Publisher for PublishClient {
    async fn publish_ops(
        &self,
        ops: &[Op],
        space_id: &SpaceId,
    ) -> Result<PublishReceipt, GraphError> {
        let signing_key = self
            .config
            .signing_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GraphError::MissingCredential)?;

        let mut edit = Edit::new(self.config.edit_name.clone(), ops);
        if let Some(author) = &self.config.author {
            edit = edit.with_author(author.clone());
        }

        let body = edit.to_body()?;
        let content_hash = edit.content_hash()?;
        let signature = sign_body(&body, signing_key);
        let url = self.endpoint(space_id)?;

        tracing::info!(
            space_id = %space_id,
            edit_id = %edit.id,
            op_count = ops.len(),
            "Publishing edit"
        );

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .header(CONTENT_HASH_HEADER, content_hash.as_str())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GraphError::Rejected {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        let remote: PublishResponse = if text.trim().is_empty() {
            PublishResponse::default()
        } else {
            serde_json::from_str(&text).map_err(|e| GraphError::Serialization(e.to_string()))?
        };

        let receipt = PublishReceipt {
            space_id: space_id.clone(),
            edit_id: remote.edit_id.unwrap_or(edit.id),
            content_hash,
            op_count: ops.len(),
            cid: remote.cid,
            tx_hash: remote.tx_hash,
            published_at: Utc::now(),
        };

        tracing::info!(
            space_id = %space_id,
            edit_id = %receipt.edit_id,
            cid = receipt.cid.as_deref().unwrap_or(""),
            "Edit published"
        );
        Ok(receipt)
    }
}
