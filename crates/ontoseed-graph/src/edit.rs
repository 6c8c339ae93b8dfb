//! Edits: the signed envelope a batch of ops is published in.
//!
//! The content hash covers the ops only, so identical batches hash the same
//! across runs even though each edit gets a fresh id.

use serde::Serialize;

use ontoseed_core::{Id, Op};

use crate::client::GraphError;

/// Key-derivation context for edit signatures.
const SIGNING_CONTEXT: &str = "ontoseed 2024-06 edit body signature";

/// A named batch of ops, ready to be published.
#[derive(Debug, Clone, Serialize)]
pub struct Edit<'a> {
    pub id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub ops: &'a [Op],
}

impl<'a> Edit<'a> {
    pub fn new(name: impl Into<String>, ops: &'a [Op]) -> Self {
        Self {
            id: Id::generate(),
            name: name.into(),
            author: None,
            ops,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// BLAKE3 hash (hex) of the serialized ops.
    pub fn content_hash(&self) -> Result<String, GraphError> {
        let bytes =
            serde_json::to_vec(self.ops).map_err(|e| GraphError::Serialization(e.to_string()))?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }

    /// JSON request body.
    pub fn to_body(&self) -> Result<Vec<u8>, GraphError> {
        serde_json::to_vec(self).map_err(|e| GraphError::Serialization(e.to_string()))
    }
}

/// Sign a request body with a credential.
///
/// The credential is stretched into a 32-byte key with `blake3::derive_key`
/// and the body is hashed under that key. Returns lowercase hex.
pub fn sign_body(body: &[u8], signing_key: &str) -> String {
    let key = blake3::derive_key(SIGNING_CONTEXT, signing_key.as_bytes());
    blake3::keyed_hash(&key, body).to_hex().to_string()
}
