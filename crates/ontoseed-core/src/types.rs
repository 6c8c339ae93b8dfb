//! Core value types for graph mutations.
//!
//! Ids render as 32 lowercase hex characters without dashes, which is the
//! form the graph API accepts and the form printed in the op dump.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::OntoseedError;

// ── Identifiers ───────────────────────────────────────────────────

/// Namespace for ids derived from other ids (relation ids and the like).
const DERIVED_NAMESPACE: Uuid = Uuid::from_u128(0x3c1f0e2a_9d7b_4e58_a61f_2b9c4d0e7a13);

/// Identifier of an entity or relation in the knowledge graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub Uuid);

impl Id {
    /// Build a constant id from its 128-bit value.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derive a stable id from an ordered list of ids.
    ///
    /// The same inputs always produce the same id.
    pub fn derived(parts: &[Id]) -> Self {
        let mut bytes = Vec::with_capacity(parts.len() * 16);
        for part in parts {
            bytes.extend_from_slice(part.0.as_bytes());
        }
        Self(Uuid::new_v5(&DERIVED_NAMESPACE, &bytes))
    }

    /// Parse an id from hex, with or without dashes.
    pub fn parse(raw: &str) -> Result<Self, OntoseedError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|e| OntoseedError::InvalidId {
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Id::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// The remote graph namespace operations are published into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(String);

impl SpaceId {
    /// Accept any non-blank space id. The remote side decides if it exists.
    pub fn new(raw: impl Into<String>) -> Result<Self, OntoseedError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OntoseedError::Config("space id is empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Operations ────────────────────────────────────────────────────

/// A typed value attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Text(String),
}

/// A property/value pair on an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub property: Id,
    pub value: Value,
}

/// Create an entity with its initial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEntity {
    pub id: Id,
    pub values: Vec<PropertyValue>,
}

/// Create a directed relation between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRelation {
    pub id: Id,
    #[serde(rename = "type")]
    pub relation_type: Id,
    pub from: Id,
    pub to: Id,
}

/// One graph mutation, queued for publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Op {
    CreateEntity(CreateEntity),
    CreateRelation(CreateRelation),
}

impl Op {
    /// Id of the entity or relation this op creates.
    pub fn id(&self) -> Id {
        match self {
            Op::CreateEntity(e) => e.id,
            Op::CreateRelation(r) => r.id,
        }
    }
}
