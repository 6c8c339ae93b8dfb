//! ontoseed-core: Shared types and error handling for the ontology seeder.
//!
//! This crate provides the foundational types used across all ontoseed components:
//! - Identifiers (`Id`) for graph entities and relations
//! - Space identifiers for the publish target
//! - Graph operations (`Op`) produced by the entity constructor
//! - Well-known system ids (meta-types and system properties)
//! - Common error types

pub mod error;
pub mod system;
pub mod types;

pub use error::OntoseedError;
pub use types::{CreateEntity, CreateRelation, Id, Op, PropertyValue, SpaceId, Value};
