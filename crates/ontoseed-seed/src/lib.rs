//! ontoseed-seed: Seeds a fixed course ontology into a knowledge-graph space.
//!
//! Builds one batch of entity-creation ops from the static seed table,
//! prints it, and publishes it to the configured space in a single call.

pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod seed;
