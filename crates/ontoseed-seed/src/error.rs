//! Error types for the ontoseed-seed crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to load config: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] ontoseed_core::OntoseedError),

    #[error("Graph error: {0}")]
    Graph(#[from] ontoseed_graph::GraphError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeedError>;
