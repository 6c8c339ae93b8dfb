//! Configuration for the seeder.

use serde::Deserialize;

use ontoseed_core::SpaceId;
use ontoseed_graph::PublishConfig;

use crate::error::{Result, SeedError};

/// Space id variable used by existing deployments.
pub const LEGACY_SPACE_ID_VAR: &str = "DEMO_SPACE_ID";

/// Signing key variable used by existing deployments.
pub const LEGACY_SIGNING_KEY_VAR: &str = "PK_SW";

/// Top-level seed configuration.
///
/// Loaded from the `[seed]` section of `ontoseed.toml`, `ONTOSEED__SEED__`
/// environment variables, and the legacy `DEMO_SPACE_ID` / `PK_SW` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Target space. Required.
    #[serde(default)]
    pub space_id: Option<String>,

    /// Credential the publisher signs edits with.
    #[serde(default)]
    pub signing_key: Option<String>,

    /// Base URL of the graph API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Name attached to the published edit.
    #[serde(default = "default_edit_name")]
    pub edit_name: String,

    #[serde(default)]
    pub author: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Build and print ops without publishing.
    #[serde(default)]
    pub dry_run: bool,
}

impl SeedConfig {
    /// The configured space id, or a config error if it is missing or blank.
    pub fn require_space_id(&self) -> Result<SpaceId> {
        let raw = self.space_id.as_deref().unwrap_or_default();
        if raw.trim().is_empty() {
            return Err(SeedError::Config(format!(
                "Missing space id: set {LEGACY_SPACE_ID_VAR}, ONTOSEED__SEED__SPACE_ID, or --space-id"
            )));
        }
        Ok(SpaceId::new(raw)?)
    }

    /// The configured signing key, or a config error if it is missing or blank.
    pub fn require_signing_key(&self) -> Result<&str> {
        match self.signing_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SeedError::Config(format!(
                "Missing signing key: set {LEGACY_SIGNING_KEY_VAR} or ONTOSEED__SEED__SIGNING_KEY"
            ))),
        }
    }

    /// Settings for the graph publisher.
    pub fn publish_config(&self) -> PublishConfig {
        PublishConfig {
            api_url: self.api_url.clone(),
            signing_key: self.signing_key.clone(),
            edit_name: self.edit_name.clone(),
            author: self.author.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn default_api_url() -> String {
    PublishConfig::default().api_url
}

fn default_edit_name() -> String {
    PublishConfig::default().edit_name
}

fn default_timeout_secs() -> u64 {
    PublishConfig::default().timeout_secs
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            signing_key: None,
            api_url: default_api_url(),
            edit_name: default_edit_name(),
            author: None,
            timeout_secs: default_timeout_secs(),
            dry_run: false,
        }
    }
}

/// Load seed configuration.
///
/// Sources, lowest priority first: `<file_prefix>.toml` (optional),
/// `ONTOSEED__*` environment variables, then the legacy variables.
/// Environment values stay strings until deserialized, so all-digit keys and
/// space ids keep every digit.
pub fn load_seed_config(file_prefix: &str) -> Result<SeedConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(config::Environment::with_prefix("ONTOSEED").separator("__"))
        .set_override_option("seed.space_id", std::env::var(LEGACY_SPACE_ID_VAR).ok())?
        .set_override_option(
            "seed.signing_key",
            std::env::var(LEGACY_SIGNING_KEY_VAR).ok(),
        )?
        .build()?;

    match cfg.get::<SeedConfig>("seed") {
        Ok(c) => Ok(c),
        Err(config::ConfigError::NotFound(_)) => Ok(SeedConfig::default()),
        Err(e) => Err(e.into()),
    }
}
