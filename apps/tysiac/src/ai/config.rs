//! Decision provider configuration.
//!
//! Standard fields are typed; anything else a provider wants stays in
//! `custom` and is read with [`ProviderConfig::get_custom`].

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for decision providers.
///
/// ```json
/// {"seed": 12345, "bid_margin": 30}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Provider-specific fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl ProviderConfig {
    /// Parse from optional JSON, falling back to an empty config on error.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::empty()
    }
}
