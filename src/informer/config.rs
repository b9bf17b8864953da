use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{
    duration,
    env::{self, EnvSource},
    error::ConfigError,
    saver::Saver,
    to_json_pretty, to_json_without_hidden_fields, ComponentConfig,
};

pub const CONFIG_KEY: &str = "numpin";
pub const ENV_CONFIG_KEY: &str = "cluster_numpin";

pub const DEFAULT_METRIC_TTL: Duration = Duration::from_secs(10);

const METRIC_TTL_FIELD: &str = "metric_ttl";

/// Configuration for the numpin informer.
#[derive(Debug, Clone)]
pub struct Config {
    pub saver: Saver,
    /// How long a reported metric stays valid.
    pub metric_ttl: Duration,
}

/// On-disk shape of [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedConfig {
    #[serde(default)]
    pub metric_ttl: String,
}

impl Config {
    pub fn new() -> Self {
        let mut cfg = Self {
            saver: Saver::default(),
            metric_ttl: Duration::ZERO,
        };
        cfg.apply_defaults();
        cfg
    }

    fn to_serialized_config(&self) -> SerializedConfig {
        SerializedConfig {
            metric_ttl: duration::format(self.metric_ttl),
        }
    }

    fn apply_serialized_config(&mut self, scfg: &SerializedConfig) -> Result<(), ConfigError> {
        self.metric_ttl = duration::parse_or_zero(METRIC_TTL_FIELD, &scfg.metric_ttl);
        self.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// The saver is a handle, not a setting.
impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.metric_ttl == other.metric_ttl
    }
}

impl Eq for Config {}

impl ComponentConfig for Config {
    fn identifier(&self) -> &'static str {
        CONFIG_KEY
    }

    fn apply_defaults(&mut self) {
        self.metric_ttl = DEFAULT_METRIC_TTL;
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.metric_ttl.is_zero() {
            return Err(ConfigError::Validation(format!(
                "{}.{} is invalid",
                CONFIG_KEY, METRIC_TTL_FIELD
            )));
        }
        Ok(())
    }

    fn load_serialized(&mut self, raw: &[u8]) -> Result<(), ConfigError> {
        let scfg: SerializedConfig =
            serde_json::from_slice(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

        self.apply_defaults();
        self.apply_serialized_config(&scfg)
    }

    fn to_serialized(&self) -> Result<Vec<u8>, ConfigError> {
        to_json_pretty(&self.to_serialized_config())
    }

    fn apply_env_vars(&mut self, source: &dyn EnvSource) -> Result<(), ConfigError> {
        let mut scfg = self.to_serialized_config();
        env::overlay_field(
            source,
            ENV_CONFIG_KEY,
            METRIC_TTL_FIELD,
            &mut scfg.metric_ttl,
        )?;
        self.apply_serialized_config(&scfg)
    }

    fn display_string(&self) -> Result<String, ConfigError> {
        let raw =
            to_json_without_hidden_fields(&self.to_serialized_config(), self.hidden_fields())?;
        String::from_utf8(raw).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn saver(&self) -> &Saver {
        &self.saver
    }
}
