//! Shared plumbing for component configurations: the `ComponentConfig`
//! trait a registry drives, JSON helpers, environment overlays and the
//! save capability.

pub mod duration;
pub mod env;
pub mod error;
pub mod saver;

use env::{EnvSource, ProcessEnv};
use error::ConfigError;
use saver::Saver;

use serde::Serialize;
use serde_json::Value;

/// Lifecycle every component configuration supports. A registry routes a
/// section of the cluster config document to the component whose
/// `identifier` matches the section key.
pub trait ComponentConfig {
    fn identifier(&self) -> &'static str;

    fn apply_defaults(&mut self);

    fn validate(&self) -> Result<(), ConfigError>;

    /// Resets to defaults, overlays `raw` and validates.
    fn load_serialized(&mut self, raw: &[u8]) -> Result<(), ConfigError>;

    fn to_serialized(&self) -> Result<Vec<u8>, ConfigError>;

    fn apply_env_vars(&mut self, env: &dyn EnvSource) -> Result<(), ConfigError>;

    fn display_string(&self) -> Result<String, ConfigError>;

    fn saver(&self) -> &Saver;

    /// Top-level keys left out of `display_string`.
    fn hidden_fields(&self) -> &'static [&'static str] {
        &[]
    }

    fn apply_process_env_vars(&mut self) -> Result<(), ConfigError> {
        self.apply_env_vars(&ProcessEnv)
    }

    fn notify_save(&self) -> Result<(), ConfigError> {
        let raw = self.to_serialized()?;
        self.saver().persist(&raw)
    }
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, ConfigError> {
    serde_json::to_vec_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string()))
}

pub fn to_json_without_hidden_fields<T: Serialize>(
    value: &T,
    hidden: &[&str],
) -> Result<Vec<u8>, ConfigError> {
    let mut tree =
        serde_json::to_value(value).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    if let Value::Object(fields) = &mut tree {
        for key in hidden {
            fields.remove(*key);
        }
    }

    to_json_pretty(&tree)
}
