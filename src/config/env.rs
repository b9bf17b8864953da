use std::collections::HashMap;
use std::env::VarError;

use tracing::debug;

use super::error::ConfigError;

/// Source of environment-style variables. Configs read overlays through this
/// instead of touching the process environment directly.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::EnvOverlay(format!(
                "{} is not valid unicode: {:?}",
                key, raw
            ))),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(key).cloned())
    }
}

pub fn env_key(prefix: &str, field: &str) -> String {
    format!("{}_{}", prefix, field).to_uppercase()
}

/// Overwrites `target` with the variable for `prefix` + `field`, if set.
///
/// The underscored key (`CLUSTER_NUMPIN_METRIC_TTL`) wins; the run-together
/// key (`CLUSTER_NUMPIN_METRICTTL`) is consulted only when it is absent.
/// Returns whether an override was applied.
pub fn overlay_field(
    env: &dyn EnvSource,
    prefix: &str,
    field: &str,
    target: &mut String,
) -> Result<bool, ConfigError> {
    let primary = env_key(prefix, field);
    let compact = env_key(prefix, &field.replace('_', ""));

    let mut keys = vec![primary];
    if compact != keys[0] {
        keys.push(compact);
    }

    for key in keys {
        if let Some(value) = env.lookup(&key)? {
            debug!("Applying {} from environment", key);
            *target = value;
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_key_is_uppercased() {
        assert_eq!(
            env_key("cluster_numpin", "metric_ttl"),
            "CLUSTER_NUMPIN_METRIC_TTL"
        );
    }

    #[test]
    fn test_overlay_replaces_when_present() {
        let vars = env(&[("CLUSTER_NUMPIN_METRIC_TTL", "5m")]);
        let mut value = "10s".to_string();

        let applied = overlay_field(&vars, "cluster_numpin", "metric_ttl", &mut value).unwrap();
        assert!(applied);
        assert_eq!(value, "5m");
    }

    #[test]
    fn test_overlay_leaves_value_when_absent() {
        let vars = env(&[("CLUSTER_OTHER_METRIC_TTL", "5m")]);
        let mut value = "10s".to_string();

        let applied = overlay_field(&vars, "cluster_numpin", "metric_ttl", &mut value).unwrap();
        assert!(!applied);
        assert_eq!(value, "10s");
    }

    #[test]
    fn test_overlay_prefers_underscored_key() {
        let vars = env(&[
            ("CLUSTER_NUMPIN_METRIC_TTL", "1m"),
            ("CLUSTER_NUMPIN_METRICTTL", "2m"),
        ]);
        let mut value = String::new();

        overlay_field(&vars, "cluster_numpin", "metric_ttl", &mut value).unwrap();
        assert_eq!(value, "1m");
    }

    #[test]
    fn test_overlay_falls_back_to_compact_key() {
        let vars = env(&[("CLUSTER_NUMPIN_METRICTTL", "2m")]);
        let mut value = "10s".to_string();

        overlay_field(&vars, "cluster_numpin", "metric_ttl", &mut value).unwrap();
        assert_eq!(value, "2m");
    }

    #[test]
    fn test_overlay_applies_empty_value() {
        let vars = env(&[("CLUSTER_NUMPIN_METRIC_TTL", "")]);
        let mut value = "10s".to_string();

        assert!(overlay_field(&vars, "cluster_numpin", "metric_ttl", &mut value).unwrap());
        assert!(value.is_empty());
    }

    #[test]
    fn test_process_env_missing_key() {
        let found = ProcessEnv
            .lookup("NUMPIN_TEST_SURELY_UNSET_VARIABLE_7f3a")
            .unwrap();
        assert!(found.is_none());
    }
}
