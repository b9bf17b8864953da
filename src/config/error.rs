#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    Validation(String),
    EnvOverlay(String),
    Serialize(String),
    Io(std::io::Error),
}

impl ConfigError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Validation(_))
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config JSON: {}", msg),
            ConfigError::Validation(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::EnvOverlay(msg) => write!(f, "Environment overlay failed: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Config serialization failed: {}", msg),
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}
