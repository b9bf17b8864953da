pub mod config;
pub mod informer;

pub use config::{error::ConfigError, ComponentConfig};
