use std::{fmt, fs, path::PathBuf, sync::Arc};

use tracing::debug;

use super::error::ConfigError;

/// Somewhere serialized config bytes can be written to.
pub trait Persist: Send + Sync {
    fn persist(&self, raw: &[u8]) -> Result<(), ConfigError>;
}

/// Save capability embedded in each component config. Holds an optional
/// persistence handle; with none attached, saving is a no-op.
#[derive(Clone, Default)]
pub struct Saver {
    sink: Option<Arc<dyn Persist>>,
}

impl Saver {
    pub fn new(sink: Arc<dyn Persist>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn attach(&mut self, sink: Arc<dyn Persist>) {
        self.sink = Some(sink);
    }

    pub fn detach(&mut self) {
        self.sink = None;
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    pub fn persist(&self, raw: &[u8]) -> Result<(), ConfigError> {
        match &self.sink {
            Some(sink) => sink.persist(raw),
            None => {
                debug!("No persister attached, skipping save");
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Saver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Saver")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Writes config bytes to a file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct FilePersister {
    path: PathBuf,
}

impl FilePersister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persist for FilePersister {
    fn persist(&self, raw: &[u8]) -> Result<(), ConfigError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}
