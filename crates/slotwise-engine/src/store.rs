//! Configuration persistence.
//!
//! The availability config lives as a single schema-flexible JSON document;
//! there is no versioning, so a breaking schema change is the caller's
//! problem to migrate.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::AvailabilityConfig;
use crate::error::Result;

/// Persistence port for the owner's availability configuration.
///
/// `read` returning `Ok(None)` means no configuration has been written
/// yet; callers surface that as
/// [`SlotwiseError::ConfigurationMissing`](crate::SlotwiseError::ConfigurationMissing)
/// before invoking slot computation.
pub trait ConfigStore {
    fn read(&self) -> Result<Option<AvailabilityConfig>>;

    /// Persist the config. The document is validated first
    /// ([`AvailabilityConfig::validate`]); an invalid config is rejected
    /// and the stored copy is left untouched.
    fn write(&self, config: &AvailabilityConfig) -> Result<()>;

    /// Remove the stored config. Deleting an absent config is not an error.
    fn delete(&self) -> Result<()>;
}

/// File-backed store keeping the config as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn read(&self) -> Result<Option<AvailabilityConfig>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let config = serde_json::from_str(&raw)?;
        Ok(Some(config))
    }

    fn write(&self, config: &AvailabilityConfig) -> Result<()> {
        config.validate()?;
        let doc = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, doc)?;
        debug!(path = %self.path.display(), "availability config written");
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
