//! YAML file configuration source
//!
//! Each entry under `sections` becomes a section node whose children are the
//! mapping's keys, all in one namespace:
//!
//! ```yaml
//! namespace: http://wso2.org/projects/carbon/application-authentication.xml  # optional
//! sections:
//!   ServiceProvidersManagement:
//!     ApplicationDAO: jdbc-application-store
//!     ClaimDialect: http://example.org/claims
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::traits::{
    ConfigNode, ConfigSource, QualifiedName, SourceResult, IDENTITY_NAMESPACE,
};
use crate::logging::{Logger, NoOpLogger, SharedLogger};

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "APPMGT_CONFIG";

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Namespace for every element; the identity namespace when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigFile {
    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(IDENTITY_NAMESPACE)
    }

    /// Build the node tree for one section
    pub fn section(&self, name: &str) -> Option<ConfigNode> {
        let entries = self.sections.get(name)?;
        let ns = self.namespace();
        let node = entries.iter().fold(
            ConfigNode::new(QualifiedName::new(ns, name)),
            |node, (child, text)| node.with_text_child(QualifiedName::new(ns, child.as_str()), text.as_str()),
        );
        Some(node)
    }
}

/// `$APPMGT_CONFIG`, else `<user config dir>/appmgt/config.yaml`
pub fn default_config_path() -> PathBuf {
    config_path_from(std::env::var(CONFIG_PATH_ENV).ok())
}

fn config_path_from(override_path: Option<String>) -> PathBuf {
    match override_path {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("appmgt")
            .join("config.yaml"),
    }
}

/// File-based configuration source
///
/// The file is parsed once and cached; a missing file reads as an empty
/// document. Parse failures are logged and also read as empty, so startup
/// continues on defaults.
///
/// ```no_run
/// use appmgt_core::source::FileConfigSource;
///
/// let source = FileConfigSource::new("/etc/appmgt/config.yaml");
/// ```
pub struct FileConfigSource {
    path: PathBuf,
    cache: RwLock<Option<ConfigFile>>,
    logger: SharedLogger,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Source at [`default_config_path`]
    pub fn user() -> Self {
        Self::new(default_config_path())
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> SourceResult<ConfigFile> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn get_config(&self) -> SourceResult<ConfigFile> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        let config = self.load()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Drop the cache and re-read the file
    pub fn reload(&self) -> SourceResult<ConfigFile> {
        *self.cache.write() = None;
        self.get_config()
    }
}

impl std::fmt::Debug for FileConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigSource")
            .field("path", &self.path)
            .finish()
    }
}

impl ConfigSource for FileConfigSource {
    fn name(&self) -> &str {
        "file"
    }

    fn config_element(&self, section: &str) -> Option<ConfigNode> {
        match self.get_config() {
            Ok(config) => config.section(section),
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to read configuration file {}: {}",
                    self.path.display(),
                    e
                ));
                None
            }
        }
    }
}
