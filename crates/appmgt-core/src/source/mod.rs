//! Configuration sources
//!
//! A source hands out configuration sections as trees of namespaced nodes:
//! - `MemoryConfigSource`: In-memory, for tests and embedding hosts
//! - `FileConfigSource`: YAML file (user level or explicit path)

mod traits;
mod memory;
mod file;

pub use traits::{
    ConfigNode, ConfigSource, QualifiedName, SourceError, SourceResult, IDENTITY_NAMESPACE,
};
pub use memory::MemoryConfigSource;
pub use file::{default_config_path, ConfigFile, FileConfigSource, CONFIG_PATH_ENV};
