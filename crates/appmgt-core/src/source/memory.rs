//! In-memory configuration source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{ConfigNode, ConfigSource};

/// In-memory configuration source
///
/// Sections are keyed by the local name of their root node.
///
/// # Example
///
/// ```
/// use appmgt_core::source::{ConfigNode, ConfigSource, MemoryConfigSource, QualifiedName};
///
/// let source = MemoryConfigSource::new().with_section(
///     ConfigNode::new(QualifiedName::identity("ServiceProvidersManagement"))
///         .with_text_child(QualifiedName::identity("ClaimDialect"), "http://example.org/claims"),
/// );
/// assert!(source.config_element("ServiceProvidersManagement").is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfigSource {
    sections: RwLock<HashMap<String, ConfigNode>>,
}

impl MemoryConfigSource {
    /// Create a source with no sections
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(self, section: ConfigNode) -> Self {
        self.set_section(section);
        self
    }

    /// Add or replace a section
    pub fn set_section(&self, section: ConfigNode) {
        self.sections
            .write()
            .insert(section.name.local.clone(), section);
    }

    pub fn remove_section(&self, name: &str) -> Option<ConfigNode> {
        self.sections.write().remove(name)
    }

    pub fn clear(&self) {
        self.sections.write().clear();
    }
}

impl ConfigSource for MemoryConfigSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn config_element(&self, section: &str) -> Option<ConfigNode> {
        self.sections.read().get(section).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::QualifiedName;

    #[test]
    fn test_memory_source_sections() {
        let source = MemoryConfigSource::new();
        assert!(source.config_element("ServiceProvidersManagement").is_none());

        source.set_section(ConfigNode::new(QualifiedName::identity("ServiceProvidersManagement")));
        assert!(source.config_element("ServiceProvidersManagement").is_some());

        assert!(source.remove_section("ServiceProvidersManagement").is_some());
        assert!(source.config_element("ServiceProvidersManagement").is_none());
    }

    #[test]
    fn test_memory_source_clear() {
        let source = MemoryConfigSource::new()
            .with_section(ConfigNode::new(QualifiedName::identity("A")))
            .with_section(ConfigNode::new(QualifiedName::identity("B")));
        source.clear();
        assert!(source.config_element("A").is_none());
        assert_eq!(source.name(), "memory");
    }
}
