//! Configuration source trait and node model

use std::fmt;

/// Namespace that application management configuration elements live in
pub const IDENTITY_NAMESPACE: &str =
    "http://wso2.org/projects/carbon/application-authentication.xml";

/// Element name qualified by a namespace URI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: String,
    pub local: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Name in [`IDENTITY_NAMESPACE`]
    pub fn identity(local: impl Into<String>) -> Self {
        Self::new(IDENTITY_NAMESPACE, local)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local)
    }
}

/// A configuration element: a name, text content and child elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    pub name: QualifiedName,
    text: String,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child `{namespace}local` holding `text`
    pub fn with_text_child(self, name: QualifiedName, text: impl Into<String>) -> Self {
        self.with_child(ConfigNode::new(name).with_text(text))
    }

    /// First child whose qualified name matches exactly
    pub fn first_child(&self, name: &QualifiedName) -> Option<&ConfigNode> {
        self.children.iter().find(|c| &c.name == name)
    }

    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    /// Text content with surrounding whitespace removed
    pub fn text(&self) -> &str {
        self.text.trim()
    }
}

/// Errors that can occur while loading a configuration source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Where configuration sections come from
///
/// Implementations:
/// - `MemoryConfigSource`: In-memory
/// - `FileConfigSource`: YAML file
/// - Hosts can adapt their own document parser
pub trait ConfigSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Top-level section by identifier, or `None` when it is absent
    fn config_element(&self, section: &str) -> Option<ConfigNode>;
}
