//! Populates [`ProviderBindings`] from a configuration source

use crate::logging::{Logger, LoggerExt};
use crate::source::{ConfigNode, ConfigSource, QualifiedName};
use crate::types::{ProviderBindings, ProviderKind};

/// Section holding the application management settings
pub const SECTION: &str = "ServiceProvidersManagement";

/// Child element carrying the default claim dialect
pub const CLAIM_DIALECT_ELEMENT: &str = "ClaimDialect";

/// Read the bindings from `source`
///
/// A missing section logs one warning and yields empty bindings. Children are
/// looked up in the identity namespace; anything missing stays unset so
/// defaults are applied at resolution time. Blank store identifiers count as
/// unset, while a blank `ClaimDialect` is kept as the empty string.
pub fn load_bindings(source: &dyn ConfigSource, logger: &dyn Logger) -> ProviderBindings {
    let mut bindings = ProviderBindings::new();

    let Some(section) = source.config_element(SECTION) else {
        logger.warn(
            "No Identity Application Management configuration found. System starts with default settings",
        );
        return bindings;
    };

    for kind in ProviderKind::ALL {
        if let Some(identifier) = store_identifier(&section, kind.config_element(), logger) {
            logger.debug_fmt(format_args!("{} configured as '{}'", kind.config_element(), identifier));
            bindings.set(kind, identifier);
        }
    }

    bindings.claim_dialect = section
        .first_child(&QualifiedName::identity(CLAIM_DIALECT_ELEMENT))
        .map(|child| child.text().to_string());
    bindings
}

fn store_identifier(section: &ConfigNode, element: &str, logger: &dyn Logger) -> Option<String> {
    let child = section.first_child(&QualifiedName::identity(element))?;
    let text = child.text();
    if text.is_empty() {
        logger.debug_fmt(format_args!("{} is empty, using the default", element));
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger};
    use crate::registry::ProviderRegistry;
    use crate::source::{MemoryConfigSource, IDENTITY_NAMESPACE};
    use crate::system::SystemConfig;
    use std::sync::Arc;

    fn section() -> ConfigNode {
        ConfigNode::new(QualifiedName::identity(SECTION))
    }

    #[test]
    fn test_missing_section_warns_once() {
        let logger = MemoryLogger::new();
        let bindings = load_bindings(&MemoryConfigSource::new(), &logger);

        assert!(bindings.is_empty());
        assert_eq!(logger.count(LogLevel::Warn), 1);
        assert_eq!(logger.entries().len(), 1);
    }

    #[test]
    fn test_reads_all_children() {
        let source = MemoryConfigSource::new().with_section(
            section()
                .with_text_child(QualifiedName::identity("ApplicationDAO"), " app ")
                .with_text_child(QualifiedName::identity("OAuthOIDCClientDAO"), "oauth")
                .with_text_child(QualifiedName::identity("SAMLClientDAO"), "saml")
                .with_text_child(QualifiedName::identity("SystemIDPDAO"), "idp")
                .with_text_child(QualifiedName::identity("ClaimDialect"), "http://example.org/claims"),
        );
        let logger = MemoryLogger::new();
        let bindings = load_bindings(&source, &logger);

        assert_eq!(bindings.application.as_deref(), Some("app"));
        assert_eq!(bindings.oauth_client.as_deref(), Some("oauth"));
        assert_eq!(bindings.saml_client.as_deref(), Some("saml"));
        assert_eq!(bindings.identity_provider.as_deref(), Some("idp"));
        assert_eq!(bindings.claim_dialect.as_deref(), Some("http://example.org/claims"));
        assert_eq!(logger.count(LogLevel::Warn), 0);
    }

    #[test]
    fn test_partial_section_leaves_rest_unset() {
        let source = MemoryConfigSource::new().with_section(
            section().with_text_child(QualifiedName::identity("SAMLClientDAO"), "saml"),
        );
        let bindings = load_bindings(&source, &MemoryLogger::new());

        assert_eq!(bindings.get(ProviderKind::SamlClient), Some("saml"));
        assert_eq!(bindings.get(ProviderKind::Application), None);
        assert_eq!(bindings.claim_dialect, None);
    }

    #[test]
    fn test_other_namespace_is_ignored() {
        let source = MemoryConfigSource::new().with_section(
            section().with_text_child(QualifiedName::new("urn:other", "ApplicationDAO"), "app"),
        );
        let bindings = load_bindings(&source, &MemoryLogger::new());

        assert_ne!(IDENTITY_NAMESPACE, "urn:other");
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_blank_text_leaves_binding_unset() {
        let source = MemoryConfigSource::new().with_section(
            section().with_text_child(QualifiedName::identity("ApplicationDAO"), "   "),
        );
        let logger = MemoryLogger::new();
        let bindings = load_bindings(&source, &logger);

        assert_eq!(bindings.application, None);
        assert_eq!(logger.count(LogLevel::Debug), 1);
    }

    #[test]
    fn test_blank_claim_dialect_is_kept_empty() {
        let source = MemoryConfigSource::new().with_section(
            section().with_text_child(QualifiedName::identity(CLAIM_DIALECT_ELEMENT), "   "),
        );
        let bindings = load_bindings(&source, &MemoryLogger::new());
        assert_eq!(bindings.claim_dialect.as_deref(), Some(""));

        let config = SystemConfig::load(
            &source,
            Arc::new(ProviderRegistry::with_builtins()),
            Arc::new(MemoryLogger::new()),
        );
        assert_eq!(config.get_claim_namespace(), "");
    }
}
