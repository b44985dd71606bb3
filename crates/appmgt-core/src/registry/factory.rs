//! Constructor table for one store role

use std::collections::HashMap;
use std::sync::Arc;

/// Constructor for a store of role `T`
///
/// Returns `Err` with a human-readable reason when the store cannot be built.
pub type StoreFactory<T> = Box<dyn Fn() -> Result<Arc<T>, String> + Send + Sync>;

/// A registered store implementation
pub struct StoreDefinition<T: ?Sized> {
    /// Identifier used in configuration
    pub name: String,
    /// Human-readable description
    pub description: String,
    pub factory: StoreFactory<T>,
}

impl<T: ?Sized> std::fmt::Debug for StoreDefinition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

pub(crate) struct FactoryTable<T: ?Sized> {
    entries: HashMap<String, StoreDefinition<T>>,
}

impl<T: ?Sized> FactoryTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, definition: StoreDefinition<T>) {
        self.entries.insert(definition.name.clone(), definition);
    }

    pub(crate) fn get(&self, name: &str) -> Option<&StoreDefinition<T>> {
        self.entries.get(name)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// `(name, description)` pairs sorted by name
    pub(crate) fn list(&self) -> Vec<(String, String)> {
        let mut out: Vec<_> = self
            .entries
            .values()
            .map(|d| (d.name.clone(), d.description.clone()))
            .collect();
        out.sort();
        out
    }
}
