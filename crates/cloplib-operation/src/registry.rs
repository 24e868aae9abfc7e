//! Operation type registry: maps full key strings to [`OperationType`]s.
//!
//! Registries are plain values meant to be built at start of day and passed
//! to whoever needs them. Mutation requires `&mut`, so concurrent readers are
//! safe once registration is done. A process-wide instance is also available
//! through [`OperationTypeRegistry::global`] for code paths (such as serde)
//! that cannot have a registry injected.

use std::sync::{LazyLock, RwLock};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::key::{Key, KeyError};
use crate::operation_type::OperationType;

static GLOBAL: LazyLock<RwLock<OperationTypeRegistry>> =
    LazyLock::new(|| RwLock::new(OperationTypeRegistry::with_builtins()));

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A type with the same key is already registered.
    #[error("operation type already registered: {0}")]
    DuplicateKey(String),

    /// No type with the given key is registered.
    #[error("operation type not registered: {0}")]
    NotFound(String),

    /// The key could not be parsed.
    #[error(transparent)]
    InvalidKey(#[from] KeyError),
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Open set of operation types keyed by their full `namespace:value` string.
#[derive(Debug, Clone, Default)]
pub struct OperationTypeRegistry {
    types: FxHashMap<String, OperationType>,
}

impl OperationTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in type.
    pub fn with_builtins() -> Self {
        let types = OperationType::builtins()
            .into_iter()
            .map(|t| (t.key().to_string(), t))
            .collect();
        Self { types }
    }

    /// The process-wide registry, populated with the built-ins on first use.
    ///
    /// Writers must take the write lock; this is only expected while plugins
    /// register their own types during start-up.
    pub fn global() -> &'static RwLock<OperationTypeRegistry> {
        &GLOBAL
    }

    /// Adds a type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] if a type with the same key is
    /// already present. The registry is left unchanged in that case.
    pub fn register(
        &mut self,
        operation_type: OperationType,
    ) -> Result<&OperationType, RegistryError> {
        let key = operation_type.key().to_string();
        if self.types.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }
        let silent = operation_type.is_silent();
        tracing::debug!(key = %key, silent, "registered operation type");
        Ok(self.types.entry(key).or_insert(operation_type))
    }

    /// Removes and returns the type registered under `key` (full or bare).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidKey`] for malformed keys and
    /// [`RegistryError::NotFound`] if nothing is registered under the key.
    pub fn unregister(&mut self, key: &str) -> Result<OperationType, RegistryError> {
        let key = Key::parse(key)?.to_string();
        match self.types.remove(&key) {
            Some(removed) => {
                tracing::debug!(key = %key, "unregistered operation type");
                Ok(removed)
            }
            None => Err(RegistryError::NotFound(key)),
        }
    }

    /// Looks a type up by full key or bare name; both forms resolve
    /// identically. Malformed keys can never be registered and yield `None`.
    pub fn get(&self, key: &str) -> Option<&OperationType> {
        let key = Key::parse(key).ok()?;
        self.get_key(&key)
    }

    /// Looks a type up by parsed key.
    pub fn get_key(&self, key: &Key) -> Option<&OperationType> {
        self.types.get(&key.to_string())
    }

    /// Returns the registered type, or a fresh unregistered non-silent type
    /// when none exists. Never mutates the registry.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Invalid`] if `key` is malformed.
    pub fn get_or_create(&self, key: &str) -> Result<OperationType, KeyError> {
        let key = Key::parse(key)?;
        Ok(match self.get_key(&key) {
            Some(registered) => registered.clone(),
            None => OperationType::from_key(key, false),
        })
    }

    /// Returns `true` if a type is registered under `key` (full or bare).
    pub fn is_registered(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over every registered type, in no particular order.
    pub fn registered(&self) -> impl Iterator<Item = &OperationType> {
        self.types.values()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builtins_registers_all() {
        let registry = OperationTypeRegistry::with_builtins();
        assert_eq!(registry.len(), OperationType::builtins().len());
        for t in OperationType::builtins() {
            let found = registry.get(&t.to_string()).unwrap();
            assert_eq!(found.is_silent(), t.is_silent());
        }
    }

    #[test]
    fn test_register_then_get_round_trip() {
        let mut registry = OperationTypeRegistry::new();
        for (key, silent) in [("claim_enter", true), ("myplugin:claim_leave", false)] {
            let created = OperationType::create(key, silent).unwrap();
            registry.register(created.clone()).unwrap();
            let found = registry.get(key).unwrap();
            assert_eq!(found, &created);
            assert_eq!(found.is_silent(), silent);

            registry.unregister(key).unwrap();
            assert!(registry.get(key).is_none());
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_bare_and_full_lookup_agree() {
        let registry = OperationTypeRegistry::with_builtins();
        let bare = registry.get("monster_spawn").unwrap();
        let full = registry.get("cloplib:monster_spawn").unwrap();
        assert_eq!(bare, full);
        assert!(bare.is_silent());
        assert!(registry.is_registered("MONSTER_SPAWN"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = OperationTypeRegistry::with_builtins();
        let dup = OperationType::create("block_place", true).unwrap();
        let result = registry.register(dup);
        assert_eq!(
            result,
            Err(RegistryError::DuplicateKey("cloplib:block_place".to_string()))
        );
        // Original entry untouched.
        assert!(!registry.get("block_place").unwrap().is_silent());
    }

    #[test]
    fn test_unregister_absent_fails() {
        let mut registry = OperationTypeRegistry::new();
        assert_eq!(
            registry.unregister("nothing_here"),
            Err(RegistryError::NotFound("cloplib:nothing_here".to_string()))
        );
        assert!(matches!(
            registry.unregister("bad key"),
            Err(RegistryError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_get_or_create_does_not_mutate() {
        let registry = OperationTypeRegistry::with_builtins();
        let before = registry.len();

        let a = registry.get_or_create("someplugin:visit").unwrap();
        let b = registry.get_or_create("someplugin:visit").unwrap();
        assert_eq!(a, b);
        assert!(!a.is_silent());
        assert_eq!(registry.len(), before);
        assert!(!registry.is_registered("someplugin:visit"));
    }

    #[test]
    fn test_get_or_create_returns_registered() {
        let registry = OperationTypeRegistry::with_builtins();
        let t = registry.get_or_create("fire_spread").unwrap();
        assert!(t.is_silent());
        assert!(registry.get_or_create("no good").is_err());
    }

    #[test]
    fn test_get_malformed_is_none() {
        let registry = OperationTypeRegistry::with_builtins();
        assert!(registry.get("a:b:c").is_none());
        assert!(!registry.is_registered(""));
    }

    #[test]
    fn test_global_has_builtins() {
        let registry = OperationTypeRegistry::global().read().unwrap();
        assert!(registry.is_registered("start_raid"));
    }
}
