//! Namespaced identifiers (`namespace:value`) used to name operation types.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Namespace reserved for the built-in operation types.
pub const DEFAULT_NAMESPACE: &str = "cloplib";

/// Separator between the namespace and the value of a key.
pub const SEPARATOR: char = ':';

/// Errors produced when parsing or constructing a [`Key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key does not satisfy the identifier syntax.
    #[error("invalid operation type key: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A namespaced identifier such as `cloplib:block_place`.
///
/// A key always carries its namespace: bare values are qualified with
/// [`DEFAULT_NAMESPACE`] when parsed. Because of that, two keys are equal
/// exactly when their [minimal string forms](Key::as_minimal_string) are.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    namespace: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl Key {
    /// Builds a key in the default namespace without validation.
    ///
    /// Only used for the compile-time built-in keys.
    pub(crate) const fn builtin(value: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(DEFAULT_NAMESPACE),
            value: Cow::Borrowed(value),
        }
    }

    /// Creates a key from an explicit namespace and value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Invalid`] if either part is empty or contains a
    /// character outside the allowed set (`[a-z0-9_.-]` for namespaces,
    /// additionally `/` for values).
    pub fn new(namespace: &str, value: &str) -> Result<Self, KeyError> {
        if !is_valid_namespace(namespace) || !is_valid_value(value) {
            return Err(KeyError::Invalid(format!("{namespace}{SEPARATOR}{value}")));
        }
        Ok(Self {
            namespace: Cow::Owned(namespace.to_string()),
            value: Cow::Owned(value.to_string()),
        })
    }

    /// Parses `namespace:value` or a bare `value`, lowercasing the input.
    ///
    /// A bare value is placed in [`DEFAULT_NAMESPACE`].
    pub fn parse(key: &str) -> Result<Self, KeyError> {
        let lowered = key.to_lowercase();
        let parsed = match lowered.split_once(SEPARATOR) {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::new(DEFAULT_NAMESPACE, &lowered),
        };
        parsed.map_err(|_| KeyError::Invalid(key.to_string()))
    }

    /// The namespace part of the key.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The value part of the key.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the key lives in [`DEFAULT_NAMESPACE`].
    pub fn is_default_namespace(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }

    /// The shortest unambiguous form: the bare value for default-namespace
    /// keys, the full `namespace:value` otherwise.
    pub fn as_minimal_string(&self) -> Cow<'_, str> {
        if self.is_default_namespace() {
            Cow::Borrowed(&self.value)
        } else {
            Cow::Owned(self.to_string())
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.namespace, self.value)
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-'))
}

fn is_valid_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-' | '/'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_value_gets_default_namespace() {
        let key = Key::parse("block_place").unwrap();
        assert_eq!(key.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(key.value(), "block_place");
        assert_eq!(key.to_string(), "cloplib:block_place");
    }

    #[test]
    fn test_bare_and_qualified_keys_are_equal() {
        let bare = Key::parse("block_place").unwrap();
        let qualified = Key::parse("cloplib:block_place").unwrap();
        assert_eq!(bare, qualified);
        assert_eq!(bare, Key::builtin("block_place"));
    }

    #[test]
    fn test_parse_lowercases() {
        let key = Key::parse("MyPlugin:Claim_Enter").unwrap();
        assert_eq!(key.to_string(), "myplugin:claim_enter");
    }

    #[test]
    fn test_minimal_string() {
        assert_eq!(
            Key::parse("fire_burn").unwrap().as_minimal_string(),
            "fire_burn"
        );
        assert_eq!(
            Key::parse("other:fire_burn").unwrap().as_minimal_string(),
            "other:fire_burn"
        );
    }

    #[test]
    fn test_invalid_keys_rejected() {
        for bad in ["", ":x", "ns:", "a:b:c", "has space", "ns:val#1"] {
            assert!(
                matches!(Key::parse(bad), Err(KeyError::Invalid(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_value_may_contain_slash() {
        let key = Key::new("myplugin", "claims/enter").unwrap();
        assert_eq!(key.value(), "claims/enter");
        assert!(Key::new("my/plugin", "enter").is_err());
    }
}
