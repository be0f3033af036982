//! String attribute maps with explicit fallback resolution.

use super::FieldError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Fallback = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A string-keyed attribute map with an optional fallback resolver.
///
/// [`get`](AttrMap::get) consults stored values first, then the fallback.
/// A name neither stored nor resolvable fails with [`FieldError::Unknown`];
/// callers that want a default must supply one themselves, the map never
/// invents one.
///
/// # Examples
///
/// ```rust
/// use reprise_core::field::AttrMap;
///
/// let mut attrs = AttrMap::with_fallback(|name| {
///     name.strip_prefix("env_").map(|key| format!("${{{key}}}"))
/// });
/// attrs.set("host", "localhost");
///
/// assert_eq!(attrs.get("host").unwrap(), "localhost");
/// assert_eq!(attrs.get("env_port").unwrap(), "${port}");
/// assert!(attrs.get("missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct AttrMap {
    values: HashMap<String, String>,
    fallback: Option<Fallback>,
}

impl AttrMap {
    /// Create an empty map with no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map that consults `fallback` for absent names.
    ///
    /// The resolver returns `None` to decline a name, in which case the
    /// lookup fails.
    pub fn with_fallback<F>(fallback: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            values: HashMap::new(),
            fallback: Some(Arc::new(fallback)),
        }
    }

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// Stored values shadow the fallback.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Resolve `name` through stored values, then the fallback.
    pub fn get(&self, name: &str) -> Result<String, FieldError> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }
        if let Some(fallback) = &self.fallback {
            if let Some(value) = fallback(name) {
                return Ok(value);
            }
        }
        Err(FieldError::Unknown {
            name: name.to_string(),
        })
    }

    /// Whether `name` is directly stored (the fallback is not consulted).
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

impl fmt::Debug for AttrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrMap")
            .field("values", &self.values)
            .field("fallback", &self.fallback.as_ref().map(|_| "<resolver>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins_over_fallback() {
        let mut attrs = AttrMap::with_fallback(|_| Some("from fallback".to_string()));
        attrs.set("key", "stored");

        assert_eq!(attrs.get("key").unwrap(), "stored");
    }

    #[test]
    fn test_fallback_resolves_absent_names() {
        let attrs = AttrMap::with_fallback(|name| {
            name.strip_prefix("fallback_")
                .map(|rest| format!("[fallback resolved] {rest}"))
        });

        assert_eq!(
            attrs.get("fallback_test").unwrap(),
            "[fallback resolved] test"
        );
    }

    #[test]
    fn test_unresolved_name_is_an_error() {
        let attrs = AttrMap::with_fallback(|name| name.strip_prefix("x_").map(str::to_string));

        let err = attrs.get("something").unwrap_err();
        assert_eq!(
            err,
            FieldError::Unknown {
                name: "something".to_string()
            }
        );
    }

    #[test]
    fn test_map_without_fallback() {
        let mut attrs = AttrMap::new();
        attrs.set("attribute", "value");

        assert_eq!(attrs.get("attribute").unwrap(), "value");
        assert!(attrs.get("other").is_err());
        assert!(attrs.contains("attribute"));
        assert!(!attrs.contains("other"));
    }

    #[test]
    fn test_later_set_shadows_fallback_result() {
        let mut attrs = AttrMap::with_fallback(|name| {
            name.strip_prefix("fallback_")
                .map(|rest| format!("[fallback resolved] {rest}"))
        });

        assert_eq!(
            attrs.get("fallback_new").unwrap(),
            "[fallback resolved] new"
        );

        attrs.set("fallback_new", "new value");
        assert_eq!(attrs.get("fallback_new").unwrap(), "new value");
    }
}
