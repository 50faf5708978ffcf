//! Link resolution
//!
//! The comment and type formatters never decide where a name points; they ask
//! a [`LinkResolver`]. Resolvers are built once before generation starts and
//! are only read afterwards, so they must be shareable across threads.

mod externs;
mod index;

pub use externs::{default_externs, MDN_GLOBAL_OBJECTS};
pub use index::{SymbolIndex, SymbolKind};

use std::collections::HashMap;
use std::sync::Arc;

/// Maps symbol and type names to documentation destinations
pub trait LinkResolver: Send + Sync {
    /// Resolve a symbol or type name, e.g. `goog.Foo` or `goog.Foo#bar`
    fn resolve(&self, name: &str) -> Option<String>;

    /// Resolve a native type name to its external reference page
    ///
    /// The type formatter treats a missing answer for a native primitive as
    /// a fatal configuration error.
    fn resolve_external(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }
}

impl<T: LinkResolver + ?Sized> LinkResolver for &T {
    fn resolve(&self, name: &str) -> Option<String> {
        (**self).resolve(name)
    }

    fn resolve_external(&self, name: &str) -> Option<String> {
        (**self).resolve_external(name)
    }
}

impl<T: LinkResolver + ?Sized> LinkResolver for Box<T> {
    fn resolve(&self, name: &str) -> Option<String> {
        (**self).resolve(name)
    }

    fn resolve_external(&self, name: &str) -> Option<String> {
        (**self).resolve_external(name)
    }
}

impl<T: LinkResolver + ?Sized> LinkResolver for Arc<T> {
    fn resolve(&self, name: &str) -> Option<String> {
        (**self).resolve(name)
    }

    fn resolve_external(&self, name: &str) -> Option<String> {
        (**self).resolve_external(name)
    }
}

/// A flat name to href table; both lookups consult the same map
impl<S: std::hash::BuildHasher + Send + Sync> LinkResolver for HashMap<String, String, S> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }

    fn resolve_external(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;

    impl LinkResolver for Nothing {
        fn resolve(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_default_external_is_none() {
        assert_eq!(Nothing.resolve_external("string"), None);
    }

    #[test]
    fn test_map_resolver() {
        let map = HashMap::from([("Foo".to_string(), "Foo.html".to_string())]);
        assert_eq!(map.resolve("Foo").as_deref(), Some("Foo.html"));
        assert_eq!(map.resolve("Bar"), None);
        assert_eq!(map.resolve_external("Foo").as_deref(), Some("Foo.html"));
    }

    #[test]
    fn test_smart_pointer_resolvers() {
        let map = HashMap::from([("Foo".to_string(), "Foo.html".to_string())]);
        let shared: Arc<dyn LinkResolver> = Arc::new(map);
        assert_eq!(shared.resolve("Foo").as_deref(), Some("Foo.html"));

        let boxed: Box<dyn LinkResolver> = Box::new(Nothing);
        assert_eq!(boxed.resolve("Foo"), None);
    }
}
