//! Registry-backed link resolution
//!
//! A [`SymbolIndex`] knows every documented type and namespace and the page
//! it is rendered to. Names that are not documented themselves resolve to an
//! anchor on the page of their closest documented parent.

use std::collections::HashMap;

use super::externs::default_externs;
use super::LinkResolver;
use crate::config::DocketConfig;

/// Kind of documented symbol, which decides its page name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Namespace,
    Class,
    Interface,
    Enum,
}

impl SymbolKind {
    /// Page file prefix for this kind
    #[must_use]
    pub const fn page_prefix(self) -> &'static str {
        match self {
            SymbolKind::Namespace => "namespace",
            SymbolKind::Class => "class",
            SymbolKind::Interface => "interface",
            SymbolKind::Enum => "enum",
        }
    }
}

/// Symbol table used to resolve documentation links
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    /// Documented symbols by fully qualified name
    symbols: HashMap<String, SymbolKind>,
    /// External reference pages by name
    externs: HashMap<String, String>,
    /// Prepended to every generated page link
    href_prefix: String,
}

impl SymbolIndex {
    /// Create an index preloaded with the built-in extern links
    #[must_use]
    pub fn new() -> Self {
        Self {
            externs: default_externs(),
            ..Self::default()
        }
    }

    /// Build an index from configuration
    #[must_use]
    pub fn from_config(config: &DocketConfig) -> Self {
        let mut index = if config.default_externs {
            Self::new()
        } else {
            Self::default()
        };
        index.href_prefix.clone_from(&config.href_prefix);
        for (name, href) in &config.externs {
            index.add_extern(name.clone(), href.clone());
        }
        index
    }

    /// Set the prefix prepended to generated page links
    #[must_use]
    pub fn with_href_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.href_prefix = prefix.into();
        self
    }

    /// Register a documented symbol
    pub fn register(&mut self, name: impl Into<String>, kind: SymbolKind) {
        self.symbols.insert(name.into(), kind);
    }

    /// Register or replace an external reference
    pub fn add_extern(&mut self, name: impl Into<String>, href: impl Into<String>) {
        self.externs.insert(name.into(), href.into());
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Page a documented symbol is rendered to, e.g. `namespace_goog_Foo.html`
    #[must_use]
    pub fn page_for(&self, name: &str) -> Option<String> {
        let kind = self.symbols.get(name)?;
        Some(format!(
            "{}{}_{}.html",
            self.href_prefix,
            kind.page_prefix(),
            name.replace('.', "_")
        ))
    }

    /// Resolve against documented symbols only
    fn resolve_symbol(&self, name: &str) -> Option<String> {
        let name = name.strip_suffix("()").unwrap_or(name);

        if let Some((owner, member)) = name.split_once('#') {
            let page = self.page_for(owner)?;
            return Some(format!("{page}#{owner}${member}"));
        }

        if let Some(page) = self.page_for(name) {
            return Some(page);
        }

        let mut parent = name;
        while let Some((prefix, _)) = parent.rsplit_once('.') {
            if let Some(page) = self.page_for(prefix) {
                return Some(format!("{page}#{name}"));
            }
            parent = prefix;
        }
        None
    }
}

impl LinkResolver for SymbolIndex {
    fn resolve(&self, name: &str) -> Option<String> {
        self.resolve_symbol(name)
            .or_else(|| self.externs.get(name).cloned())
    }

    fn resolve_external(&self, name: &str) -> Option<String> {
        self.externs.get(name).cloned()
    }
}
