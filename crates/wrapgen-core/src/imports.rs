//! Import eligibility and the import registry.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Namespaces whose members are usable without an import.
pub const DEFAULT_IMPLICIT_NAMESPACES: [&str; 1] = ["java.lang"];

/// Decides whether a qualified name needs an import in a given namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPolicy {
    /// Namespaces that are always available (`java.lang`).
    ///
    /// Matched exactly, like the current namespace: `java.lang.String` is
    /// implicit, `java.lang.reflect.Method` is not.
    pub implicit_namespaces: Vec<String>,
}

impl Default for ImportPolicy {
    fn default() -> Self {
        Self {
            implicit_namespaces: DEFAULT_IMPLICIT_NAMESPACES
                .iter()
                .map(|ns| ns.to_string())
                .collect(),
        }
    }
}

impl ImportPolicy {
    /// Create a policy with the given always-available namespaces.
    pub fn new<I, S>(implicit_namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            implicit_namespaces: implicit_namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `qualified` must be imported into a file in `current_namespace`.
    ///
    /// `None` (primitive, `void`, wildcard) and names without a namespace
    /// never need an import.
    ///
    /// ```
    /// use wrapgen_core::ImportPolicy;
    ///
    /// let policy = ImportPolicy::default();
    ///
    /// assert!(!policy.should_import(Some("a.b.Foo"), "a.b"));
    /// assert!(policy.should_import(Some("a.bc.Foo"), "a.b"));
    /// assert!(policy.should_import(Some("a.b.c.Foo"), "a.b"));
    /// assert!(!policy.should_import(Some("java.lang.String"), "a.b"));
    /// assert!(!policy.should_import(None, "a.b"));
    /// ```
    pub fn should_import(&self, qualified: Option<&str>, current_namespace: &str) -> bool {
        let Some(qualified) = qualified else {
            return false;
        };

        if !qualified.contains('.') {
            return false;
        }

        if self
            .implicit_namespaces
            .iter()
            .any(|ns| same_namespace(ns, qualified))
        {
            return false;
        }

        !same_namespace(current_namespace, qualified)
    }
}

/// True when `qualified` is a direct member of `namespace`.
///
/// The namespace must be followed by exactly one `.` and a final segment:
/// `a.b.Foo` is in `a.b`; `a.bc.Foo` and `a.b.c.Foo` are not.
pub fn same_namespace(namespace: &str, qualified: &str) -> bool {
    if namespace.is_empty() {
        return !qualified.contains('.');
    }

    let Some(rest) = qualified.strip_prefix(namespace) else {
        return false;
    };

    match rest.strip_prefix('.') {
        Some(simple) => !simple.is_empty() && !simple.contains('.'),
        None => false,
    }
}

/// Outcome of [`ImportRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The name was not present and has been added.
    Added,
    /// The name was already registered.
    Present,
    /// Another qualified name already uses the same simple name in this
    /// file; nothing was added and the caller must spell the type out in full.
    Conflict { existing: String },
}

impl Registration {
    /// Whether the simple name may be used in rendered output.
    pub fn simple_name_usable(&self) -> bool {
        !matches!(self, Registration::Conflict { .. })
    }
}

/// Deduplicating set of imports, emitted in sorted order.
///
/// Also tracks every simple name the file uses without an import (same
/// namespace, implicit namespaces, types declared in the file). An import
/// would shadow those, so a clashing import is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRegistry {
    names: BTreeSet<String>,
    simple_names: BTreeMap<String, String>,
}

impl ImportRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qualified name; adding it again is a no-op.
    pub fn register(&mut self, qualified: &str) -> Registration {
        if self.names.contains(qualified) {
            return Registration::Present;
        }

        match self.claim(qualified) {
            Registration::Added => {
                self.names.insert(qualified.to_string());
                Registration::Added
            }
            other => other,
        }
    }

    /// Record that `qualified` is referred to by its simple name without an
    /// import.
    ///
    /// Returns [`Registration::Conflict`] when an import or another claim
    /// already holds the simple name.
    ///
    /// ```
    /// use wrapgen_core::{ImportRegistry, Registration};
    ///
    /// let mut imports = ImportRegistry::new();
    ///
    /// assert_eq!(imports.claim("a.b.Item"), Registration::Added);
    /// assert!(!imports.register("a.c.Item").simple_name_usable());
    /// assert!(imports.is_empty());
    /// ```
    pub fn claim(&mut self, qualified: &str) -> Registration {
        let simple = simple_name(qualified);
        match self.simple_names.get(simple) {
            Some(existing) if existing == qualified => Registration::Present,
            Some(existing) => Registration::Conflict {
                existing: existing.clone(),
            },
            None => {
                self.simple_names
                    .insert(simple.to_string(), qualified.to_string());
                Registration::Added
            }
        }
    }

    /// Whether `simple` is already taken by an import or a claim.
    pub fn is_claimed(&self, simple: &str) -> bool {
        self.simple_names.contains_key(simple)
    }

    /// Whether `qualified` is imported; claimed names are not.
    pub fn contains(&self, qualified: &str) -> bool {
        self.names.contains(qualified)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// `import x.y.Z;` lines in sorted order.
    pub fn import_lines(&self) -> Vec<String> {
        self.iter().map(|name| format!("import {name};")).collect()
    }
}

impl<'a> IntoIterator for &'a ImportRegistry {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(pos) => &qualified[pos + 1..],
        None => qualified,
    }
}
