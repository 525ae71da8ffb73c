//! Composite key resolution.
//!
//! Walks a [`Tree`] segment by segment and reports how far the walk got.
//! A missing segment is data, not an error: everything from the first
//! missing segment on is returned in [`PropertyReference::unresolved`].

use serde::{Deserialize, Serialize};

use crate::core::tree::{KeyPattern, Tree};

pub mod select;
pub mod status;

pub use select::{least_resolved, least_resolved_by, most_resolved, most_resolved_by};
pub use status::{KeyStatus, Severity};

/// Plural variant suffixes tried when the last segment is missing.
pub const DEFAULT_PLURAL_VARIANTS: &[&str] = &[
    "zero", "one", "two", "few", "many", "other", "plural", "0", "1", "2", "3", "4", "5",
];

pub const DEFAULT_PLURAL_SEPARATOR: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverOptions {
    pub plural_separator: String,
    pub plural_variants: Vec<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            plural_separator: DEFAULT_PLURAL_SEPARATOR.to_string(),
            plural_variants: DEFAULT_PLURAL_VARIANTS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Outcome of walking a tree by a composite key.
///
/// `path.len() + unresolved.len()` always equals the requested key length,
/// and `unresolved` is always a suffix of the requested key.
#[derive(Debug, Clone)]
pub struct PropertyReference<T> {
    /// Segments that resolved, in order.
    pub path: Vec<String>,
    /// Last node reached; the root when the first segment already failed.
    pub node: T,
    /// Segments from the first failure to the end.
    pub unresolved: Vec<String>,
    /// The last segment only resolved as `<segment><sep><variant>`.
    pub plural: bool,
}

impl<T> PropertyReference<T> {
    fn root(node: T) -> Self {
        Self {
            path: Vec::new(),
            node,
            unresolved: Vec::new(),
            plural: false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompositeKeyResolver {
    options: ResolverOptions,
}

impl CompositeKeyResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Walk `root` by `key` as far as it goes.
    pub fn resolve_composite_key<T, S>(&self, key: &[S], root: T) -> PropertyReference<T>
    where
        T: Tree,
        S: AsRef<str>,
    {
        let last = key.len().saturating_sub(1);
        let reference = key
            .iter()
            .enumerate()
            .fold(PropertyReference::root(root), |reference, (index, segment)| {
                self.step(reference, segment.as_ref(), index == last)
            });
        debug_assert_eq!(reference.path.len() + reference.unresolved.len(), key.len());
        reference
    }

    /// Node at `key`, only if every segment resolves.
    pub fn resolve_property<T, S>(&self, key: &[S], root: T) -> Option<T>
    where
        T: Tree,
        S: AsRef<str>,
    {
        let reference = self.resolve_composite_key(key, root);
        reference.is_resolved().then_some(reference.node)
    }

    /// Completion candidates at `key`.
    ///
    /// With `substring_search`, the last segment is a partially typed name:
    /// it is dropped from the lookup and used as a prefix filter, and each
    /// candidate is returned without that prefix (the characters still to
    /// insert). Otherwise all children of the node at `key` are listed.
    pub fn list_key_variants<T, S>(&self, key: &[S], root: T, substring_search: bool) -> Vec<String>
    where
        T: Tree,
        S: AsRef<str>,
    {
        let (fixed, typed) = match key.split_last() {
            Some((last, rest)) if substring_search => (rest, last.as_ref()),
            _ => (key, ""),
        };
        let Some(node) = self.resolve_property(fixed, root) else {
            return Vec::new();
        };
        node.children_matching(&KeyPattern::prefix(typed))
            .into_iter()
            .filter_map(|(name, _)| name.strip_prefix(typed).map(str::to_string))
            .collect()
    }

    fn step<T: Tree>(
        &self,
        mut reference: PropertyReference<T>,
        segment: &str,
        is_last: bool,
    ) -> PropertyReference<T> {
        if reference.is_resolved() {
            if let Some(child) = reference.node.child_named(segment) {
                reference.path.push(segment.to_string());
                reference.node = child;
                return reference;
            }
            if is_last && let Some(child) = self.plural_child(&reference.node, segment) {
                reference.path.push(segment.to_string());
                reference.node = child;
                reference.plural = true;
                return reference;
            }
        }
        reference.unresolved.push(segment.to_string());
        reference
    }

    fn plural_child<T: Tree>(&self, node: &T, segment: &str) -> Option<T> {
        if !node.is_branch() || self.options.plural_separator.is_empty() {
            return None;
        }
        self.options.plural_variants.iter().find_map(|variant| {
            let name = format!("{}{}{}", segment, self.options.plural_separator, variant);
            node.child_named(&name)
        })
    }
}
