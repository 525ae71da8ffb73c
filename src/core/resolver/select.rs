//! Picking one reference out of several candidate documents.

use super::{CompositeKeyResolver, PropertyReference};
use crate::core::tree::Tree;

/// Reference with the longest resolved path. Ties keep the earliest one.
pub fn most_resolved<T>(
    references: impl IntoIterator<Item = PropertyReference<T>>,
) -> Option<PropertyReference<T>> {
    most_resolved_by(references, |reference| reference)
}

/// Like [`most_resolved`], for items that carry a reference alongside other
/// data (e.g. the document it came from).
pub fn most_resolved_by<I, T>(
    items: impl IntoIterator<Item = I>,
    reference: impl Fn(&I) -> &PropertyReference<T>,
) -> Option<I> {
    items.into_iter().fold(None, |best, candidate| match best {
        Some(best) if reference(&best).path.len() >= reference(&candidate).path.len() => {
            Some(best)
        }
        _ => Some(candidate),
    })
}

/// Reference with the shortest resolved path. Ties keep the earliest one.
pub fn least_resolved<T>(
    references: impl IntoIterator<Item = PropertyReference<T>>,
) -> Option<PropertyReference<T>> {
    least_resolved_by(references, |reference| reference)
}

/// Like [`least_resolved`], for items that carry a reference alongside
/// other data.
pub fn least_resolved_by<I, T>(
    items: impl IntoIterator<Item = I>,
    reference: impl Fn(&I) -> &PropertyReference<T>,
) -> Option<I> {
    items.into_iter().fold(None, |worst, candidate| match worst {
        Some(worst) if reference(&worst).path.len() <= reference(&candidate).path.len() => {
            Some(worst)
        }
        _ => Some(candidate),
    })
}

impl CompositeKeyResolver {
    /// Resolve `key` in every candidate root and keep the most resolved one.
    ///
    /// A key counts as resolved when any single candidate resolves it.
    pub fn resolve_in_candidates<T, S>(
        &self,
        key: &[S],
        roots: impl IntoIterator<Item = T>,
    ) -> Option<PropertyReference<T>>
    where
        T: Tree,
        S: AsRef<str>,
    {
        most_resolved(
            roots
                .into_iter()
                .map(|root| self.resolve_composite_key(key, root)),
        )
    }
}
