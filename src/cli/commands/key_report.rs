use std::ops::Range;

use serde::Serialize;

use crate::core::{
    KeyRanges, KeyStatus, ParsedKey, PropertyReference, Severity, TranslationDocument, Tree,
    TreeNode, least_resolved_by, most_resolved_by,
};

/// A candidate document paired with the reference resolved in it.
pub type Candidate<'a> = (&'a TranslationDocument, PropertyReference<TreeNode<'a>>);

/// Verdict for one key expression, as printed by `resolve`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyReport {
    /// Evaluated key, e.g. `common:menu.save`.
    pub key: String,
    /// Source text the key was parsed from.
    pub source: String,
    /// Namespace the key was looked up in (explicit or default).
    pub namespace: String,
    pub status: KeyStatus,
    pub severity: Option<Severity>,
    pub resolved_path: Vec<String>,
    pub unresolved: Vec<String>,
    /// Translation text when the key points at a leaf.
    pub value: Option<String>,
    /// Document the best reference came from.
    pub file: Option<String>,
    /// Locales (or files, for flat layouts) lacking a partially translated key.
    pub missing_in: Vec<String>,
    /// Characters of `source` to underline.
    pub highlight: Range<usize>,
}

impl KeyReport {
    /// Build the report from the key's resolution in every candidate document.
    pub fn new(
        key: &ParsedKey,
        namespace: &str,
        candidates: &[Candidate<'_>],
        suppress_unresolved_default_ns: bool,
    ) -> Self {
        let best = most_resolved_by(candidates, |(_, reference)| reference);
        let worst = least_resolved_by(candidates, |(_, reference)| reference);
        let status = KeyStatus::classify(
            key,
            best.map(|(_, reference)| reference),
            suppress_unresolved_default_ns,
        )
        .check_coverage(worst.map(|(_, reference)| reference));
        let ranges = KeyRanges::new(key);

        let (resolved_path, unresolved, value, file) = match best {
            Some((document, reference)) => {
                let value = if reference.is_resolved() {
                    reference.node.leaf_value()
                } else {
                    None
                };
                (
                    reference.path.clone(),
                    reference.unresolved.clone(),
                    value,
                    Some(document.path.to_string_lossy().to_string()),
                )
            }
            None => (
                Vec::new(),
                key.composite_key().into_iter().map(str::to_string).collect(),
                None,
                None,
            ),
        };

        let missing_in = if status == KeyStatus::PartiallyTranslated {
            candidates
                .iter()
                .filter(|(_, reference)| !reference.is_resolved())
                .map(|(document, _)| {
                    document
                        .locale
                        .clone()
                        .unwrap_or_else(|| document.path.to_string_lossy().to_string())
                })
                .collect()
        } else {
            Vec::new()
        };

        let highlight = match status {
            KeyStatus::Unresolved => ranges.unresolved(resolved_path.len()),
            KeyStatus::UnresolvedNamespace => ranges.namespace().unwrap_or_else(|| ranges.full()),
            _ => ranges.full(),
        };

        Self {
            key: key.to_string(),
            source: key.source.clone(),
            namespace: namespace.to_string(),
            status,
            severity: status.severity(),
            resolved_path,
            unresolved,
            value,
            file,
            missing_in,
            highlight,
        }
    }
}
