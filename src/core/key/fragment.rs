//! Fragments: the pieces a key expression is assembled from.
//!
//! A source-language extractor splits an expression such as
//! `` `prefix${fileExpr}:ROOT.title` `` into an ordered list of fragments.
//! Literal fragments carry their text verbatim. Interpolated fragments carry
//! both the raw source (`${fileExpr}`) and a best-effort evaluated value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Literal,
    Interpolated,
}

/// One literal or interpolated piece of a key expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    source: String,
    resolved: String,
    kind: FragmentKind,
}

impl Fragment {
    /// Literal text: source and resolved value are the same string.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            resolved: text.clone(),
            source: text,
            kind: FragmentKind::Literal,
        }
    }

    /// Interpolated expression with its raw source and evaluated value.
    pub fn interpolated(source: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            resolved: resolved.into(),
            kind: FragmentKind::Interpolated,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn resolved(&self) -> &str {
        &self.resolved
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn is_literal(&self) -> bool {
        self.kind == FragmentKind::Literal
    }

    /// Number of source characters this fragment spans.
    pub fn source_len(&self) -> usize {
        self.source.chars().count()
    }
}

/// Wire form accepted from external extractors.
///
/// `resolved` may be omitted for literals. A literal whose `resolved` differs
/// from `source` is normalized to its `source`.
#[derive(Deserialize)]
struct RawFragment {
    source: String,
    #[serde(default)]
    resolved: Option<String>,
    #[serde(default = "default_kind")]
    kind: FragmentKind,
}

fn default_kind() -> FragmentKind {
    FragmentKind::Literal
}

impl<'de> Deserialize<'de> for Fragment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFragment::deserialize(deserializer)?;
        Ok(match raw.kind {
            FragmentKind::Literal => Fragment::literal(raw.source),
            FragmentKind::Interpolated => {
                let resolved = raw.resolved.unwrap_or_default();
                Fragment::interpolated(raw.source, resolved)
            }
        })
    }
}
