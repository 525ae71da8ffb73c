//! Verdict for one key occurrence, the way an annotator would render it.

use std::fmt;

use serde::Serialize;

use super::PropertyReference;
use crate::core::key::ParsedKey;
use crate::core::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStatus {
    /// Key points at a leaf.
    Resolved,
    /// Last segment matched only through plural variants.
    PluralReference,
    /// Template key whose evaluated path points at a branch.
    PartiallyResolved,
    /// Key points at an object, not a translation.
    ObjectReference,
    /// Resolved in some candidate documents but missing from others.
    PartiallyTranslated,
    /// Some trailing segments are missing.
    Unresolved,
    /// No document exists for the key's namespace.
    UnresolvedNamespace,
    /// Key has no namespace and no default namespace document exists.
    MissingDefaultNamespace,
    /// Nothing resolved in the default namespace and the warning is turned off.
    Suppressed,
}

impl KeyStatus {
    /// Decide the status of `key` given the most resolved reference among its
    /// candidate documents (`None` when there were no candidates).
    pub fn classify<T: Tree>(
        key: &ParsedKey,
        best: Option<&PropertyReference<T>>,
        suppress_unresolved_default_ns: bool,
    ) -> Self {
        let Some(best) = best else {
            return if key.has_namespace() {
                KeyStatus::UnresolvedNamespace
            } else {
                KeyStatus::MissingDefaultNamespace
            };
        };

        if best.is_resolved() {
            if best.plural {
                KeyStatus::PluralReference
            } else if best.node.is_leaf() {
                KeyStatus::Resolved
            } else if key.is_template {
                KeyStatus::PartiallyResolved
            } else {
                KeyStatus::ObjectReference
            }
        } else if !key.has_namespace()
            && suppress_unresolved_default_ns
            && best.unresolved.len() == key.path.len()
        {
            KeyStatus::Suppressed
        } else {
            KeyStatus::Unresolved
        }
    }

    /// Downgrade a translated key to [`KeyStatus::PartiallyTranslated`] when
    /// the least resolved candidate (`worst`) lacks it.
    ///
    /// Only keys pointing at translations are affected; object references,
    /// templates and failures keep their status.
    pub fn check_coverage<T>(self, worst: Option<&PropertyReference<T>>) -> Self {
        match (self, worst) {
            (KeyStatus::Resolved | KeyStatus::PluralReference, Some(worst))
                if !worst.is_resolved() =>
            {
                KeyStatus::PartiallyTranslated
            }
            _ => self,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            KeyStatus::Unresolved
            | KeyStatus::UnresolvedNamespace
            | KeyStatus::MissingDefaultNamespace => Some(Severity::Error),
            KeyStatus::ObjectReference | KeyStatus::PartiallyTranslated => {
                Some(Severity::Warning)
            }
            KeyStatus::Resolved
            | KeyStatus::PluralReference
            | KeyStatus::PartiallyResolved
            | KeyStatus::Suppressed => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            KeyStatus::Resolved => "resolved",
            KeyStatus::PluralReference => "reference to plural forms",
            KeyStatus::PartiallyResolved => "partially resolved template",
            KeyStatus::ObjectReference => "reference to object",
            KeyStatus::PartiallyTranslated => "partially translated",
            KeyStatus::Unresolved => "unresolved key",
            KeyStatus::UnresolvedNamespace => "unresolved namespace",
            KeyStatus::MissingDefaultNamespace => "missing default namespace",
            KeyStatus::Suppressed => "unresolved in default namespace (suppressed)",
        }
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
