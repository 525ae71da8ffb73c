//! Core of keyref: parse key expressions and resolve them against
//! translation trees.
//!
//! ## Module Structure
//!
//! - `key`: fragments, the key expression parser and source ranges
//! - `tree`: format-agnostic tree view over JSON and YAML documents
//! - `resolver`: composite key resolution, candidate selection, key status
//! - `catalog`: loading translation documents from a messages root

pub mod catalog;
pub mod key;
pub mod resolver;
pub mod tree;

pub use catalog::{CatalogError, CatalogWarning, TranslationCatalog, TranslationDocument};
pub use key::{Fragment, FragmentKind, KeyExpressionParser, KeyRanges, KeySyntax, ParsedKey, Token};
pub use resolver::{
    CompositeKeyResolver, KeyStatus, PropertyReference, ResolverOptions, Severity,
    least_resolved, least_resolved_by, most_resolved, most_resolved_by,
};
pub use tree::{DocumentFormat, DocumentRoot, JsonTree, KeyPattern, Tree, TreeNode, YamlTree};
