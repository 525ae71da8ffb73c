//! Read-only tree view over translation documents.
//!
//! JSON objects and YAML mappings are branches; everything else (strings,
//! numbers, sequences, null) is a leaf. The resolver only talks to the
//! [`Tree`] trait, so both formats walk the same way.

use regex::Regex;

pub mod json;
pub mod yaml;

pub use json::JsonTree;
pub use yaml::YamlTree;

/// A node of a hierarchical translation document.
///
/// Implementations are cheap handles borrowing the parsed document.
pub trait Tree: Clone {
    /// True for object/mapping nodes.
    fn is_branch(&self) -> bool;

    /// Child stored under exactly `name`. Always `None` on a leaf.
    fn child_named(&self, name: &str) -> Option<Self>;

    /// Direct children whose key matches `pattern`, in document order.
    fn children_matching(&self, pattern: &KeyPattern) -> Vec<(String, Self)>;

    /// Text of a leaf, for hover-like consumers.
    fn leaf_value(&self) -> Option<String>;

    fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    fn child_names(&self) -> Vec<String> {
        self.children_matching(&KeyPattern::Any)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }
}

/// Filter over child key names.
#[derive(Debug, Clone)]
pub enum KeyPattern {
    Any,
    Prefix(String),
    /// Must match the whole key.
    Regex(Regex),
}

impl KeyPattern {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    /// Compile `pattern` anchored at both ends.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!("^(?:{})$", pattern)).map(Self::Regex)
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            KeyPattern::Any => true,
            KeyPattern::Prefix(prefix) => key.starts_with(prefix.as_str()),
            KeyPattern::Regex(regex) => regex.is_match(key),
        }
    }
}

/// Supported translation file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Format for a file extension (`json`, `yaml`, `yml`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// A parsed translation document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentRoot {
    Json(serde_json::Value),
    Yaml(serde_yaml::Value),
}

impl DocumentRoot {
    pub fn format(&self) -> DocumentFormat {
        match self {
            DocumentRoot::Json(_) => DocumentFormat::Json,
            DocumentRoot::Yaml(_) => DocumentFormat::Yaml,
        }
    }

    pub fn tree(&self) -> TreeNode<'_> {
        match self {
            DocumentRoot::Json(value) => TreeNode::Json(JsonTree::new(value)),
            DocumentRoot::Yaml(value) => TreeNode::Yaml(YamlTree::new(value)),
        }
    }
}

/// Tree node of either format, so candidates from mixed files can be
/// compared side by side.
#[derive(Debug, Clone, Copy)]
pub enum TreeNode<'a> {
    Json(JsonTree<'a>),
    Yaml(YamlTree<'a>),
}

impl Tree for TreeNode<'_> {
    fn is_branch(&self) -> bool {
        match self {
            TreeNode::Json(node) => node.is_branch(),
            TreeNode::Yaml(node) => node.is_branch(),
        }
    }

    fn child_named(&self, name: &str) -> Option<Self> {
        match self {
            TreeNode::Json(node) => node.child_named(name).map(TreeNode::Json),
            TreeNode::Yaml(node) => node.child_named(name).map(TreeNode::Yaml),
        }
    }

    fn children_matching(&self, pattern: &KeyPattern) -> Vec<(String, Self)> {
        match self {
            TreeNode::Json(node) => node
                .children_matching(pattern)
                .into_iter()
                .map(|(name, child)| (name, TreeNode::Json(child)))
                .collect(),
            TreeNode::Yaml(node) => node
                .children_matching(pattern)
                .into_iter()
                .map(|(name, child)| (name, TreeNode::Yaml(child)))
                .collect(),
        }
    }

    fn leaf_value(&self) -> Option<String> {
        match self {
            TreeNode::Json(node) => node.leaf_value(),
            TreeNode::Yaml(node) => node.leaf_value(),
        }
    }
}
