//! Translation catalog: the JSON and YAML documents under a messages root.
//!
//! File discovery lives outside the resolver on purpose; the resolver only
//! ever sees [`TreeNode`]s. The catalog scans the directory, parses every
//! translation file in parallel and indexes the documents by namespace
//! (file stem), so `common:title` is looked up in every `common.json`,
//! `common.yaml` or `<locale>/common.yml` below the root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::tree::{DocumentFormat, DocumentRoot, TreeNode};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(
        "Messages directory '{}' does not exist.\nHint: Check your .keyrefrc.json 'messagesRoot' setting.",
        .0.display()
    )]
    MissingRoot(PathBuf),

    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unsupported translation file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML file {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// A file that was skipped while scanning.
#[derive(Debug, Clone)]
pub struct CatalogWarning {
    pub file_path: String,
    pub error: String,
}

/// One parsed translation file.
#[derive(Debug, Clone)]
pub struct TranslationDocument {
    pub path: PathBuf,
    /// File stem, e.g. `common` for `en/common.json`.
    pub namespace: String,
    /// First directory below the messages root, if the file is nested.
    pub locale: Option<String>,
    pub root: DocumentRoot,
}

impl TranslationDocument {
    pub fn tree(&self) -> TreeNode<'_> {
        self.root.tree()
    }
}

/// Parse a single translation file. The format follows the extension.
pub fn load_document(path: &Path, messages_root: &Path) -> Result<TranslationDocument, CatalogError> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentFormat::from_extension)
        .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
    let namespace = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_document(format, &content, path)?;

    Ok(TranslationDocument {
        path: path.to_path_buf(),
        namespace,
        locale: extract_locale(path, messages_root),
        root,
    })
}

fn parse_document(
    format: DocumentFormat,
    content: &str,
    path: &Path,
) -> Result<DocumentRoot, CatalogError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map(DocumentRoot::Json)
            .map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            }),
        // An empty YAML file is an empty mapping, not a null leaf.
        DocumentFormat::Yaml if content.trim().is_empty() => Ok(DocumentRoot::Yaml(
            serde_yaml::Value::Mapping(serde_yaml::Mapping::new()),
        )),
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map(DocumentRoot::Yaml)
            .map_err(|source| CatalogError::Yaml {
                path: path.to_path_buf(),
                source,
            }),
    }
}

/// Extracts the locale directory of a nested translation file.
///
/// Examples:
/// - "locales/en/common.json" -> Some("en")
/// - "locales/common.json" -> None
fn extract_locale(path: &Path, messages_root: &Path) -> Option<String> {
    let relative = path.strip_prefix(messages_root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    // A single component is the file itself.
    components.next()?;
    first.as_os_str().to_str().map(|s| s.to_string())
}

#[derive(Debug, Default)]
pub struct TranslationCatalog {
    documents: Vec<TranslationDocument>,
    warnings: Vec<CatalogWarning>,
}

impl TranslationCatalog {
    pub fn from_documents(documents: Vec<TranslationDocument>) -> Self {
        Self {
            documents,
            warnings: Vec::new(),
        }
    }

    /// Scan `messages_root` recursively and parse every translation file not
    /// matched by `ignores` (matched against the path relative to the root).
    ///
    /// Unreadable or malformed files become warnings, not errors.
    pub fn load(messages_root: &Path, ignores: &[Pattern]) -> Result<Self, CatalogError> {
        if !messages_root.exists() {
            return Err(CatalogError::MissingRoot(messages_root.to_path_buf()));
        }
        if !messages_root.is_dir() {
            return Err(CatalogError::NotADirectory(messages_root.to_path_buf()));
        }

        let mut warnings = Vec::new();
        let mut paths = Vec::new();
        for entry in WalkDir::new(messages_root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warnings.push(CatalogWarning {
                        file_path: e
                            .path()
                            .map(|p| p.to_string_lossy().to_string())
                            .unwrap_or_default(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_translation_file(path) {
                continue;
            }
            let relative = path.strip_prefix(messages_root).unwrap_or(path);
            if ignores.iter().any(|pattern| pattern.matches_path(relative)) {
                continue;
            }
            paths.push(path.to_path_buf());
        }

        let loaded: Vec<Result<TranslationDocument, CatalogError>> = paths
            .par_iter()
            .map(|path| load_document(path, messages_root))
            .collect();

        let mut documents = Vec::with_capacity(loaded.len());
        for (path, result) in paths.iter().zip(loaded) {
            match result {
                Ok(document) => documents.push(document),
                Err(e) => warnings.push(CatalogWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: e.to_string(),
                }),
            }
        }

        Ok(Self {
            documents,
            warnings,
        })
    }

    pub fn documents(&self) -> &[TranslationDocument] {
        &self.documents
    }

    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents of `namespace`, in scan order.
    pub fn candidates(&self, namespace: &str) -> Vec<&TranslationDocument> {
        self.documents
            .iter()
            .filter(|document| document.namespace == namespace)
            .collect()
    }

    /// Namespaces present in the catalog, sorted and de-duplicated.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<&str> = self
            .documents
            .iter()
            .map(|document| document.namespace.as_str())
            .collect();
        namespaces.sort_unstable();
        namespaces.dedup();
        namespaces
    }
}

fn is_translation_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentFormat::from_extension)
        .is_some()
}
