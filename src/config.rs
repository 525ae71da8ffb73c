use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{KeySyntax, ResolverOptions, resolver::DEFAULT_PLURAL_VARIANTS};

pub const CONFIG_FILE_NAME: &str = ".keyrefrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    #[serde(default = "default_ns_separator")]
    pub ns_separator: char,
    #[serde(default = "default_key_separator")]
    pub key_separator: char,
    #[serde(default = "default_plural_separator")]
    pub plural_separator: String,
    #[serde(default = "default_plural_variants")]
    pub plural_variants: Vec<String>,
    #[serde(default)]
    pub suppress_unresolved_default_ns: bool,
}

fn default_messages_root() -> String {
    "./locales".to_string()
}

fn default_namespace() -> String {
    "translation".to_string()
}

fn default_ns_separator() -> char {
    KeySyntax::default().ns_separator
}

fn default_key_separator() -> char {
    KeySyntax::default().key_separator
}

fn default_plural_separator() -> String {
    ResolverOptions::default().plural_separator
}

fn default_plural_variants() -> Vec<String> {
    DEFAULT_PLURAL_VARIANTS.iter().map(|v| v.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            ignores: Vec::new(),
            default_namespace: default_namespace(),
            ns_separator: default_ns_separator(),
            key_separator: default_key_separator(),
            plural_separator: default_plural_separator(),
            plural_variants: default_plural_variants(),
            suppress_unresolved_default_ns: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, identical
    /// separators, or an empty plural separator.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.ns_separator == self.key_separator {
            bail!(
                "'nsSeparator' and 'keySeparator' must differ (both are \"{}\")",
                self.ns_separator
            );
        }

        if self.plural_separator.is_empty() {
            bail!("'pluralSeparator' must not be empty");
        }

        Ok(())
    }

    pub fn key_syntax(&self) -> KeySyntax {
        KeySyntax {
            ns_separator: self.ns_separator,
            key_separator: self.key_separator,
        }
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            plural_separator: self.plural_separator.clone(),
            plural_variants: self.plural_variants.clone(),
        }
    }

    /// Compiled `ignores`. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
