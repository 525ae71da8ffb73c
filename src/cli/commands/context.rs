use std::{env, path::Path};

use anyhow::{Context as _, Result};

use super::{KeyReport, key_report::Candidate};
use crate::{
    cli::{args::CommonArgs, report::print_catalog_warnings},
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        CompositeKeyResolver, Fragment, KeyExpressionParser, ParsedKey, TranslationCatalog,
        TranslationDocument,
    },
};

/// Everything a lookup command needs: merged configuration, the loaded
/// catalog, and a parser and resolver built from the configuration.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--messages-root ./i18n`)
/// 2. `.keyrefrc.json` config file
/// 3. Built-in defaults
pub struct ResolveContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    pub catalog: TranslationCatalog,
    parser: KeyExpressionParser,
    resolver: CompositeKeyResolver,
}

impl ResolveContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let current_dir = env::current_dir().context("Failed to read current directory")?;

        let config_result = load_config(&current_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        // A CLI path is relative to the working directory, a config path to
        // the directory holding the config file.
        let messages_root = match &common_args.messages_root {
            Some(messages_root) => {
                config.messages_root = messages_root.to_string_lossy().to_string();
                current_dir.join(messages_root)
            }
            None => config_result.base_dir.join(strip_cur_dir(&config.messages_root)),
        };

        if let Some(ref default_namespace) = common_args.default_namespace {
            config.default_namespace = default_namespace.clone();
        }

        let ignores = config.ignore_patterns()?;
        let catalog = TranslationCatalog::load(&messages_root, &ignores)?;
        print_catalog_warnings(catalog.warnings(), verbose);

        if verbose {
            eprintln!(
                "Note: Loaded {} translation file(s) from {}",
                catalog.documents().len(),
                messages_root.display()
            );
        }

        Ok(Self {
            parser: KeyExpressionParser::new(config.key_syntax()),
            resolver: CompositeKeyResolver::new(config.resolver_options()),
            config,
            catalog,
        })
    }

    pub fn parser(&self) -> &KeyExpressionParser {
        &self.parser
    }

    pub fn resolver(&self) -> &CompositeKeyResolver {
        &self.resolver
    }

    /// Namespace `key` is looked up in: its own, or the default one.
    pub fn namespace_of<'k>(&'k self, key: &'k ParsedKey) -> &'k str {
        key.namespace_text()
            .unwrap_or(self.config.default_namespace.as_str())
    }

    pub fn candidates(&self, key: &ParsedKey) -> Vec<&TranslationDocument> {
        self.catalog.candidates(self.namespace_of(key))
    }

    /// Parse, resolve against every candidate document and classify.
    pub fn report_key(&self, fragments: &[Fragment]) -> KeyReport {
        let key = self.parser.parse(fragments);
        let composite_key = key.composite_key();
        let candidates: Vec<Candidate<'_>> = self
            .candidates(&key)
            .into_iter()
            .map(|document| {
                let reference = self
                    .resolver
                    .resolve_composite_key(&composite_key, document.tree());
                (document, reference)
            })
            .collect();
        KeyReport::new(
            &key,
            self.namespace_of(&key),
            &candidates,
            self.config.suppress_unresolved_default_ns,
        )
    }
}

fn strip_cur_dir(path: &str) -> &Path {
    let path = Path::new(path);
    path.strip_prefix(".").unwrap_or(path)
}
