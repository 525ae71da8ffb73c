//! keyref - translation key resolver for i18next-style catalogs
//!
//! keyref is a CLI tool and library that parses translation key expressions
//! (including template keys assembled from literal and interpolated
//! fragments) and resolves them against nested JSON and YAML translation
//! files, reporting how far each key resolves.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key parsing, tree abstraction, resolution and the translation catalog

pub mod cli;
pub mod config;
pub mod core;
