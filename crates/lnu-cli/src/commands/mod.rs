//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod generate;
pub mod lexicon;
pub mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};
use lnu_bridge::{LanguageData, Translator};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;

/// Build the translator from the configured data sources.
pub fn load_translator(config: &Config) -> Result<Translator> {
    let mut builder = LanguageData::builder();
    if config.no_seed {
        builder = builder.without_seed();
    }
    if let Some(path) = &config.data_path {
        debug!(path = %path.display(), "loading data document");
        builder = builder
            .with_file(path)
            .with_context(|| format!("Failed to load data from {}", path.display()))?;
    }
    let data = builder.build().context("Failed to assemble language data")?;
    Ok(Translator::new(Arc::new(data)))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
