use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Number of summary sentences used when nothing else is specified.
pub const DEFAULT_SENTENCES: usize = 3;

/// Central configuration loaded from environment variables.
///
/// Every setting is optional. The .env file is loaded automatically at
/// startup via dotenvy, so these can live there too.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the cached Turkish stop-word list.
    pub resource_dir: PathBuf,
    /// Custom stop-word list. When set it must already exist.
    pub stopwords_file: Option<PathBuf>,
    /// Default sentence count for the non-interactive `summarize` command.
    pub default_sentences: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let resource_dir = env::var("OZET_RESOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::resources::default_resource_dir());

        let stopwords_file = env::var("OZET_STOPWORDS_FILE").ok().map(PathBuf::from);

        let default_sentences = match env::var("OZET_DEFAULT_SENTENCES") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("OZET_DEFAULT_SENTENCES must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_SENTENCES,
        };

        Ok(Self {
            resource_dir,
            stopwords_file,
            default_sentences,
        })
    }
}
