// Language resources: stop words and sentence-boundary data for Turkish.
//
// Resources are loaded once into an immutable `LanguageResources` handle
// which is passed explicitly to every later stage. Nothing here is global.

pub mod stopwords;

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::text::SentenceSegmenter;

pub use stopwords::STOPWORDS_FILE;

/// Returns the default directory for cached language resources.
/// Uses the platform data directory: ~/.local/share/ozet/resources/ on Linux.
pub fn default_resource_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ozet")
        .join("resources")
}

/// Everything the pipeline needs to process Turkish text.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    stop_words: HashSet<String>,
    segmenter: SentenceSegmenter,
    /// Where the stop-word list was read from (`None` when built in memory).
    pub source: Option<PathBuf>,
}

impl LanguageResources {
    /// Build resources from an explicit stop-word set and the Turkish segmenter.
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            segmenter: SentenceSegmenter::turkish(),
            source: None,
        }
    }

    /// Resources built from the bundled Turkish list without touching disk.
    pub fn bundled() -> Self {
        Self::new(stopwords::bundled_turkish())
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn segmenter(&self) -> &SentenceSegmenter {
        &self.segmenter
    }
}

/// Make sure Turkish resources are available locally, then load them.
///
/// With no custom list configured, the bundled list is written to the
/// resource directory the first time and read back on every call after.
/// A configured custom list must already exist. Failures surface as
/// `ResourceUnavailable` and are not retried.
pub fn initialize(config: &Config) -> Result<LanguageResources> {
    let path = match &config.stopwords_file {
        Some(custom) => custom.clone(),
        None => stopwords::ensure_cached(&config.resource_dir)?,
    };

    let stop_words = stopwords::load(&path)?;
    let segmenter = SentenceSegmenter::turkish();

    info!(
        stop_words = stop_words.len(),
        abbreviations = segmenter.abbreviation_count(),
        path = %path.display(),
        "Loaded Turkish language resources"
    );

    Ok(LanguageResources {
        stop_words,
        segmenter,
        source: Some(path),
    })
}
