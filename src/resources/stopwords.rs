// Turkish stop-word list: bundled source, on-disk cache, and loader.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use crate::error::{OzetError, Result};
use crate::text::turkish_lowercase;

/// File name of the cached list inside the resource directory.
pub const STOPWORDS_FILE: &str = "turkish_stopwords.txt";

/// The Turkish list shipped with the `stop-words` crate, lowercased.
pub fn bundled_turkish() -> HashSet<String> {
    let words: Vec<String> = get(LANGUAGE::Turkish);
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty() && !w.starts_with('#'))
        .map(turkish_lowercase)
        .collect()
}

/// Write the bundled list into `dir` unless it is already there.
///
/// Returns the path of the cached file. Calling this repeatedly is a no-op
/// once the file exists, even if its contents were edited by hand.
pub fn ensure_cached(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(STOPWORDS_FILE);
    if path.exists() {
        debug!(path = %path.display(), "Stop-word list already cached, skipping");
        return Ok(path);
    }

    std::fs::create_dir_all(dir).map_err(|source| OzetError::ResourceUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut words: Vec<String> = bundled_turkish().into_iter().collect();
    words.sort();
    let mut contents = String::from("# Turkish stop words (one per line)\n");
    for word in &words {
        contents.push_str(word);
        contents.push('\n');
    }

    std::fs::write(&path, contents).map_err(|source| OzetError::ResourceUnavailable {
        path: path.clone(),
        source,
    })?;

    info!(words = words.len(), path = %path.display(), "Cached Turkish stop-word list");
    Ok(path)
}

/// Read a stop-word list: one word per line, `#` starts a comment line.
pub fn load(path: &Path) -> Result<HashSet<String>> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| OzetError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse(&contents))
}

fn parse(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(turkish_lowercase)
        .collect()
}
