// Extractive summarization: strategy selection and dispatch.

pub mod document;
pub mod lex_rank;
pub mod lsa;
pub mod luhn;
pub mod ranking;
pub mod text_rank;
pub mod traits;

use std::fmt;

use tracing::info;

use crate::resources::LanguageResources;

use self::document::Document;
use self::lex_rank::LexRankSummarizer;
use self::lsa::LsaSummarizer;
use self::luhn::LuhnSummarizer;
use self::text_rank::TextRankSummarizer;
use self::traits::Summarizer;

/// Which summarization strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    LexRank,
    Luhn,
    Lsa,
    /// The fallback for anything unrecognized
    TextRank,
}

impl Method {
    /// Map a menu code to a method: "1" LexRank, "2" Luhn, "3" LSA.
    /// Anything else (including "4") is TextRank, never an error.
    pub fn from_choice(code: &str) -> Self {
        match code.trim() {
            "1" => Method::LexRank,
            "2" => Method::Luhn,
            "3" => Method::Lsa,
            _ => Method::TextRank,
        }
    }

    /// Like `from_choice`, but also accepts method names in any case.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "lexrank" => Method::LexRank,
            "luhn" => Method::Luhn,
            "lsa" => Method::Lsa,
            "textrank" => Method::TextRank,
            code => Method::from_choice(code),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Method::LexRank => "LexRank",
            Method::Luhn => "Luhn",
            Method::Lsa => "LSA",
            Method::TextRank => "TextRank",
        }
    }

    /// Construct the summarizer with its default parameters.
    pub fn summarizer(&self) -> Box<dyn Summarizer> {
        match self {
            Method::LexRank => Box::new(LexRankSummarizer::default()),
            Method::Luhn => Box::new(LuhnSummarizer::default()),
            Method::Lsa => Box::new(LsaSummarizer::default()),
            Method::TextRank => Box::new(TextRankSummarizer::default()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Summarize `text` with the given method, keeping at most `count` sentences.
///
/// The chosen sentences come back verbatim, in document order, joined by a
/// single space. Asking for more sentences than exist returns them all.
pub fn summarize_text(
    text: &str,
    method: Method,
    count: usize,
    resources: &LanguageResources,
) -> String {
    let summarizer = method.summarizer();
    summarize_with(summarizer.as_ref(), text, count, resources)
}

/// Same as `summarize_text` with an explicit summarizer implementation.
pub fn summarize_with(
    summarizer: &dyn Summarizer,
    text: &str,
    count: usize,
    resources: &LanguageResources,
) -> String {
    let document = Document::parse(text, resources);
    let picked = summarizer.summarize(&document, count);

    info!(
        method = summarizer.name(),
        sentences = document.len(),
        requested = count,
        selected = picked.len(),
        "Summarized document"
    );

    picked
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
