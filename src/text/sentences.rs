// Rule-based Turkish sentence segmentation.
//
// Punkt-style heuristics: a run of terminal punctuation followed by
// whitespace ends a sentence unless the period belongs to an abbreviation,
// an initial, an ordinal (`15. yüzyıl`), or a number followed by another
// number. Blank lines always end a sentence.

use std::collections::HashSet;

use super::{is_lowercase_start, turkish_lowercase};

/// Common Turkish abbreviations that end in a period but do not end a
/// sentence. Stored lowercase, without the trailing period.
pub const TURKISH_ABBREVIATIONS: &[&str] = &[
    "a.ş", "alb", "apt", "av", "bkz", "bl", "bşk", "cad", "cm", "çev", "dk", "doç", "dr",
    "ecz", "ed", "gen", "gör", "haz", "hz", "kg", "km", "kur", "ltd", "m.ö", "m.s", "mah",
    "md", "mm", "mr", "mrs", "müh", "no", "op", "org", "öğr", "örn", "prof", "sok", "sn",
    "st", "şti", "t.c", "tel", "uzm", "vb", "vd", "vet", "vs", "yay", "yrd", "yy", "yzb",
];

const TERMINATORS: &[char] = &['.', '!', '?', '…'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '»', '”', '’'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '«', '“', '‘'];

/// Splits text into sentences using Turkish boundary rules.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: HashSet<String>,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::turkish()
    }
}

impl SentenceSegmenter {
    /// Segmenter with a custom abbreviation list (lowercase, no final period).
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| turkish_lowercase(a.as_ref()))
                .collect(),
        }
    }

    /// Segmenter using the built-in Turkish abbreviation list.
    pub fn turkish() -> Self {
        Self::new(TURKISH_ABBREVIATIONS.iter().copied())
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Split `text` into trimmed, non-empty sentences in document order.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(b, _)| b);

        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (_, c) = chars[i];

            if c == '\n' && blank_line_follows(&chars, i + 1) {
                push_sentence(&mut sentences, &text[start..byte_at(i)]);
                start = byte_at(i);
                i += 1;
                continue;
            }

            if !TERMINATORS.contains(&c) {
                i += 1;
                continue;
            }

            // Swallow the whole punctuation run plus closing quotes/brackets.
            let mut j = i;
            let mut only_periods = true;
            while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
                only_periods &= chars[j].1 == '.';
                j += 1;
            }
            let single_period = only_periods && j == i + 1;
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                j += 1;
            }

            if j < chars.len() && !chars[j].1.is_whitespace() {
                // "3.14", "www.ornek.com", "a.ş." and friends
                i = j;
                continue;
            }

            let next = chars[j..].iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
            let split = match next {
                None => true,
                Some(next) if single_period => {
                    !self.period_is_internal(&text[start..byte_at(i)], next)
                }
                Some(_) => true,
            };

            if split {
                let end = byte_at(j);
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }
            i = j;
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }

    /// Decide whether a single period belongs to the preceding token rather
    /// than ending the sentence.
    fn period_is_internal(&self, before: &str, next: char) -> bool {
        if is_lowercase_start(next) {
            return true;
        }

        let token = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(OPENERS);
        if token.is_empty() {
            return false;
        }

        let lowered = turkish_lowercase(token);
        if self.abbreviations.contains(&lowered) {
            return true;
        }

        // "15. 20 kişi": a number followed by another number
        if next.is_ascii_digit() && token.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }

        let mut letters = token.chars();
        matches!((letters.next(), letters.next()), (Some(c), None) if c.is_uppercase())
    }
}

fn blank_line_follows(chars: &[(usize, char)], from: usize) -> bool {
    for &(_, c) in &chars[from.min(chars.len())..] {
        if c == '\n' {
            return true;
        }
        if !c.is_whitespace() {
            return false;
        }
    }
    false
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
