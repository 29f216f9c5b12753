// Interactive session: the prompt-driven pipeline behind `ozet`.
//
// The session is an explicit state machine over any BufRead/Write pair:
//
//   AwaitInputMode → AwaitText → AwaitSummarizerChoice → AwaitSentenceCount
//     → Summarizing → AwaitReference → Scoring → Done
//
// Only the first prompt is strict: anything but "1" or "2" ends the session
// with `SessionOutcome::InvalidInputMode`. The method prompt falls back to
// TextRank instead of rejecting input.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::info;

use crate::error::{OzetError, Result};
use crate::evaluation::{ScoreReport, SummaryScorer};
use crate::output::terminal;
use crate::preprocess::preprocess_text;
use crate::resources::LanguageResources;
use crate::summarizers::{summarize_text, Method};

const BANNER: &str = "Metin Özetleme Programı\n-----------------------";
const MODE_PROMPT: &str =
    "Metni doğrudan girmek için '1', metin dosyası kullanmak için '2' girin: ";
const TEXT_PROMPT: &str = "Özetlemek istediğiniz metni girin:\n";
const PATH_PROMPT: &str = "Metin dosyasının yolunu girin: ";
const INVALID_MODE: &str = "Geçersiz seçim. Program sonlandırılıyor.";
const METHOD_MENU: &str =
    "\nKullanılabilir Özetleme Yöntemleri:\n1. LexRank\n2. Luhn\n3. LSA\n4. TextRank";
const METHOD_PROMPT: &str = "Özetleme yöntemi seçin (1/2/3/4): ";
const COUNT_PROMPT: &str = "Özette kaç cümle kullanılsın?: ";
const REFERENCE_PROMPT: &str =
    "\nMetnin gerçek özetlemesini girin (referans olarak kullanılacak):\n";

/// Where the input text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Direct,
    File,
}

impl InputMode {
    /// "1" is direct entry, "2" is a file path, anything else is rejected.
    pub fn from_choice(code: &str) -> Result<Self> {
        match code.trim() {
            "1" => Ok(InputMode::Direct),
            "2" => Ok(InputMode::File),
            other => Err(OzetError::InvalidSelection(other.to_string())),
        }
    }
}

/// Everything a completed session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub method: Method,
    pub sentences: usize,
    pub summary: String,
    pub reference: String,
    pub scores: ScoreReport,
}

/// How a session ended without a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed(SessionReport),
    /// The first prompt got something other than "1" or "2".
    InvalidInputMode(String),
}

enum State {
    AwaitInputMode,
    AwaitText(InputMode),
    AwaitSummarizerChoice {
        text: String,
    },
    AwaitSentenceCount {
        text: String,
        method: Method,
    },
    Summarizing {
        text: String,
        method: Method,
        count: usize,
    },
    AwaitReference {
        method: Method,
        count: usize,
        summary: String,
    },
    Scoring {
        method: Method,
        count: usize,
        summary: String,
        reference: String,
    },
    Done(SessionOutcome),
}

/// One run of the interactive pipeline.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    resources: &'a LanguageResources,
    scorer: &'a dyn SummaryScorer,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        resources: &'a LanguageResources,
        scorer: &'a dyn SummaryScorer,
    ) -> Self {
        Self {
            input,
            output,
            resources,
            scorer,
        }
    }

    /// Drive the session to completion. Every error is fatal and returned
    /// as-is; nothing is retried.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        writeln!(self.output, "{BANNER}")?;

        let mut state = State::AwaitInputMode;
        loop {
            state = match self.step(state)? {
                State::Done(outcome) => return Ok(outcome),
                next => next,
            };
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::AwaitInputMode => {
                let answer = self.prompt(MODE_PROMPT)?;
                match InputMode::from_choice(&answer) {
                    Ok(mode) => State::AwaitText(mode),
                    Err(_) => {
                        writeln!(self.output, "{INVALID_MODE}")?;
                        State::Done(SessionOutcome::InvalidInputMode(answer))
                    }
                }
            }

            State::AwaitText(InputMode::Direct) => {
                let text = self.prompt(TEXT_PROMPT)?;
                State::AwaitSummarizerChoice { text }
            }

            State::AwaitText(InputMode::File) => {
                let path = PathBuf::from(self.prompt(PATH_PROMPT)?);
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| OzetError::Io { path: path.clone(), source })?;
                info!(path = %path.display(), bytes = text.len(), "Read input file");
                State::AwaitSummarizerChoice { text }
            }

            State::AwaitSummarizerChoice { text } => {
                writeln!(self.output, "{METHOD_MENU}")?;
                let answer = self.prompt(METHOD_PROMPT)?;
                State::AwaitSentenceCount {
                    text,
                    method: Method::from_choice(&answer),
                }
            }

            State::AwaitSentenceCount { text, method } => {
                let answer = self.prompt(COUNT_PROMPT)?;
                let count = parse_count(&answer)?;
                State::Summarizing {
                    text,
                    method,
                    count,
                }
            }

            State::Summarizing {
                text,
                method,
                count,
            } => {
                let cleaned = preprocess_text(&text, self.resources);
                let summary = summarize_text(&cleaned, method, count, self.resources);
                terminal::write_summary(&mut self.output, method, count, &summary)?;
                State::AwaitReference {
                    method,
                    count,
                    summary,
                }
            }

            State::AwaitReference {
                method,
                count,
                summary,
            } => {
                let reference = self.prompt(REFERENCE_PROMPT)?;
                State::Scoring {
                    method,
                    count,
                    summary,
                    reference,
                }
            }

            State::Scoring {
                method,
                count,
                summary,
                reference,
            } => {
                let scores = self.scorer.score(&summary, &reference)?;
                terminal::write_scores(&mut self.output, &scores)?;
                State::Done(SessionOutcome::Completed(SessionReport {
                    method,
                    sentences: count,
                    summary,
                    reference,
                    scores,
                }))
            }

            State::Done(outcome) => State::Done(outcome),
        };
        Ok(next)
    }

    /// Write a prompt, then read one line. Running out of input before the
    /// prompt is answered is an error.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(OzetError::Prompt(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended before the prompt was answered",
            )));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Parse the requested sentence count. Only whole non-negative numbers.
pub fn parse_count(answer: &str) -> Result<usize> {
    answer
        .trim()
        .parse()
        .map_err(|_| OzetError::Parse(answer.to_string()))
}
