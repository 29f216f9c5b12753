// Ozet: extractive summarization and ROUGE evaluation for Turkish text.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: resources → preprocess → summarizers → evaluation, with the
// interactive session wiring them together.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod output;
pub mod preprocess;
pub mod resources;
pub mod session;
pub mod summarizers;
pub mod text;

pub use error::{OzetError, Result};
