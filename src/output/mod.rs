// Output formatting: terminal display of summaries and scores.

pub mod terminal;
