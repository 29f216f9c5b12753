use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use ozet::config::Config;
use ozet::evaluation::{Rouge, SummaryScorer};
use ozet::output::terminal;
use ozet::preprocess::preprocess_text;
use ozet::session::{Session, SessionOutcome};
use ozet::summarizers::{summarize_text, Method};

/// Ozet: summarize Turkish text and score the summary with ROUGE.
///
/// With no subcommand, runs the interactive prompt flow.
#[derive(Parser)]
#[command(name = "ozet", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for text, method, sentence count and reference (default)
    Interactive,

    /// Summarize a UTF-8 text file and print the summary
    Summarize {
        /// Path of the text file
        path: PathBuf,

        /// lexrank, luhn, lsa or textrank (anything else means textrank)
        #[arg(long, default_value = "textrank")]
        method: String,

        /// Sentences to keep (default: OZET_DEFAULT_SENTENCES or 3)
        #[arg(long)]
        sentences: Option<usize>,
    },

    /// Score a candidate summary against a reference with ROUGE
    Evaluate {
        /// The produced summary
        #[arg(long)]
        candidate: String,

        /// The reference summary
        #[arg(long)]
        reference: String,

        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Make sure the Turkish stop-word list is cached locally
    Init,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with prompts on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ozet=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let resources = ozet::resources::initialize(&config)?;
            let scorer = Rouge::default();

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), &resources, &scorer);

            match session.run()? {
                SessionOutcome::Completed(report) => {
                    info!(
                        method = %report.method,
                        sentences = report.sentences,
                        "Session completed"
                    );
                }
                SessionOutcome::InvalidInputMode(answer) => {
                    info!(answer = %answer, "Invalid input mode, exiting");
                    return Ok(ExitCode::from(1));
                }
            }
        }

        Commands::Summarize {
            path,
            method,
            sentences,
        } => {
            let resources = ozet::resources::initialize(&config)?;
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            let method = Method::from_name(&method);
            let count = sentences.unwrap_or(config.default_sentences);

            let cleaned = preprocess_text(&text, &resources);
            let summary = summarize_text(&cleaned, method, count, &resources);
            terminal::write_summary(&mut io::stdout().lock(), method, count, &summary)?;
        }

        Commands::Evaluate {
            candidate,
            reference,
            json,
        } => {
            let scores = Rouge::default().score(&candidate, &reference)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                terminal::write_scores(&mut io::stdout().lock(), &scores)?;
                if let Some(rouge_1) = scores.get("rouge-1") {
                    println!(
                        "\n{} {}",
                        "ROUGE-1 F:".bold(),
                        terminal::colorize_score(rouge_1.f_score)
                    );
                }
            }
        }

        Commands::Init => {
            info!("Initializing Turkish language resources...");
            let resources = ozet::resources::initialize(&config)?;
            if let Some(path) = &resources.source {
                println!("Stop-word list: {}", path.display());
            }
            println!("Stop words loaded: {}", resources.stop_words().len());
            println!(
                "Abbreviations known: {}",
                resources.segmenter().abbreviation_count()
            );
            println!("\n{}", "Ozet is ready. Run `ozet` to start.".bold());
        }
    }

    Ok(ExitCode::SUCCESS)
}
