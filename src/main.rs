use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use trustguard::config::Config;
use trustguard::output::{terminal, JsonReport};
use trustguard::pipeline::analyze::{self, DEFAULT_SENTENCES, MAX_SENTENCES, MIN_SENTENCES};
use trustguard::reference::wikipedia::WikipediaClient;

/// TrustGuard: check AI-generated text against Wikipedia, claim by claim.
///
/// Splits the text into sentences, looks each one up on Wikipedia, and
/// scores how many of its words the top article's summary backs up.
#[derive(Parser)]
#[command(name = "trustguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text and print a trust score for every claim
    Analyze {
        /// Text to analyze (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Wikipedia summary length in sentences (1-4)
        #[arg(long, default_value_t = DEFAULT_SENTENCES, value_parser = sentence_range())]
        sentences: u8,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the claims that would be checked, without contacting Wikipedia
    Claims {
        /// Text to split (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Look up and score a single claim
    Lookup {
        /// The claim to check
        claim: String,

        /// Wikipedia summary length in sentences (1-4)
        #[arg(long, default_value_t = DEFAULT_SENTENCES, value_parser = sentence_range())]
        sentences: u8,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn sentence_range() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(i64::from(MIN_SENTENCES)..=i64::from(MAX_SENTENCES))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trustguard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            file,
            sentences,
            format,
        } => {
            let config = Config::load()?;
            let text = read_input(text, file)?;
            let client = WikipediaClient::from_config(&config)?;

            info!(api = %config.wikipedia_api_url, "Analyzing claims against Wikipedia");

            let progress = match format {
                OutputFormat::Table => {
                    let pb = ProgressBar::new(0);
                    pb.set_style(
                        ProgressStyle::default_bar()
                            .template("  Checking [{bar:30}] {pos}/{len} claims ({eta})")?,
                    );
                    pb
                }
                OutputFormat::Json => ProgressBar::hidden(),
            };

            let result = analyze::analyze(&client, &text, sentences, Some(&progress)).await;
            progress.finish_and_clear();
            let result = result?;

            match format {
                OutputFormat::Table => terminal::display_analysis(&result),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&JsonReport::new(&result))?;
                    println!("{json}");
                }
            }
        }

        Commands::Claims { text, file } => {
            let text = read_input(text, file)?;
            let claims = trustguard::claims::segment::segment(&text);
            terminal::display_claims(&claims);
        }

        Commands::Lookup {
            claim,
            sentences,
            format,
        } => {
            let config = Config::load()?;
            let client = WikipediaClient::from_config(&config)?;

            let claim = claim.trim();
            if claim.is_empty() {
                anyhow::bail!("Nothing to look up. Pass a claim to check.");
            }

            let scored = analyze::check_claim(&client, 1, claim, sentences).await;

            match format {
                OutputFormat::Table => {
                    terminal::display_scored_claim(&scored);
                    if scored.reference.is_sentinel() {
                        println!(
                            "\n{}",
                            "No usable reference, so this claim can't be scored.".yellow()
                        );
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scored)?),
            }
        }
    }

    Ok(())
}

/// Resolve the text to work on: the positional argument, a file, or stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}
