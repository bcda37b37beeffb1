//! Jewelcraft CLI: extract designs from text, describe and price selections.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jewelcraft_ai::{EXAMPLE_PROMPTS, Extractor, RandomJitter, describe};
use jewelcraft_core::{DesignRecord, format_price, price};
use tracing::Level;

mod display;
mod input;

#[derive(Parser, Debug)]
#[command(
    name = "jewelcraft",
    version,
    about = "Jewelcraft: turn jewelry descriptions into designs and back"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a design selection from a free-text description.
    Extract {
        /// Description, e.g. "a rose gold ring with three small rubies".
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Selection JSON used for anything the text doesn't mention.
        #[arg(long, env = "JEWELCRAFT_CURRENT")]
        current: Option<PathBuf>,

        /// Seed for confidence jitter, for reproducible output.
        #[arg(long, env = "JEWELCRAFT_SEED")]
        seed: Option<u64>,

        /// Print the result as JSON instead of a card.
        #[arg(long)]
        json: bool,

        /// Also print the prose description of the extracted design.
        #[arg(long)]
        describe: bool,

        /// Pause before answering, as the design UI does while "processing".
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Describe a selection (JSON from --selection or stdin) in prose.
    Describe {
        /// Selection JSON file; reads stdin when omitted.
        #[arg(long)]
        selection: Option<PathBuf>,

        /// Print a saved-design record with this name instead of prose.
        #[arg(long)]
        record: Option<String>,
    },

    /// Print the estimated price of a selection.
    Price {
        /// Selection JSON file; reads stdin when omitted.
        #[arg(long)]
        selection: Option<PathBuf>,
    },

    /// List example descriptions.
    Examples,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("jewelcraft v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Extract {
            text,
            current,
            seed,
            json,
            describe: with_prose,
            delay_ms,
        } => {
            let text = text.join(" ");
            let fallback = input::fallback_selection(current.as_deref())?;

            let jitter = match seed {
                Some(seed) => RandomJitter::seeded(seed),
                None => RandomJitter::from_entropy(),
            };
            let result = Extractor::with_jitter(jitter).extract(&text, &fallback);
            tracing::info!(chars = text.len(), "extracted design");

            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            if json {
                let out = serde_json::to_string_pretty(&result).context("serialising result")?;
                println!("{out}");
            } else {
                display::print_extraction_card(&result);
            }

            if with_prose {
                let selection = result.into_selection();
                let price = format_price(price(&selection));
                println!();
                println!("{}", describe(&selection, &price));
            }
        }

        Command::Describe { selection, record } => {
            let selection = input::read_selection(selection.as_deref())?;
            match record {
                Some(name) => {
                    let record = DesignRecord::snapshot(&name, &selection, None, chrono::Utc::now())
                        .context("building design record")?;
                    let out =
                        serde_json::to_string_pretty(&record).context("serialising record")?;
                    println!("{out}");
                }
                None => {
                    print!("{}", display::render_selection_card(&selection));
                    println!();
                    let price = format_price(price(&selection));
                    println!("{}", describe(&selection, &price));
                }
            }
        }

        Command::Price { selection } => {
            let selection = input::read_selection(selection.as_deref())?;
            println!("{}", format_price(price(&selection)));
        }

        Command::Examples => {
            for prompt in EXAMPLE_PROMPTS {
                println!("{prompt}");
            }
        }
    }

    Ok(())
}
