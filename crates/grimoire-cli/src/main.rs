//! grimoire - annotate spell lists with damage and saving throw metadata.
//!
//! Reads a JSON spell list, tags spells that deal dice damage or call for a
//! saving throw, records each spell's damage phrase, and writes the result.

mod cli;

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "grimoire=info,grimoire_annotate=info,grimoire_cli=info"
    } else {
        "grimoire=warn,grimoire_annotate=warn,grimoire_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", cli::icons::error(), e);
            ExitCode::FAILURE
        }
    }
}
