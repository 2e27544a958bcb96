//! CLI commands implementation.

mod annotate;
mod config_cmd;
mod summary;

use std::path::PathBuf;

use clap::{Args, Command, FromArgMatches, Parser, Subcommand};

use grimoire::config::Config;

#[derive(Parser)]
#[command(name = "grimoire")]
#[command(about = "Annotate spell lists with damage and saving throw metadata")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML, YAML or JSON; defaults to ./grimoire.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `annotate` with configured paths
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Tag damaging spells and saving throws, and add damage lines
    Annotate(AnnotateArgs),

    /// Show level, damage and save information for each spell
    Summary {
        /// Spell list to read
        #[arg(short, long, env = "GRIMOIRE_INPUT")]
        input: Option<PathBuf>,
        /// Only list spells with damage dice
        #[arg(short, long)]
        damage_only: bool,
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Spell list to read
    #[arg(short, long, env = "GRIMOIRE_INPUT")]
    pub input: Option<PathBuf>,
    /// Where to write the annotated spell list
    #[arg(short, long, env = "GRIMOIRE_OUTPUT")]
    pub output: Option<PathBuf>,
    /// Limit number of spells to annotate (0 = unlimited)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,
    /// Only report what would change, don't write the output file
    #[arg(long)]
    pub dry_run: bool,
    /// Print the annotated JSON to stdout instead of writing the output file
    #[arg(long, conflicts_with = "dry_run")]
    pub stdout: bool,
}

impl AnnotateArgs {
    /// Annotate arguments for a bare `grimoire` run: no flags, but
    /// `GRIMOIRE_INPUT` / `GRIMOIRE_OUTPUT` still apply.
    fn from_env() -> Result<Self, clap::Error> {
        let matches =
            Self::augment_args(Command::new("annotate")).try_get_matches_from(["annotate"])?;
        Self::from_arg_matches(&matches)
    }
}

/// Run the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let settings = config.settings();
    tracing::debug!(
        "Using input '{}' and output '{}'",
        settings.input_path.display(),
        settings.output_path.display()
    );

    match cli.command {
        None => annotate::cmd_annotate(&settings, &AnnotateArgs::from_env()?, cli.verbose),
        Some(Commands::Annotate(args)) => annotate::cmd_annotate(&settings, &args, cli.verbose),
        Some(Commands::Summary {
            input,
            damage_only,
            json,
        }) => summary::cmd_summary(&settings, input, damage_only, json),
        Some(Commands::Config) => config_cmd::cmd_config(&config, &settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_annotate() {
        let cli = Cli::try_parse_from(["grimoire"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_annotate_flags() {
        let cli = Cli::try_parse_from([
            "grimoire", "annotate", "-i", "in.json", "-o", "out.json", "--limit", "5", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Annotate(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("in.json")));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert_eq!(args.limit, 5);
                assert!(!args.dry_run);
            }
            _ => panic!("expected annotate"),
        }
    }

    #[test]
    fn test_dry_run_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["grimoire", "annotate", "--dry-run", "--stdout"]).is_err());
    }
}
