//! Configuration display command.

use console::style;

use grimoire::config::{Config, Settings, DEFAULT_CONFIG_FILENAME};

/// Print the effective settings and where they came from.
pub fn cmd_config(config: &Config, settings: &Settings) -> anyhow::Result<()> {
    let source = config
        .source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("defaults (no {} found)", DEFAULT_CONFIG_FILENAME));

    println!("{} {}", style("Config:").bold(), source);
    println!("  input:  {}", settings.input_path.display());
    println!("  output: {}", settings.output_path.display());
    println!("  indent: {}", settings.indent);

    Ok(())
}
