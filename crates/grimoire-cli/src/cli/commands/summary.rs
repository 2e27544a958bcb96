//! Spell summary listing.

use std::path::PathBuf;

use console::style;

use grimoire::config::Settings;
use grimoire::store::load_spells;
use grimoire_annotate::services::summary::{summarize, SpellSummary};

use crate::cli::helpers::truncate;
use crate::cli::icons::{check, warn};

const TITLE_WIDTH: usize = 32;

/// List level, damage and save information for every spell in a spell list.
pub fn cmd_summary(
    settings: &Settings,
    input: Option<PathBuf>,
    damage_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| settings.input_path.clone());
    let records = load_spells(&input)?;

    let summaries: Vec<SpellSummary> = records
        .iter()
        .filter(|r| r.is_object())
        .map(summarize)
        .filter(|s| !damage_only || s.deals_damage())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        eprintln!("{} No spells to show in '{}'", warn(), input.display());
        return Ok(());
    }

    println!(
        "{}",
        style(format!(
            "{:<width$} {:>7} {:>8} {:<12} {}",
            "Spell",
            "Level",
            "Damage",
            "Type",
            "Save",
            width = TITLE_WIDTH
        ))
        .bold()
    );

    for summary in &summaries {
        let title = summary.title.as_deref().unwrap_or("<untitled>");
        println!(
            "{:<width$} {:>7} {:>8} {:<12} {}",
            truncate(title, TITLE_WIDTH),
            summary.level_label(),
            summary.damage_dice.as_deref().unwrap_or("-"),
            summary.damage_type.unwrap_or("N/A"),
            check(summary.needs_save),
            width = TITLE_WIDTH
        );
    }

    Ok(())
}
