//! Annotation command.

use std::sync::mpsc;

use console::style;

use grimoire::config::Settings;
use grimoire::store::{load_spells, save_spells, to_pretty_json};
use grimoire_annotate::services::annotation::{
    AnnotationEvent, AnnotationManager, Annotator, DamageSaveAnnotator,
};

use super::AnnotateArgs;
use crate::cli::helpers::truncate;
use crate::cli::icons::{dim_arrow, success, warn};

/// Print status lines for the events of a finished batch.
fn report_events(event_rx: mpsc::Receiver<AnnotationEvent>, label: &str, verbose: bool) {
    let mut current_title = None;

    for event in event_rx.try_iter() {
        match event {
            AnnotationEvent::Started { total_records } => {
                if verbose {
                    eprintln!("{} {} over {} spells", dim_arrow(), label, total_records);
                }
            }
            AnnotationEvent::RecordStarted { title, .. } => {
                current_title = title;
            }
            AnnotationEvent::RecordAnnotated { index, findings } => {
                if verbose {
                    let title = current_title.take().unwrap_or_else(|| format!("#{}", index));
                    eprintln!(
                        "  {} {} [{}]{}",
                        dim_arrow(),
                        truncate(&title, 40),
                        findings.tags.join(", "),
                        findings
                            .content_line
                            .map(|line| format!(" {}", style(line).dim()))
                            .unwrap_or_default()
                    );
                }
            }
            AnnotationEvent::RecordNoResult { .. } => {
                current_title = None;
            }
            AnnotationEvent::RecordSkipped { index } => {
                eprintln!("  {} Entry #{} is not a spell object, left as-is", warn(), index);
            }
            AnnotationEvent::Complete {
                annotated,
                no_result,
                skipped,
                remaining,
            } => {
                eprintln!(
                    "{} {} complete: {} annotated, {} without findings, {} skipped",
                    success(),
                    label,
                    annotated,
                    no_result,
                    skipped
                );
                if remaining > 0 {
                    eprintln!(
                        "  {} {} spells past the limit were left untouched",
                        dim_arrow(),
                        remaining
                    );
                }
            }
        }
    }
}

/// Load, annotate and save a spell list.
pub fn cmd_annotate(settings: &Settings, args: &AnnotateArgs, verbose: bool) -> anyhow::Result<()> {
    let settings = settings
        .clone()
        .with_overrides(args.input.clone(), args.output.clone());

    let mut records = load_spells(&settings.input_path)?;
    eprintln!(
        "{} Successfully loaded '{}' ({} spells)",
        success(),
        settings.input_path.display(),
        records.len()
    );

    let annotator = DamageSaveAnnotator::new();
    let manager = AnnotationManager::new().with_limit(args.limit);
    let (event_tx, event_rx) = mpsc::channel();

    let result = manager.run_batch(&annotator, &mut records, &event_tx);
    drop(event_tx);
    report_events(event_rx, annotator.display_name(), verbose);

    for (tag, count) in &result.tag_counts {
        eprintln!("  {} {}: {}", dim_arrow(), tag, count);
    }

    if args.stdout {
        println!("{}", to_pretty_json(&records, settings.indent)?);
        return Ok(());
    }

    if args.dry_run {
        eprintln!(
            "{} Dry run: not writing '{}'",
            warn(),
            settings.output_path.display()
        );
        return Ok(());
    }

    save_spells(&settings.output_path, &records, settings.indent)?;
    eprintln!(
        "{} Successfully processed spells and saved the modified data to '{}'",
        success(),
        settings.output_path.display()
    );

    Ok(())
}
