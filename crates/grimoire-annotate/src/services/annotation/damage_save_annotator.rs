//! Damage and saving throw annotator - wraps `scan_segments()` behind the
//! `Annotator` trait.

use serde_json::Value;

use grimoire::models::{format_line, has_kind, text_after_kind, SpellRecord};

use super::annotator::Annotator;
use super::types::{AnnotationOutput, Findings};
use crate::services::damage::scan_segments;

/// Tag for spells whose description deals dice damage.
pub const DAMAGE_TAG: &str = "damage";
/// Tag for spells whose description calls for a saving throw.
pub const NEEDS_SAVE_TAG: &str = "needs_save";

const DAMAGE_KIND: &str = "damage";
/// Prefix of derived damage lines; any such line is rebuilt on every run.
const DAMAGE_LINE_PREFIX: &str = "damage | ";
/// Content kinds whose text is scanned, in lookup order.
const ANALYZED_KINDS: [&str; 2] = ["text", "description"];
/// Content kinds a derived damage line is placed after.
const BODY_KINDS: [&str; 2] = ["text", "bullet"];

/// Annotator that tags damaging spells and spells with saving throws, and
/// records the damage phrase as a `damage | ...` content line.
///
/// Re-running it on its own output changes nothing: stale damage lines are
/// dropped and rebuilt, and tags are only added when missing.
#[derive(Debug, Default)]
pub struct DamageSaveAnnotator;

impl DamageSaveAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for DamageSaveAnnotator {
    fn display_name(&self) -> &str {
        "Damage & Saving Throws"
    }

    fn annotate(&self, record: &mut SpellRecord) -> AnnotationOutput {
        if !record.normalize() {
            return AnnotationOutput::Skipped;
        }

        let scan = scan_segments(record.content_lines().filter_map(analyzed_segment));

        let mut new_contents: Vec<Value> = record
            .contents()
            .iter()
            .filter(|line| !is_damage_line(line))
            .cloned()
            .collect();

        let mut findings = Findings::default();
        if scan.deals_damage {
            record.add_tag(DAMAGE_TAG);
            findings.tags.push(DAMAGE_TAG.to_string());
        }
        if scan.needs_save {
            record.add_tag(NEEDS_SAVE_TAG);
            findings.tags.push(NEEDS_SAVE_TAG.to_string());
        }

        if let Some(phrase) = scan.phrase.filter(|p| !p.is_empty()) {
            let line = format_line(DAMAGE_KIND, &phrase);
            insert_damage_line(&mut new_contents, &line);
            findings.content_line = Some(line);
        }

        record.set_contents(new_contents);

        tracing::debug!(
            "{}: tags={:?} damage={:?}",
            record.title().unwrap_or("<untitled>"),
            findings.tags,
            findings.content_line
        );

        if findings.is_empty() {
            AnnotationOutput::NoResult
        } else {
            AnnotationOutput::Data(findings)
        }
    }
}

/// Annotate every record with `DamageSaveAnnotator`, returning the records.
pub fn annotate_spells(mut records: Vec<SpellRecord>) -> Vec<SpellRecord> {
    let annotator = DamageSaveAnnotator::new();
    for record in &mut records {
        annotator.annotate(record);
    }
    records
}

/// Trimmed text of a `text |` or `description |` line (kind matched
/// case-insensitively).
fn analyzed_segment(line: &str) -> Option<&str> {
    ANALYZED_KINDS
        .iter()
        .find_map(|kind| text_after_kind(line, kind))
        .map(str::trim)
}

fn is_damage_line(line: &Value) -> bool {
    line.as_str()
        .is_some_and(|s| s.starts_with(DAMAGE_LINE_PREFIX))
}

/// Insert `line` right after the last body line (`text |` / `bullet |`), or
/// at the end when there is none. An identical existing line is left alone.
fn insert_damage_line(contents: &mut Vec<Value>, line: &str) {
    if contents.iter().any(|existing| existing.as_str() == Some(line)) {
        return;
    }

    let index = contents
        .iter()
        .rposition(|existing| {
            existing
                .as_str()
                .is_some_and(|s| BODY_KINDS.iter().any(|kind| has_kind(s, kind)))
        })
        .map(|i| i + 1)
        .unwrap_or(contents.len());

    contents.insert(index, Value::from(line));
}
