//! End-to-end annotation of a realistic spell list.

use std::path::Path;

use grimoire::models::SpellRecord;
use grimoire::store::load_spells;
use grimoire_annotate::services::annotation::{annotate_spells, DAMAGE_TAG, NEEDS_SAVE_TAG};
use grimoire_annotate::services::damage::deals_damage;
use serde_json::{json, Value};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/spells.json");

fn fixture() -> Vec<SpellRecord> {
    load_spells(Path::new(FIXTURE)).expect("fixture should load")
}

fn find<'a>(records: &'a [SpellRecord], title: &str) -> &'a SpellRecord {
    records
        .iter()
        .find(|r| r.title() == Some(title))
        .unwrap_or_else(|| panic!("no spell titled {title}"))
}

fn damage_lines(record: &SpellRecord) -> Vec<&str> {
    record
        .content_lines()
        .filter(|line| line.starts_with("damage | "))
        .collect()
}

fn tags(record: &SpellRecord) -> Vec<&str> {
    record.tags().collect()
}

#[test]
fn fireball_gets_damage_after_description_text() {
    let records = annotate_spells(fixture());
    let fireball = find(&records, "Fireball");

    assert_eq!(
        tags(fireball),
        vec!["Sorcerer", "Wizard", "3rd level", "damage", "needs_save"]
    );
    let contents = fireball.contents();
    assert!(contents[6].as_str().unwrap().starts_with("text | A bright streak"));
    assert_eq!(contents[7], json!("damage | 8d6 fire damage"));
    assert_eq!(contents[8], json!("section | At Higher Levels"));
    assert_eq!(contents[5], json!("rule"));
}

#[test]
fn extra_damage_goes_after_bullets() {
    let records = annotate_spells(fixture());
    let hex = find(&records, "Hex");

    assert_eq!(tags(hex), vec!["Warlock", "1st level", "damage"]);
    assert_eq!(
        hex.contents().last(),
        Some(&json!("damage | 1d6 necrotic damage"))
    );
}

#[test]
fn save_without_damage() {
    let records = annotate_spells(fixture());
    let hold = find(&records, "Hold Person");

    assert!(hold.has_tag(NEEDS_SAVE_TAG));
    assert!(!hold.has_tag(DAMAGE_TAG));
    assert!(damage_lines(hold).is_empty());
}

#[test]
fn healing_dice_are_not_damage() {
    let records = annotate_spells(fixture());
    let cure = find(&records, "Cure Wounds");

    assert_eq!(tags(cure), vec!["Bard", "Cleric", "1st level"]);
    assert_eq!(cure.contents().len(), 1);
}

#[test]
fn stale_damage_line_is_rebuilt() {
    let records = annotate_spells(fixture());
    let toll = find(&records, "Toll the Dead");

    assert_eq!(damage_lines(toll), vec!["damage | 1d8 necrotic damage"]);
    assert_eq!(
        tags(toll),
        vec!["Cleric", "Warlock", "Wizard", "Cantrips", "damage", "needs_save"]
    );
    assert_eq!(toll.contents()[1], json!("damage | 1d8 necrotic damage"));
}

#[test]
fn missing_and_malformed_fields_become_empty() {
    let records = annotate_spells(fixture());

    let mage_hand = find(&records, "Mage Hand");
    assert_eq!(
        mage_hand.as_value(),
        &json!({"title": "Mage Hand", "tags": [], "contents": []})
    );

    let sacred_flame = find(&records, "Sacred Flame");
    assert_eq!(sacred_flame.as_value()["tags"], json!([]));
    assert_eq!(sacred_flame.as_value()["contents"], json!([]));
}

#[test]
fn first_phrase_in_text_wins_over_later_save_damage() {
    let records = annotate_spells(fixture());
    let knife = find(&records, "Ice Knife");

    assert_eq!(damage_lines(knife), vec!["damage | 1d10 piercing damage"]);
    assert!(knife.has_tag(NEEDS_SAVE_TAG));
}

#[test]
fn passthrough_fields_untouched() {
    let records = annotate_spells(fixture());
    let fireball = find(&records, "Fireball");

    assert_eq!(fireball.as_value()["icon"], json!("fireball"));
    let keys: Vec<&str> = fireball
        .as_value()
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["title", "icon", "tags", "contents"]);
}

#[test]
fn annotation_is_idempotent() {
    let once = annotate_spells(fixture());
    let twice = annotate_spells(once.clone());

    let once: Vec<Value> = once.into_iter().map(SpellRecord::into_value).collect();
    let twice: Vec<Value> = twice.into_iter().map(SpellRecord::into_value).collect();
    assert_eq!(serde_json::to_string(&once).unwrap(), serde_json::to_string(&twice).unwrap());
}

#[test]
fn tags_and_damage_lines_are_unique() {
    let records = annotate_spells(annotate_spells(fixture()));

    for record in &records {
        let tags = tags(record);
        let mut deduped = tags.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(tags.len(), deduped.len(), "{:?}", record.title());
        assert!(damage_lines(record).len() <= 1, "{:?}", record.title());
    }
}

#[test]
fn other_lines_keep_their_order() {
    let original = fixture();
    let annotated = annotate_spells(original.clone());

    let without_damage = |record: &SpellRecord| -> Vec<Value> {
        record
            .contents()
            .iter()
            .filter(|v| !v.as_str().is_some_and(|s| s.starts_with("damage | ")))
            .cloned()
            .collect()
    };

    for (before, after) in original.iter().zip(&annotated) {
        let before = without_damage(before);
        let after = without_damage(after);
        if before.is_empty() {
            continue;
        }
        assert_eq!(before, after);
    }
}

#[test]
fn damage_tag_tracks_description_patterns() {
    let records = annotate_spells(fixture());

    for record in &records {
        let segments: Vec<String> = record
            .content_lines()
            .filter_map(|line| {
                let lower = line.to_lowercase();
                if lower.starts_with("text |") || lower.starts_with("description |") {
                    line.split_once('|').map(|(_, text)| text.trim().to_string())
                } else {
                    None
                }
            })
            .collect();

        let strict = segments.iter().any(|s| deals_damage(s));
        let save = segments
            .iter()
            .any(|s| s.to_lowercase().contains("saving throw"));

        if strict {
            assert!(record.has_tag(DAMAGE_TAG), "{:?}", record.title());
        }
        assert_eq!(record.has_tag(NEEDS_SAVE_TAG), save, "{:?}", record.title());
    }
}
