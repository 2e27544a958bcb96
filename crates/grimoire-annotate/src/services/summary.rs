//! Spell summaries for listing annotated spells.
//!
//! Pulls the fields a spell list view shows (level, damage dice, damage type,
//! save, casting properties) out of a record's tags and content lines.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use grimoire::models::{text_after_kind, ContentLine, SpellRecord};

use super::annotation::NEEDS_SAVE_TAG;

static DICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+d\d+").expect("dice pattern should compile"));

static LEVEL_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+)(?:st|nd|rd|th) level$").expect("level tag pattern should compile")
});

const CANTRIP_TAG: &str = "Cantrips";

/// Damage types, in lookup order.
pub const DAMAGE_TYPES: [&str; 13] = [
    "Acid",
    "Bludgeoning",
    "Cold",
    "Fire",
    "Force",
    "Lightning",
    "Necrotic",
    "Piercing",
    "Poison",
    "Psychic",
    "Radiant",
    "Slashing",
    "Thunder",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpellSummary {
    pub title: Option<String>,
    /// Spell level; 0 for cantrips.
    pub level: Option<u32>,
    pub damage_dice: Option<String>,
    pub damage_type: Option<&'static str>,
    pub needs_save: bool,
    pub casting_time: Option<String>,
    pub range: Option<String>,
    pub components: Vec<String>,
    pub duration: Option<String>,
}

impl SpellSummary {
    pub fn deals_damage(&self) -> bool {
        self.damage_dice.is_some()
    }

    /// "Cantrip", "3", or "?" when the level is unknown.
    pub fn level_label(&self) -> String {
        match self.level {
            Some(0) => "Cantrip".to_string(),
            Some(level) => level.to_string(),
            None => "?".to_string(),
        }
    }
}

/// Summarize one record. Works on raw and annotated records alike; the save
/// flag relies on the `needs_save` tag.
pub fn summarize(record: &SpellRecord) -> SpellSummary {
    let mut summary = SpellSummary {
        title: record.title().map(str::to_string),
        level: spell_level(record.tags()),
        damage_dice: damage_dice(record.content_lines()).map(str::to_string),
        damage_type: damage_type(record.content_lines()),
        needs_save: record.has_tag(NEEDS_SAVE_TAG),
        ..Default::default()
    };

    for line in record.content_lines().filter_map(ContentLine::parse) {
        let Some((name, value)) = line.property() else {
            continue;
        };
        if name.eq_ignore_ascii_case("Casting Time") {
            summary.casting_time = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("Range") {
            summary.range = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("Components") {
            summary.components = value
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
        } else if name.eq_ignore_ascii_case("Duration") {
            summary.duration = Some(value.to_string());
        }
    }

    summary
}

/// Level from a `"<n>st|nd|rd|th level"` tag, or 0 for a `Cantrips` tag.
pub fn spell_level<'a, I>(tags: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut is_cantrip = false;
    for tag in tags {
        if let Some(caps) = LEVEL_TAG.captures(tag) {
            return caps[1].parse().ok();
        }
        is_cantrip |= tag == CANTRIP_TAG;
    }
    is_cantrip.then_some(0)
}

/// First dice expression appearing in any content line.
pub fn damage_dice<'a, I>(lines: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .find_map(|line| DICE.find(line).map(|m| m.as_str()))
}

/// Damage type of a spell.
///
/// A derived `damage | ...` line is authoritative and matched
/// case-insensitively. Otherwise the first line naming a capitalized damage
/// type wins.
pub fn damage_type<'a, I>(lines: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let lines: Vec<&str> = lines.into_iter().collect();

    let from_damage_line = lines
        .iter()
        .filter_map(|line| text_after_kind(line, "damage"))
        .find_map(|text| {
            let text = text.to_lowercase();
            DAMAGE_TYPES
                .iter()
                .find(|ty| text.contains(&ty.to_lowercase()))
                .copied()
        });
    if from_damage_line.is_some() {
        return from_damage_line;
    }

    lines
        .iter()
        .find_map(|line| DAMAGE_TYPES.iter().find(|ty| line.contains(*ty)).copied())
}
