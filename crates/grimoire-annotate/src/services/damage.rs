//! Damage and saving throw detection for spell descriptions.
//!
//! Detection is purely lexical: dice notation (`8d6`, `1d10 + 4`) followed by
//! the word "damage" marks a damaging spell, and the phrase "saving throw"
//! marks one that needs a save.

use std::sync::LazyLock;

use regex::Regex;

/// Dice, an optional flat bonus, at most one more word, then "damage".
/// Only used to flag a spell as dealing damage.
static STRICT_DAMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+d\d+(?:\s*\+\s*\d+)?(?:\s+\w+)?\s*damage\b")
        .expect("strict damage pattern should compile")
});

/// Dice followed by anything up to the nearest "damage" within the same
/// clause. Used to pull out the human-readable damage phrase.
static DAMAGE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+d\d+(?:\s*\+\s*\d+)?\s*[^.,;]*?damage\b")
        .expect("damage phrase pattern should compile")
});

const SAVING_THROW: &str = "saving throw";
const HALF_DAMAGE_PREFIX: &str = "half as much";
const EXTRA_PREFIX: &str = "extra ";
const HIT_CLAUSE: &str = " on a";

/// What a set of description segments says about damage and saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageScan {
    pub deals_damage: bool,
    pub needs_save: bool,
    /// First damage phrase found, e.g. `"8d6 fire damage"`.
    pub phrase: Option<String>,
}

/// Whether `segment` contains dice notation directly followed by "damage".
pub fn deals_damage(segment: &str) -> bool {
    STRICT_DAMAGE.is_match(segment)
}

pub fn mentions_saving_throw(segment: &str) -> bool {
    segment.to_lowercase().contains(SAVING_THROW)
}

/// Extract the first damage phrase from `segment`.
///
/// A phrase that opens with "half as much" is only accepted when it carries
/// its own dice and damage. Accepted phrases are cleaned by
/// [`clean_damage_phrase`].
pub fn extract_damage_phrase(segment: &str) -> Option<String> {
    let candidate = DAMAGE_PHRASE.find(segment)?.as_str().trim();
    accept_candidate(candidate)
}

fn accept_candidate(candidate: &str) -> Option<String> {
    let is_half_damage = candidate.to_lowercase().starts_with(HALF_DAMAGE_PREFIX);
    if is_half_damage && !deals_damage(candidate) {
        return None;
    }
    Some(clean_damage_phrase(candidate))
}

/// Trim a damage phrase down to the damage itself: cut at the first comma and
/// at the first " on a" ("on a hit", "on a failed save"), then drop a leading
/// "extra ". The "extra " check is case-sensitive.
pub fn clean_damage_phrase(phrase: &str) -> String {
    let phrase = phrase.split(',').next().unwrap_or(phrase);
    let phrase = phrase.split(HIT_CLAUSE).next().unwrap_or(phrase).trim();
    phrase.strip_prefix(EXTRA_PREFIX).unwrap_or(phrase).to_string()
}

/// Scan description segments in order.
///
/// Every segment contributes to the damage and save flags; only the first
/// segment yielding an accepted damage phrase supplies `phrase`.
pub fn scan_segments<'a, I>(segments: I) -> DamageScan
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scan = DamageScan::default();

    for segment in segments {
        if deals_damage(segment) {
            scan.deals_damage = true;
        }

        if scan.phrase.is_none() {
            if let Some(phrase) = extract_damage_phrase(segment) {
                scan.phrase = Some(phrase);
                scan.deals_damage = true;
            }
        }

        if mentions_saving_throw(segment) {
            scan.needs_save = true;
        }
    }

    scan
}
