//! Spell record model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding a record's tag labels.
pub const TAGS_KEY: &str = "tags";
/// Key holding a record's `"<kind> | <text>"` content lines.
pub const CONTENTS_KEY: &str = "contents";

/// One spell entry as read from a spell list.
///
/// The record is kept as raw JSON so that fields the annotators do not know
/// about (`title`, level, source book, ...) pass through untouched and keep
/// their original key order. Only `tags` and `contents` are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellRecord(Value);

impl SpellRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build a record from tag and content strings.
    pub fn from_parts(title: &str, tags: &[&str], contents: &[&str]) -> Self {
        let mut map = Map::new();
        map.insert("title".to_string(), Value::from(title));
        map.insert(TAGS_KEY.to_string(), Value::from(tags.to_vec()));
        map.insert(CONTENTS_KEY.to_string(), Value::from(contents.to_vec()));
        Self(Value::Object(map))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether this entry is a JSON object. Anything else is left alone.
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// Display title, taken from `title` or `name`.
    pub fn title(&self) -> Option<&str> {
        self.0
            .get("title")
            .or_else(|| self.0.get("name"))
            .and_then(Value::as_str)
    }

    /// Ensure `tags` and `contents` are arrays, replacing missing or
    /// wrongly-typed values with empty arrays in place.
    ///
    /// Returns `false` if the record is not an object.
    pub fn normalize(&mut self) -> bool {
        let Some(map) = self.0.as_object_mut() else {
            return false;
        };
        for key in [TAGS_KEY, CONTENTS_KEY] {
            if !map.get(key).is_some_and(Value::is_array) {
                map.insert(key.to_string(), Value::Array(Vec::new()));
            }
        }
        true
    }

    /// String tags, in order. Non-string entries are ignored.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.array(TAGS_KEY).iter().filter_map(Value::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// Append `tag` unless it is already present. Returns whether it was added.
    ///
    /// The record must have been normalized; otherwise nothing is added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.has_tag(tag) {
            return false;
        }
        match self.0.get_mut(TAGS_KEY).and_then(Value::as_array_mut) {
            Some(tags) => {
                tags.push(Value::from(tag));
                true
            }
            None => false,
        }
    }

    /// Raw content entries, including any non-string values.
    pub fn contents(&self) -> &[Value] {
        self.array(CONTENTS_KEY)
    }

    /// String content lines, in order.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.contents().iter().filter_map(Value::as_str)
    }

    /// Replace `contents`. Ignored when the record is not an object.
    pub fn set_contents(&mut self, contents: Vec<Value>) {
        if let Some(map) = self.0.as_object_mut() {
            map.insert(CONTENTS_KEY.to_string(), Value::Array(contents));
        }
    }

    fn array(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl From<Value> for SpellRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_creates_missing_fields() {
        let mut record = SpellRecord::new(json!({"title": "Light"}));
        assert!(record.normalize());
        assert_eq!(
            record.as_value(),
            &json!({"title": "Light", "tags": [], "contents": []})
        );
    }

    #[test]
    fn test_normalize_replaces_wrong_types_in_place() {
        let mut record = SpellRecord::new(json!({
            "tags": "fire",
            "title": "Fireball",
            "contents": {"text": "boom"},
        }));
        assert!(record.normalize());

        let keys: Vec<&str> = record
            .as_value()
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["tags", "title", "contents"]);
        assert!(record.contents().is_empty());
        assert_eq!(record.tags().count(), 0);
    }

    #[test]
    fn test_normalize_non_object() {
        let mut record = SpellRecord::new(json!("not a spell"));
        assert!(!record.normalize());
        assert_eq!(record.as_value(), &json!("not a spell"));
    }

    #[test]
    fn test_add_tag_is_unique() {
        let mut record = SpellRecord::from_parts("Shield", &["Wizard"], &[]);
        assert!(record.add_tag("needs_save"));
        assert!(!record.add_tag("needs_save"));
        assert!(!record.add_tag("Wizard"));

        let tags: Vec<&str> = record.tags().collect();
        assert_eq!(tags, vec!["Wizard", "needs_save"]);
    }

    #[test]
    fn test_add_tag_requires_normalized_record() {
        let mut record = SpellRecord::new(json!({"title": "Shield"}));
        assert!(!record.add_tag("damage"));
    }

    #[test]
    fn test_content_lines_skip_non_strings() {
        let record = SpellRecord::new(json!({
            "contents": ["text | One", 7, null, "bullet | Two"],
        }));
        let lines: Vec<&str> = record.content_lines().collect();
        assert_eq!(lines, vec!["text | One", "bullet | Two"]);
        assert_eq!(record.contents().len(), 4);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let titled = SpellRecord::new(json!({"title": "Fireball", "name": "x"}));
        let named = SpellRecord::new(json!({"name": "Sleep"}));
        let untitled = SpellRecord::new(json!({"title": 3}));

        assert_eq!(titled.title(), Some("Fireball"));
        assert_eq!(named.title(), Some("Sleep"));
        assert_eq!(untitled.title(), None);
    }
}
