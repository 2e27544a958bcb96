//! Content line parsing.
//!
//! Spell bodies are stored as strings of the form `"<kind> | <text>"`, e.g.
//! `"text | Each creature takes 8d6 fire damage."` or
//! `"property | Range | 150 feet"`.

/// Separator between a line's kind and its text.
const SEPARATOR: &str = " |";

/// Borrowed view of one content line split at the first `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    kind: &'a str,
    text: &'a str,
}

impl<'a> ContentLine<'a> {
    /// Split a raw line into kind and text. Returns `None` when the line has
    /// no `|` separator at all.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (kind, text) = raw.split_once('|')?;
        Some(Self {
            kind: kind.trim(),
            text: text.trim(),
        })
    }

    pub fn kind(&self) -> &'a str {
        self.kind
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Case-insensitive kind comparison.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }

    /// Name and value of a `property | <name> | <value>` line.
    pub fn property(&self) -> Option<(&'a str, &'a str)> {
        if !self.is_kind("property") {
            return None;
        }
        let (name, value) = self.text.split_once('|')?;
        Some((name.trim(), value.trim()))
    }
}

/// Build a content line from its parts.
pub fn format_line(kind: &str, text: &str) -> String {
    format!("{}{} {}", kind, SEPARATOR, text)
}

/// Whether `line` starts with `"<kind> |"`, compared case-sensitively.
pub fn has_kind(line: &str, kind: &str) -> bool {
    line.strip_prefix(kind)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Text following a `"<kind> |"` prefix, with the kind matched
/// case-insensitively. The returned text is not trimmed.
pub fn text_after_kind<'a>(line: &'a str, kind: &str) -> Option<&'a str> {
    let prefix_len = kind.len() + SEPARATOR.len();
    let head = line.get(..prefix_len)?;
    let matches_kind = head.as_bytes()[..kind.len()].eq_ignore_ascii_case(kind.as_bytes());
    if matches_kind && head.ends_with(SEPARATOR) {
        Some(&line[prefix_len..])
    } else {
        None
    }
}
