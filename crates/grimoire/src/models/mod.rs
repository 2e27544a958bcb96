//! Data models for spell records.

mod content_line;
mod spell;

pub use content_line::{format_line, has_kind, text_after_kind, ContentLine};
pub use spell::{SpellRecord, CONTENTS_KEY, TAGS_KEY};
