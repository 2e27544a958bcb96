//! Status glyphs for grimoire's stderr messages and summary table.

use console::{style, StyledObject};

/// Green ✓ for a finished load, batch or save.
pub fn success() -> StyledObject<&'static str> {
    style("✓").green()
}

/// Yellow ! for skipped entries and dry runs.
pub fn warn() -> StyledObject<&'static str> {
    style("!").yellow()
}

/// Red ✗ printed before a fatal error.
pub fn error() -> StyledObject<&'static str> {
    style("✗").red()
}

/// Dim arrow for per-spell and per-tag detail lines.
pub fn dim_arrow() -> StyledObject<&'static str> {
    style("→").dim()
}

/// Save column marker in `grimoire summary`.
pub fn check(needs_save: bool) -> StyledObject<&'static str> {
    if needs_save {
        style("✔").green()
    } else {
        style("✘").dim()
    }
}
