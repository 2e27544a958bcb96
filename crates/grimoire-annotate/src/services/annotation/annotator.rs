//! Annotator trait - shared abstraction for annotation backends.

use grimoire::models::SpellRecord;

use super::types::AnnotationOutput;

/// A backend that can annotate spell records.
///
/// Implementations wrap a specific analysis and expose it through a uniform
/// interface so the `AnnotationManager` can orchestrate them identically.
/// Annotation never fails: malformed records degrade to `NoResult` or
/// `Skipped`.
pub trait Annotator: Send + Sync {
    /// Human-readable name for CLI progress output.
    fn display_name(&self) -> &str;

    /// Annotate a single record in place.
    fn annotate(&self, record: &mut SpellRecord) -> AnnotationOutput;
}
