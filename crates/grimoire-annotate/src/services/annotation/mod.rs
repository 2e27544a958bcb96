//! Annotation pipeline - trait-based abstraction for spell annotators.
//!
//! Each annotator implements the `Annotator` trait. The `AnnotationManager`
//! provides a single batch loop that works with any annotator.

mod annotator;
mod damage_save_annotator;
mod manager;
mod types;

pub use annotator::Annotator;
pub use damage_save_annotator::{annotate_spells, DamageSaveAnnotator, DAMAGE_TAG, NEEDS_SAVE_TAG};
pub use manager::AnnotationManager;
pub use types::{AnnotationEvent, AnnotationOutput, BatchAnnotationResult, Findings};
