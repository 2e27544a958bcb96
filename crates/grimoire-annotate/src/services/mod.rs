pub mod annotation;
pub mod damage;
pub mod summary;

pub use annotation::{
    annotate_spells, AnnotationEvent, AnnotationManager, AnnotationOutput, Annotator,
    BatchAnnotationResult, DamageSaveAnnotator, Findings,
};
pub use damage::{scan_segments, DamageScan};
pub use summary::{summarize, SpellSummary};
