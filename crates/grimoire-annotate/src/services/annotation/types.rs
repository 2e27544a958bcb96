//! Types shared across annotation backends.

use std::collections::BTreeMap;

/// Events emitted during annotation processing.
/// Used by the CLI to drive status messages.
#[derive(Debug, Clone)]
pub enum AnnotationEvent {
    Started {
        total_records: usize,
    },
    RecordStarted {
        index: usize,
        title: Option<String>,
    },
    RecordAnnotated {
        index: usize,
        findings: Findings,
    },
    RecordNoResult {
        index: usize,
    },
    RecordSkipped {
        index: usize,
    },
    Complete {
        annotated: usize,
        no_result: usize,
        skipped: usize,
        remaining: usize,
    },
}

/// What an annotator derived for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    /// Tags the record qualifies for, whether or not it already had them.
    pub tags: Vec<String>,
    /// Content line written into the record, if any.
    pub content_line: Option<String>,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.content_line.is_none()
    }
}

/// Result of a single record annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationOutput {
    /// Annotation derived tags or content.
    Data(Findings),
    /// Nothing was derived (the record was still normalized).
    NoResult,
    /// Entry was left untouched (not a JSON object).
    Skipped,
}

/// Result of a batch annotation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchAnnotationResult {
    pub annotated: usize,
    pub no_result: usize,
    pub skipped: usize,
    /// Records past the batch limit, left untouched.
    pub remaining: usize,
    /// Number of records flagged with each tag.
    pub tag_counts: BTreeMap<String, usize>,
}

impl BatchAnnotationResult {
    pub fn processed(&self) -> usize {
        self.annotated + self.no_result + self.skipped
    }

    pub fn tag_count(&self, tag: &str) -> usize {
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }
}
