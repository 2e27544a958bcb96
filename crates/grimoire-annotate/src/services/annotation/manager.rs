//! Annotation manager - generic batch orchestration for any `Annotator`.

use std::sync::mpsc::Sender;

use grimoire::models::SpellRecord;

use super::annotator::Annotator;
use super::types::{AnnotationEvent, AnnotationOutput, BatchAnnotationResult};

/// Orchestrates batch annotation using a given `Annotator`.
#[derive(Debug, Clone, Default)]
pub struct AnnotationManager {
    /// Maximum number of records to annotate (0 = unlimited).
    limit: usize,
}

impl AnnotationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only annotate the first `limit` records (0 = unlimited). Records past
    /// the limit are left untouched.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run a batch of annotations in order, emitting events for progress
    /// tracking.
    ///
    /// The caller owns the event receiver and decides how to present progress.
    /// A dropped receiver does not stop the batch.
    pub fn run_batch(
        &self,
        annotator: &dyn Annotator,
        records: &mut [SpellRecord],
        event_tx: &Sender<AnnotationEvent>,
    ) -> BatchAnnotationResult {
        let effective_limit = if self.limit > 0 {
            self.limit.min(records.len())
        } else {
            records.len()
        };

        let _ = event_tx.send(AnnotationEvent::Started {
            total_records: effective_limit,
        });

        let mut result = BatchAnnotationResult {
            remaining: records.len() - effective_limit,
            ..Default::default()
        };

        for (index, record) in records.iter_mut().take(effective_limit).enumerate() {
            let _ = event_tx.send(AnnotationEvent::RecordStarted {
                index,
                title: record.title().map(str::to_string),
            });

            match annotator.annotate(record) {
                AnnotationOutput::Data(findings) => {
                    result.annotated += 1;
                    for tag in &findings.tags {
                        *result.tag_counts.entry(tag.clone()).or_insert(0) += 1;
                    }
                    let _ = event_tx.send(AnnotationEvent::RecordAnnotated { index, findings });
                }
                AnnotationOutput::NoResult => {
                    result.no_result += 1;
                    let _ = event_tx.send(AnnotationEvent::RecordNoResult { index });
                }
                AnnotationOutput::Skipped => {
                    tracing::warn!("Skipping entry {}: not a JSON object", index);
                    result.skipped += 1;
                    let _ = event_tx.send(AnnotationEvent::RecordSkipped { index });
                }
            }
        }

        let _ = event_tx.send(AnnotationEvent::Complete {
            annotated: result.annotated,
            no_result: result.no_result,
            skipped: result.skipped,
            remaining: result.remaining,
        });

        tracing::info!(
            "{} complete: {} annotated, {} without result, {} skipped, {} remaining",
            annotator.display_name(),
            result.annotated,
            result.no_result,
            result.skipped,
            result.remaining
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use serde_json::json;

    use super::*;
    use crate::services::annotation::DamageSaveAnnotator;

    fn sample_records() -> Vec<SpellRecord> {
        vec![
            SpellRecord::from_parts(
                "Burning Hands",
                &["1st level"],
                &["text | Each creature must make a Dexterity saving throw. It takes 3d6 fire damage on a failed save."],
            ),
            SpellRecord::from_parts("Light", &["Cantrips"], &["text | An object sheds light."]),
            SpellRecord::new(json!(17)),
            SpellRecord::from_parts(
                "Hold Person",
                &["2nd level"],
                &["text | The target must succeed on a Wisdom saving throw or be paralyzed."],
            ),
        ]
    }

    #[test]
    fn test_run_batch_counts() {
        let mut records = sample_records();
        let (tx, rx) = mpsc::channel();

        let result = AnnotationManager::new().run_batch(&DamageSaveAnnotator, &mut records, &tx);

        assert_eq!(result.annotated, 2);
        assert_eq!(result.no_result, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.remaining, 0);
        assert_eq!(result.processed(), 4);
        assert_eq!(result.tag_count("damage"), 1);
        assert_eq!(result.tag_count("needs_save"), 2);

        drop(tx);
        let events: Vec<AnnotationEvent> = rx.iter().collect();
        assert!(matches!(
            events.first(),
            Some(AnnotationEvent::Started { total_records: 4 })
        ));
        assert!(matches!(
            events.last(),
            Some(AnnotationEvent::Complete {
                annotated: 2,
                no_result: 1,
                skipped: 1,
                remaining: 0,
            })
        ));
        assert!(events
            .iter()
            .any(|e| matches!(e, AnnotationEvent::RecordSkipped { index: 2 })));
    }

    #[test]
    fn test_run_batch_respects_limit() {
        let mut records = sample_records();
        let untouched = records[3].clone();
        let (tx, _rx) = mpsc::channel();

        let result = AnnotationManager::new()
            .with_limit(2)
            .run_batch(&DamageSaveAnnotator, &mut records, &tx);

        assert_eq!(result.processed(), 2);
        assert_eq!(result.remaining, 2);
        assert_eq!(records[3], untouched);
        assert!(records[0].has_tag("damage"));
    }

    #[test]
    fn test_run_batch_with_dropped_receiver() {
        let mut records = sample_records();
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let result = AnnotationManager::new().run_batch(&DamageSaveAnnotator, &mut records, &tx);
        assert_eq!(result.processed(), 4);
    }

    #[test]
    fn test_run_batch_empty() {
        let (tx, rx) = mpsc::channel();
        let result = AnnotationManager::new().run_batch(&DamageSaveAnnotator, &mut [], &tx);

        assert_eq!(result, BatchAnnotationResult::default());
        drop(tx);
        assert_eq!(rx.iter().count(), 2);
    }
}
