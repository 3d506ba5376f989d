use crate::data_model::DictEntry;
use crate::error::{PipelineError, Result};
use crate::executor::ProcessingStep;
use crate::utils::text::{punctuation_hits, PUNCTUATION};

use async_trait::async_trait;
use std::collections::HashSet;

/// Rejects entries that contain any punctuation character.
///
/// Downstream consumers strip punctuation from their lookups, so a
/// punctuation-bearing dictionary entry could never match a query.
pub struct PunctuationFilter {
    punctuation: HashSet<char>,
}

impl PunctuationFilter {
    /// Filter with the default ASCII punctuation set.
    pub fn new() -> Self {
        PunctuationFilter {
            punctuation: PUNCTUATION.clone(),
        }
    }

    /// Filter with a caller-supplied punctuation set.
    pub fn with_set(punctuation: HashSet<char>) -> Self {
        PunctuationFilter { punctuation }
    }
}

impl Default for PunctuationFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessingStep for PunctuationFilter {
    fn name(&self) -> &'static str {
        "PunctuationFilter"
    }

    async fn process(&self, entry: DictEntry) -> Result<DictEntry> {
        let mut entry = entry;

        let hits = punctuation_hits(&entry.text, &self.punctuation);
        entry.metadata.insert(
            "punctuation_metric_hit_count".to_string(),
            hits.len().to_string(),
        );

        if !hits.is_empty() {
            let reason = format!(
                "Entry contains punctuation ({})",
                hits.iter()
                    .map(|ch| format!("'{}'", ch))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            entry.metadata.insert(
                "punctuation_filter_status".to_string(),
                "filtered".to_string(),
            );
            Err(PipelineError::EntryFiltered {
                entry: Box::new(entry),
                reason,
            })
        } else {
            entry.metadata.insert(
                "punctuation_filter_status".to_string(),
                "passed".to_string(),
            );
            Ok(entry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry(line_number: usize, text: &str) -> DictEntry {
        DictEntry::new(line_number, "test_source", text)
    }

    #[tokio::test]
    async fn test_clean_entry_passes() {
        let filter = PunctuationFilter::new();
        let result = filter
            .process(create_test_entry(1, "hello"))
            .await
            .expect("Entry without punctuation should pass");
        assert_eq!(
            result.metadata.get("punctuation_filter_status"),
            Some(&"passed".to_string())
        );
        assert_eq!(
            result.metadata.get("punctuation_metric_hit_count"),
            Some(&"0".to_string())
        );
    }

    #[tokio::test]
    async fn test_apostrophe_rejected() {
        let filter = PunctuationFilter::new();
        let result = filter.process(create_test_entry(1, "it's")).await;
        assert!(result.is_err());
        match result.err().unwrap() {
            PipelineError::EntryFiltered { reason, .. } => {
                assert!(reason.contains("'''"), "Unexpected reason: {}", reason);
            }
            other => panic!("Expected EntryFiltered error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_trailing_punctuation_rejected() {
        let filter = PunctuationFilter::new();
        let result = filter.process(create_test_entry(2, "dog!")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_reason_lists_all_distinct_hits() {
        let filter = PunctuationFilter::new();
        let result = filter.process(create_test_entry(1, "a.b,c.")).await;
        match result.err().unwrap() {
            PipelineError::EntryFiltered { entry, reason } => {
                assert!(reason.contains("'.'"));
                assert!(reason.contains("','"));
                assert_eq!(
                    entry.metadata.get("punctuation_metric_hit_count"),
                    Some(&"2".to_string())
                );
            }
            other => panic!("Expected EntryFiltered error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_set() {
        // With a custom set only '-' disqualifies; "it's" passes.
        let filter = PunctuationFilter::with_set(['-'].into_iter().collect());
        assert!(filter.process(create_test_entry(1, "it's")).await.is_ok());
        assert!(filter
            .process(create_test_entry(2, "well-known"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_digits_and_whitespace_not_punctuation() {
        let filter = PunctuationFilter::new();
        assert!(filter.process(create_test_entry(1, "abc 123")).await.is_ok());
    }
}
