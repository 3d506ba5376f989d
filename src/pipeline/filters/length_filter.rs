use crate::data_model::DictEntry;
use crate::error::{PipelineError, Result};
use crate::executor::ProcessingStep;

use async_trait::async_trait;

/// Rejects entries that are too short to be useful dictionary words.
///
/// The comparison is `char_count <= min_length`: with the default threshold
/// of 2, one- and two-character lines are dropped. The count is over the
/// line's characters after the line terminator has been stripped by the
/// reader, so the terminator never counts toward the threshold. Whitespace
/// characters do count.
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }
}

#[async_trait]
impl ProcessingStep for MinLengthFilter {
    fn name(&self) -> &'static str {
        "MinLengthFilter"
    }

    async fn process(&self, entry: DictEntry) -> Result<DictEntry> {
        let mut entry = entry;

        let char_count = entry.text.chars().count();
        entry.metadata.insert(
            "length_metric_char_count".to_string(),
            char_count.to_string(),
        );

        if char_count <= self.min_length {
            let reason = format!(
                "Entry too short (found {} chars, required more than {})",
                char_count, self.min_length
            );
            entry
                .metadata
                .insert("length_filter_status".to_string(), "filtered".to_string());
            Err(PipelineError::EntryFiltered {
                entry: Box::new(entry),
                reason,
            })
        } else {
            entry
                .metadata
                .insert("length_filter_status".to_string(), "passed".to_string());
            Ok(entry)
        }
    }
}
