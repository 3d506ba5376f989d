use crate::data_model::DictEntry;
use crate::error::Result;
use crate::executor::ProcessingStep;

use async_trait::async_trait;

/// Transform step: lowercases the surviving entry so it matches the
/// lowercase lookups of downstream consumers. Never rejects.
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Default for LowercaseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessingStep for LowercaseNormalizer {
    fn name(&self) -> &'static str {
        "LowercaseNormalizer"
    }

    async fn process(&self, entry: DictEntry) -> Result<DictEntry> {
        let mut entry = entry;
        let lowered = entry.text.to_lowercase();
        if lowered != entry.text {
            entry
                .metadata
                .insert("case_normalized".to_string(), "true".to_string());
            entry.text = lowered;
        }
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry(line_number: usize, text: &str) -> DictEntry {
        DictEntry::new(line_number, "test_source", text)
    }

    #[tokio::test]
    async fn test_uppercase_is_lowered() {
        let step = LowercaseNormalizer::new();
        let result = step
            .process(create_test_entry(1, "HELLO"))
            .await
            .expect("Normalizer never rejects");
        assert_eq!(result.text, "hello");
        assert_eq!(
            result.metadata.get("case_normalized"),
            Some(&"true".to_string())
        );
    }

    #[tokio::test]
    async fn test_already_lowercase_untouched() {
        let step = LowercaseNormalizer::new();
        let result = step.process(create_test_entry(1, "hello")).await.unwrap();
        assert_eq!(result.text, "hello");
        assert!(result.metadata.get("case_normalized").is_none());
    }

    #[tokio::test]
    async fn test_non_ascii_lowercasing() {
        let step = LowercaseNormalizer::new();
        let result = step.process(create_test_entry(1, "Æble")).await.unwrap();
        assert_eq!(result.text, "æble");
    }
}
