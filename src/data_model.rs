use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One dictionary entry in flight: a single line of the input word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictEntry {
    /// 1-based line number in the input file.
    pub line_number: usize,
    /// Original source location (input file path).
    pub source: String,
    pub text: String,
    pub metadata: HashMap<String, String>, // For intermediate results or context
}

impl DictEntry {
    pub fn new(line_number: usize, source: impl Into<String>, text: impl Into<String>) -> Self {
        DictEntry {
            line_number,
            source: source.into(),
            text: text.into(),
            metadata: HashMap::new(),
        }
    }
}

/// Outcome of running one entry through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProcessingOutcome {
    Success(DictEntry),
    Filtered { entry: DictEntry, reason: String },
}
