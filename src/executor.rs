use crate::data_model::DictEntry;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A single step of the cleaning pipeline: either a filter (rejects an entry
/// with `PipelineError::EntryFiltered`) or a transform (returns the entry
/// modified).
#[async_trait]
pub trait ProcessingStep: Send + Sync {
    /// Step name, used for logging and error reporting.
    fn name(&self) -> &'static str;

    async fn process(&self, entry: DictEntry) -> Result<DictEntry>;
}

/// Runs an ordered list of steps over one entry at a time.
pub struct PipelineExecutor {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl PipelineExecutor {
    pub fn new(steps: Vec<Box<dyn ProcessingStep>>) -> Self {
        if steps.is_empty() {
            warn!("Pipeline created with no steps.");
        }
        PipelineExecutor { steps }
    }

    /// Run a single entry through every step in order. The first failing step
    /// short-circuits the rest; its error is wrapped in `StepError` so the
    /// caller knows which step rejected or failed.
    pub async fn run_single_async(&self, initial_entry: DictEntry) -> Result<DictEntry> {
        let mut current_entry = initial_entry;
        for step in &self.steps {
            debug!("Running step: {}", step.name());

            current_entry =
                step.process(current_entry)
                    .await
                    .map_err(|e| PipelineError::StepError {
                        step_name: step.name().to_string(),
                        source: Box::new(e),
                    })?;
        }
        Ok(current_entry)
    }
}
