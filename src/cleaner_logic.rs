use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{PipelineConfig, StepConfig};
use crate::data_model::{DictEntry, ProcessingOutcome};
use crate::error::{PipelineError, Result};
use crate::executor::{PipelineExecutor, ProcessingStep};
use crate::pipeline::filters::{LowercaseNormalizer, MinLengthFilter, PunctuationFilter};
use crate::pipeline::readers::{BaseReader, LineReader};
use crate::pipeline::writers::{BaseWriter, LineWriter};

/// Counters for one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningSummary {
    pub total: usize,
    pub kept: usize,
    pub filtered: usize,
}

/// Builds the ordered step list from a validated pipeline configuration.
pub fn build_pipeline(config: &PipelineConfig) -> Result<Vec<Box<dyn ProcessingStep>>> {
    let mut steps: Vec<Box<dyn ProcessingStep>> = Vec::new();

    for step_config in &config.pipeline {
        let step: Box<dyn ProcessingStep> = match step_config {
            StepConfig::MinLengthFilter(params) => {
                debug!(params = ?params, "Adding MinLengthFilter");
                Box::new(MinLengthFilter::new(params.min_length))
            }
            StepConfig::PunctuationFilter(params) => {
                debug!(params = ?params, "Adding PunctuationFilter");
                match &params.punctuation {
                    Some(set) => Box::new(PunctuationFilter::with_set(set.chars().collect())),
                    None => Box::new(PunctuationFilter::new()),
                }
            }
            StepConfig::LowercaseNormalizer(params) => {
                debug!(params = ?params, "Adding LowercaseNormalizer");
                Box::new(LowercaseNormalizer::new())
            }
        };
        steps.push(step);
        info!("Added step: {}", step_config.name());
    }

    if steps.is_empty() {
        warn!("Warning: Building an empty pipeline from configuration!");
    } else {
        info!("Pipeline built successfully with {} steps.", steps.len());
    }
    Ok(steps)
}

/// Runs one entry through the pipeline and classifies the result.
///
/// Returns `Ok(Success)` for survivors, `Ok(Filtered)` for expected rejects,
/// and `Err` for real step failures, which abort the whole run.
pub async fn process_single_entry(
    entry: DictEntry,
    executor: &PipelineExecutor,
) -> Result<ProcessingOutcome> {
    let line_number = entry.line_number;
    match executor.run_single_async(entry).await {
        Ok(processed) => {
            debug!(line = line_number, "Entry accepted");
            Ok(ProcessingOutcome::Success(processed))
        }
        Err(PipelineError::StepError { step_name, source }) => match *source {
            PipelineError::EntryFiltered { entry, reason } => {
                debug!(line = entry.line_number, %step_name, %reason, "Entry was filtered");
                Ok(ProcessingOutcome::Filtered {
                    entry: *entry,
                    reason,
                })
            }
            other => Err(PipelineError::StepError {
                step_name,
                source: Box::new(other),
            }),
        },
        Err(e) => Err(e),
    }
}

/// Drives a full cleaning pass: read every line of `input_path`, run it
/// through the executor, and write survivors to `output_path` in input order.
///
/// The output file is truncated up front; a failed run leaves it in an
/// unspecified state. I/O errors on either side are fatal — there is no
/// retry and no partial-failure recovery.
pub async fn run_cleaning(
    input_path: &Path,
    output_path: &Path,
    executor: &PipelineExecutor,
) -> Result<CleaningSummary> {
    let reader = LineReader::new(input_path);
    let entries = reader.read_entries()?;

    let mut writer = LineWriter::new(output_path)?;
    let mut summary = CleaningSummary::default();

    for entry_result in entries {
        let entry = entry_result?;
        summary.total += 1;

        match process_single_entry(entry, executor).await? {
            ProcessingOutcome::Success(processed) => {
                writer.write_batch(std::slice::from_ref(&processed))?;
                summary.kept += 1;
            }
            ProcessingOutcome::Filtered { .. } => {
                summary.filtered += 1;
            }
        }
    }

    writer.close()?;
    info!(
        total = summary.total,
        kept = summary.kept,
        filtered = summary.filtered,
        "Cleaning run complete"
    );
    Ok(summary)
}
