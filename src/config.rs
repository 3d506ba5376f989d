// src/config.rs
use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Represents the overall pipeline configuration read from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct PipelineConfig {
    pub pipeline: Vec<StepConfig>,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        for step_config in &self.pipeline {
            step_config.validate()?;
        }
        Ok(())
    }
}

/// Represents a single step in the cleaning pipeline.
/// Uses Serde's externally tagged enum representation.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")] // The 'type' field in YAML determines which variant
pub enum StepConfig {
    MinLengthFilter(MinLengthParams),
    PunctuationFilter(PunctuationParams),
    LowercaseNormalizer(LowercaseParams),
}

impl StepConfig {
    /// Returns a string slice representing the name of the step type.
    pub fn name(&self) -> &'static str {
        match self {
            StepConfig::MinLengthFilter(_) => "MinLengthFilter",
            StepConfig::PunctuationFilter(_) => "PunctuationFilter",
            StepConfig::LowercaseNormalizer(_) => "LowercaseNormalizer",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            StepConfig::MinLengthFilter(params) => params.validate(),
            StepConfig::PunctuationFilter(params) => params.validate(),
            StepConfig::LowercaseNormalizer(params) => params.validate(),
        }
    }
}

/// Parameters for the MinLengthFilter.
#[derive(Deserialize, Debug, Clone)]
pub struct MinLengthParams {
    /// Entries whose character count is <= this threshold are dropped.
    pub min_length: usize,
}

impl MinLengthParams {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Parameters for the PunctuationFilter.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PunctuationParams {
    /// Optional override of the punctuation set, given as a string of
    /// characters. If absent, the default ASCII punctuation set is used.
    pub punctuation: Option<String>,
}

impl PunctuationParams {
    pub fn validate(&self) -> Result<()> {
        if let Some(set) = &self.punctuation {
            if set.is_empty() {
                return Err(PipelineError::ConfigValidationError(
                    "PunctuationParams: punctuation override must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for the LowercaseNormalizer (none at present).
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LowercaseParams {}

impl LowercaseParams {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Loads and parses the pipeline configuration YAML file.
pub fn load_pipeline_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineConfig> {
    let path_ref = config_path.as_ref();
    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to read pipeline config file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    serde_yaml::from_str(&config_content).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to parse pipeline config YAML from '{}': {}",
            path_ref.display(),
            e
        ))
    })
}
