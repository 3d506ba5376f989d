use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dictclean::cleaner_logic::{build_pipeline, run_cleaning};
use dictclean::config::{
    load_pipeline_config, LowercaseParams, MinLengthParams, PipelineConfig, PunctuationParams,
    StepConfig,
};
use dictclean::executor::PipelineExecutor;

// Define command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input word list (one dictionary entry per line)
    input: PathBuf,

    /// Path to write the cleaned word list to
    #[arg(short, long, default_value = "modified.txt")]
    output: PathBuf,

    /// Drop entries whose character count is <= this threshold
    #[arg(long, default_value_t = 2)]
    min_length: usize,

    /// Lowercase surviving entries
    #[arg(long)]
    lowercase: bool,

    /// Optional: path to a pipeline configuration YAML file. When given,
    /// --min-length and --lowercase are ignored.
    #[arg(short = 'c', long)]
    pipeline_config: Option<PathBuf>,
}

/// The pipeline assembled from CLI flags when no YAML config is given.
fn default_pipeline_config(args: &Args) -> PipelineConfig {
    let mut pipeline = vec![
        StepConfig::MinLengthFilter(MinLengthParams {
            min_length: args.min_length,
        }),
        StepConfig::PunctuationFilter(PunctuationParams::default()),
    ];
    if args.lowercase {
        pipeline.push(StepConfig::LowercaseNormalizer(LowercaseParams::default()));
    }
    PipelineConfig { pipeline }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = match &args.pipeline_config {
        Some(path) => load_pipeline_config(path)
            .with_context(|| format!("Loading pipeline config from {}", path.display()))?,
        None => default_pipeline_config(&args),
    };
    config.validate().context("Validating pipeline config")?;

    let steps = build_pipeline(&config).context("Building pipeline")?;
    let executor = PipelineExecutor::new(steps);

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "Starting cleaning run"
    );

    let summary = run_cleaning(&args.input, &args.output, &executor)
        .await
        .context("Cleaning run failed")?;

    info!(
        "Kept {} of {} entries ({} filtered)",
        summary.kept, summary.total, summary.filtered
    );
    Ok(())
}
