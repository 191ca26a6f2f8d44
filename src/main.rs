use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use waggle_trace::pipeline::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, PlotConfig, TrajectoryPipeline,
};

/// Plot a mode-labelled trajectory as colour-coded segments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Whitespace-delimited `x y mode` table
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// PNG file to write
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = PlotConfig {
        input_path: cli.input,
        output_path: cli.output,
        ..PlotConfig::default()
    };

    let pipeline = TrajectoryPipeline::new(config);
    let report = pipeline.run().with_context(|| {
        format!(
            "failed to plot {}",
            pipeline.config().input_path.display()
        )
    })?;

    println!(
        "Plotted {} samples in {} segments to {}",
        report.sample_count,
        report.segments.len(),
        report.output_path.display()
    );
    Ok(())
}
