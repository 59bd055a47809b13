//! Headless runner for the wolf-sheep predation model.

mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use wolfsheep_core::ModelConfig;
use wolfsheep_world::WolfSheep;

/// Run the wolf-sheep predation model and stream per-tick metrics.
#[derive(Debug, Parser)]
#[command(name = "wolfsheep", version)]
struct Args {
    /// JSON model configuration; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 200)]
    steps: u64,

    /// Restrict movement to the 4 orthogonal neighbours
    #[arg(long)]
    von_neumann: bool,

    /// Write metrics as JSON lines to this file instead of stdout
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Write the final agent snapshot as JSON to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text")]
    log_format: telemetry::LogFormat,
}

impl Args {
    fn model_config(&self) -> Result<ModelConfig> {
        let mut config = match &self.config {
            Some(path) => ModelConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ModelConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.von_neumann {
            config.moore = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init_telemetry(args.log_format)?;

    let config = args.model_config()?;
    let mut model = WolfSheep::new(config).context("building the world")?;
    model.run(args.steps)?;

    let out: Box<dyn Write> = match &args.metrics {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);
    out.write_all(model.datacollector().to_json_lines()?.as_bytes())?;
    out.flush()?;

    if let Some(path) = &args.snapshot {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &model.snapshot())?;
        info!(path = %path.display(), "Snapshot written");
    }

    Ok(())
}
