use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dynplot::config::{DynPlotConfig, DynPlotSettings};
use dynplot::{channel_data, run_dynplot};

#[derive(Parser, Debug)]
#[command(name = "dynplot")]
#[command(about = "Plot (x, y) points entered by hand or loaded from a CSV file", long_about = None)]
struct Args {
    /// CSV file (header `x,y`) to load on startup
    csv: Option<PathBuf>,

    /// YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `dynplot=trace`
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .init();

    let settings = match &args.config {
        Some(path) => DynPlotSettings::from_yaml_path(path)?,
        None => DynPlotSettings::default(),
    };

    let (sink, rx) = channel_data();
    if let Some(path) = args.csv {
        sink.load_csv(path)?;
    }

    run_dynplot(DynPlotConfig::from(settings), Some(rx))?;
    tracing::info!("dynplot exited");
    Ok(())
}
