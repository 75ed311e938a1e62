use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use geosar::analyze;
use geosar_config::{TwilightConfig, load_config};
use geosar_export::table;
use geosar_track::Mission;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Classify GPX track points into solar illumination phases"
)]
struct Cli {
    /// GPX file with mission tracks
    gpx_file: PathBuf,

    /// Output CSV path ('-' for stdout)
    #[arg(long, short, default_value = "-")]
    output: PathBuf,

    /// Optional YAML/TOML config with time zone and horizon angles
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display time zone override (IANA name, e.g. America/New_York)
    #[arg(long)]
    timezone: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TwilightConfig::default(),
    };
    if let Some(name) = &cli.timezone {
        config.timezone = name
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid time zone '{name}': {e}"))?;
    }

    let mission = Mission::from_path(&cli.gpx_file)
        .with_context(|| format!("reading {}", cli.gpx_file.display()))?;
    let analysis = analyze(&mission, &config).context("analyzing mission")?;

    let writer = table::writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    table::write_table(writer, &analysis.export_rows()).context("writing table")?;

    let to_stdout = cli.output == PathBuf::from("-");
    if !to_stdout {
        println!("=== Track phases ===");
        println!(
            "Observer: {:.4}, {:.4} ({} points, {} tracks)",
            analysis.observer.latitude,
            analysis.observer.longitude,
            analysis.records.len(),
            analysis.summaries.len()
        );
        for summary in &analysis.summaries {
            println!(
                "[{}] {}: {} -> {}",
                summary.track_id, summary.name, summary.start_phase, summary.end_phase
            );
        }
        println!("Table written to {}", cli.output.display());
    }

    Ok(())
}
