use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use nbody::diagnostics::frame_momentum;
use nbody::integrator::Verlet;
use nbody::series::TimeSeries;
use nbody::simulation::Simulation;

mod scenario;

use scenario::ScenarioConfig;

/// Run an N-body scenario and write one record per body per step as JSON
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario file (YAML, or JSON with a .json extension)
    scenario: PathBuf,

    /// Write records here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Refuse runs longer than this many steps (overrides the scenario)
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = ScenarioConfig::load(&args.scenario)?;

    let mut config = scenario.parameters.simulation_config();
    if args.max_steps.is_some() {
        config.max_steps = args.max_steps;
    }

    let force = scenario.parameters.force_model()?;
    let bodies = scenario.build_bodies()?;
    let masses: Vec<(String, f64)> = bodies
        .iter()
        .map(|b| (b.name().to_owned(), b.mass()))
        .collect();

    info!(
        "{}: {} bodies, end time {}, timestep {}",
        args.scenario.display(),
        bodies.len(),
        config.end_time,
        config.timestep
    );

    let sim = Simulation::new(force, Verlet);
    let series = sim.run(bodies, &config).context("simulation failed")?;

    if series.is_empty() {
        warn!("timestep is not smaller than end time, no samples recorded");
    }
    log_summary(&series, &masses);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_records(BufWriter::new(file), &series, args.pretty)?;
            info!("wrote {} records to {}", series.len(), path.display());
        }
        None => write_records(io::stdout().lock(), &series, args.pretty)?,
    }

    Ok(())
}

fn write_records<W: Write>(mut writer: W, series: &TimeSeries, pretty: bool) -> Result<()> {
    let records = series.export();
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn log_summary(series: &TimeSeries, masses: &[(String, f64)]) {
    let masses: Vec<(&str, f64)> = masses.iter().map(|(n, m)| (n.as_str(), *m)).collect();
    let mut frames = series.frames();

    let (Some(first), Some(last)) = (frames.next(), series.frames().last()) else {
        return;
    };

    let p0 = frame_momentum(first, &masses);
    let p1 = frame_momentum(last, &masses);
    let drift = (p1 - p0).magnitude() / p0.magnitude().max(f64::MIN_POSITIVE);

    info!(
        "{} samples over {} frames, last t = {}, momentum drift {:.2e}",
        series.len(),
        series.frames().count(),
        last[0].time,
        drift
    );
}
