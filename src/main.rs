use orrery::{ScenarioConfig, Scenario};
use orrery::{run_3d, run_headless};
use orrery::bench_frame_update;
use orrery::init_logging;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file: a path, or a name under scenarios/
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run this many frames without a window and log the transforms
    #[arg(long)]
    headless: Option<u64>,

    /// Log every n-th frame in headless mode
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Time the frame update on synthetic systems and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    info!("loaded scenario {}", config_path.display());
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // before anything logs, in every mode
    init_logging();

    if args.bench {
        bench_frame_update()?;
        return Ok(());
    }

    if let Some(frames) = args.headless {
        let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
        let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
        let summary = run_headless(&mut scenario, frames, args.report_every);
        info!(
            "done: {} frames, {:.3} s simulated, {} contacts, {} releases",
            summary.frames, summary.elapsed, summary.contacts, summary.releases
        );
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    run_3d(scenario);

    Ok(())
}
