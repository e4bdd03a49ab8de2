use gravbox::{ScenarioConfig, Scenario};
use gravbox::run_viewer;
use gravbox::{bench_acceleration, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the seed from the scenario file
    #[arg(long)]
    seed: Option<u64>,

    /// Step without opening a window
    #[arg(long)]
    headless: bool,

    /// Steps to run in headless mode
    #[arg(long, default_value_t = 10_000)]
    steps: usize,

    /// Log energy every this many headless steps
    #[arg(long, default_value_t = 1_000)]
    report_every: usize,

    /// Run the kernel and step benchmarks instead of simulating
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: usize, report_every: usize) -> Result<()> {
    let system = &mut scenario.system;
    let e0 = system.initial_energy();
    let report_every = report_every.max(1);

    for i in 1..=steps {
        system.step()?;
        if i % report_every == 0 {
            let e = system.energy();
            info!(
                "t = {:.4}, KE = {:.6}, PE = {:.6}, drift = {:.3e}",
                system.time(),
                e.kinetic,
                e.potential,
                e.drift_from(&e0)
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_acceleration()?;
        bench_step()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(seed) = args.seed {
        scenario_cfg.parameters.seed = seed;
    }

    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.steps, args.report_every)?;
    } else {
        run_viewer(scenario)?;
    }

    Ok(())
}
