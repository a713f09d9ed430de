use std::path::PathBuf;

use anyhow::Result;
use arm_planner::{collision::GridArmOracle, Configuration, PlanOutcome, PlanOutput};
use arm_planner_apps::{
    utils::{get_apps_planner_config, init_tracing, parse_angles},
    ArmPlannerConfig,
};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

/// Plan a collision free motion of a planar arm on an occupancy grid map.
#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_BIN_NAME"))]
struct ArmPlannerArgs {
    /// Path to the setting file.
    #[clap(short, long, value_parser)]
    config_path: Option<PathBuf>,
    /// Path to the map file. Takes priority over the setting file.
    #[clap(short, long, value_parser)]
    map: Option<PathBuf>,
    /// Start joint angles [rad], comma separated.
    #[clap(long, allow_hyphen_values = true)]
    start: Option<String>,
    /// Goal joint angles [rad], comma separated.
    #[clap(long, allow_hyphen_values = true)]
    goal: Option<String>,
    /// Seed of the random source.
    #[clap(long)]
    seed: Option<u64>,
    /// Max num of samples.
    #[clap(long)]
    max_samples: Option<usize>,
    /// Max distance [rad] covered by one extension.
    #[clap(long)]
    step_length: Option<f64>,
    /// Output format of the plan.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Prints the default setting as TOML.
    #[clap(long)]
    show_default_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(args: &ArmPlannerArgs) -> Result<ArmPlannerConfig> {
    let mut config = match get_apps_planner_config(args.config_path.clone()) {
        Some(path) => ArmPlannerConfig::new(path)?,
        None => ArmPlannerConfig::default(),
    };
    if let Some(map) = &args.map {
        config.set_map_path(map.clone());
    }
    if let Some(start) = &args.start {
        config.start = Some(parse_angles(start)?.into_inner());
    }
    if let Some(goal) = &args.goal {
        config.goal = Some(parse_angles(goal)?.into_inner());
    }
    if let Some(seed) = args.seed {
        config.planner.seed = Some(seed);
    }
    if let Some(max_samples) = args.max_samples {
        config.planner.max_samples = max_samples;
    }
    if let Some(step_length) = args.step_length {
        config.planner.step_length = step_length;
    }
    Ok(config)
}

fn print_output(output: &PlanOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("# plan_length = {}", output.plan_length);
            for row in &output.plan {
                let row = row
                    .iter()
                    .map(|angle| format!("{angle:.6}"))
                    .collect::<Vec<_>>();
                println!("{}", row.join(" "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(output)?),
    }
    Ok(())
}

fn report(outcome: &PlanOutcome, start: &Configuration) {
    match outcome {
        PlanOutcome::Found(report) => {
            info!(
                "Plan is of length={}, total distance={:.4}, samples={}, elapsed={:?}",
                report.path.len(),
                report.path.total_distance(),
                report.samples,
                report.elapsed
            );
        }
        PlanOutcome::NotFound(failure) => {
            warn!(
                "Path not found ({:?}) after {} samples, returning the start {start}",
                failure.reason, failure.samples
            );
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = ArmPlannerArgs::parse();
    info!("ParsedArgs {:?}", args);

    if args.show_default_config {
        print!("{}", toml::to_string(&ArmPlannerConfig::default())?);
        return Ok(());
    }

    let config = load_config(&args)?;
    let map = config.load_map()?;
    let start = config.start_configuration()?;
    let goal = config.goal_configuration()?;
    let oracle = GridArmOracle::new(&map, config.arm.create_arm(&map));

    let outcome = arm_planner::plan(&oracle, &start, &goal, &config.planner)?;
    report(&outcome, &start);
    print_output(&outcome.into_output(&start), args.format)
}
