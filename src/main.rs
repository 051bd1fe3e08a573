use threatpath::{init_logging, plan_scenario, PlannerConfig, Scenario};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("threatpath {}", threatpath::VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading planner config from {}", path);
            PlannerConfig::load_from_file(std::path::Path::new(&path))?
        }
        None => PlannerConfig::default(),
    };

    let report = plan_scenario(&Scenario::default(), &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
