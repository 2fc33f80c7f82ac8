use std::process;
use std::time::Instant;

use log::{error, info};
use trunk_planner::Planner;
use trunk_planner::utils::config::{Arguments, Config};
use trunk_planner::utils::error::Result;
use trunk_planner::utils::{logger, report, yaml};

fn main() {
    let args: Arguments = argh::from_env();
    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    let mut config: Config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    logger::init(config.level_filter());
    info!("using config {} from {}", config.name, args.config);

    let network = yaml::load_network(&args.network)?;
    let demands = yaml::load_demands(&args.demands)?;

    let mut planner = Planner::new(network, &config);
    let start = Instant::now();
    let outcomes = planner.process(&demands);
    let elapsed = start.elapsed().as_micros();

    for outcome in outcomes.iter() {
        println!("{}", outcome);
    }
    let routed = outcomes.iter().filter(|o| o.is_routed()).count();
    println!("--- {} of {} demands routed in {} μs ---", routed, outcomes.len(), elapsed);

    if let Some(path) = &config.routes {
        report::save_routes(path, &outcomes)?;
    }
    if let Some(path) = &config.links {
        report::save_links(path, planner.network(), planner.ledger())?;
    }
    Ok(())
}
