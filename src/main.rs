use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cursus::{
    config::SimulationParams,
    engine::EngineBuilder,
    report::Report,
    rng::SimRng,
    systems::{InfluxSystem, MortalitySystem, SatisfactionSystem},
    world::World,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Roman career-ladder Monte Carlo simulator")]
struct Cli {
    /// Path to a parameter YAML file (compiled-in defaults when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Fixed random seed (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Override the simulated horizon in years
    #[arg(long)]
    years: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut params = match &cli.scenario {
        Some(path) => SimulationParams::from_yaml(path)?,
        None => SimulationParams::default(),
    };
    if let Some(seed) = cli.seed {
        params.seed = Some(seed);
    }
    if let Some(years) = cli.years {
        params.years = years;
    }
    params.validate()?;

    let mut world = World::new(params.clone());
    let mut engine = EngineBuilder::new(SimRng::for_seed(params.seed))
        .with_system(InfluxSystem::from_params(&params)?)
        .with_system(MortalitySystem::from_params(&params)?)
        .with_system(SatisfactionSystem::new())
        .build();
    engine.run(&mut world, params.years)?;

    print!("{}", Report::from_world(&world));
    Ok(())
}
