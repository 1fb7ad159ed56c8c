pub mod config;
pub mod engine;
pub mod report;
pub mod rng;
pub mod systems;
pub mod world;

pub use config::SimulationParams;
pub use engine::{Engine, EngineBuilder, System, SystemContext};
pub use report::Report;
pub use world::{Politician, Tier, TierStats, World};
