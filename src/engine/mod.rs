use anyhow::Result;

use crate::{rng::SimRng, world::World};

pub struct SystemContext {
    pub year: u64,
}

/// One stage of a simulated year. Stages run in registration order against
/// the single shared RNG stream.
pub trait System {
    fn name(&self) -> &str;
    fn run(&mut self, ctx: &SystemContext, world: &mut World, rng: &mut SimRng) -> Result<()>;
}

pub struct EngineBuilder {
    rng: SimRng,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(rng: SimRng) -> Self {
        Self {
            rng,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            rng: self.rng,
            systems: self.systems,
        }
    }
}

pub struct Engine {
    rng: SimRng,
    systems: Vec<Box<dyn System>>,
}

impl Engine {
    pub fn run(&mut self, world: &mut World, years: u64) -> Result<()> {
        for _ in 0..years {
            let ctx = SystemContext { year: world.year() };
            for system in &mut self.systems {
                system.run(&ctx, world, &mut self.rng)?;
            }
            world.advance_year();
        }
        Ok(())
    }
}
