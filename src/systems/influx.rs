use anyhow::Result;
use rand_distr::{Distribution, Normal};

use crate::{
    config::SimulationParams,
    engine::{System, SystemContext},
    rng::SimRng,
    world::World,
};

/// Adds the yearly cohort of new quaestor-age politicians. The cohort size
/// is one normal draw truncated toward zero; a draw of zero or less adds
/// nobody.
pub struct InfluxSystem<D = Normal<f64>> {
    cohort_size: D,
}

impl InfluxSystem {
    pub fn from_params(params: &SimulationParams) -> Result<Self> {
        Ok(Self {
            cohort_size: Normal::new(params.influx_mean, params.influx_stddev)?,
        })
    }
}

impl<D: Distribution<f64>> InfluxSystem<D> {
    pub fn with_distribution(cohort_size: D) -> Self {
        Self { cohort_size }
    }
}

impl<D: Distribution<f64>> System for InfluxSystem<D> {
    fn name(&self) -> &str {
        "influx"
    }

    fn run(&mut self, _ctx: &SystemContext, world: &mut World, rng: &mut SimRng) -> Result<()> {
        let cohort = self.cohort_size.sample(rng) as i64;
        if cohort > 0 {
            let entry_age = world.params().quaestor_age;
            for _ in 0..cohort {
                world.enroll(entry_age);
            }
        }
        Ok(())
    }
}
