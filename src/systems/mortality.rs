use anyhow::Result;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};

use crate::{
    config::SimulationParams,
    engine::{System, SystemContext},
    rng::SimRng,
    world::World,
};

/// Ages the population by one year, then retain-filters it against the
/// life-expectancy distribution. Every politician gets an independent draw;
/// there is no shared per-year threshold.
pub struct MortalitySystem<D = Normal<f64>> {
    life_expectancy: D,
}

impl MortalitySystem {
    pub fn from_params(params: &SimulationParams) -> Result<Self> {
        Ok(Self {
            life_expectancy: Normal::new(
                f64::from(params.life_expectancy_mean),
                params.life_expectancy_stddev,
            )?,
        })
    }
}

impl<D: Distribution<f64>> MortalitySystem<D> {
    pub fn with_distribution(life_expectancy: D) -> Self {
        Self { life_expectancy }
    }
}

impl<D: Distribution<f64>> System for MortalitySystem<D> {
    fn name(&self) -> &str {
        "mortality"
    }

    fn run(&mut self, _ctx: &SystemContext, world: &mut World, rng: &mut SimRng) -> Result<()> {
        let politicians = world.politicians_mut();
        // No downstream rule is order-sensitive; the shuffle is kept so a
        // fixed seed consumes the stream at the same points every run.
        politicians.shuffle(rng);
        for p in politicians.iter_mut() {
            *p = p.aged();
        }
        politicians.retain(|p| f64::from(p.age()) <= self.life_expectancy.sample(rng));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl Distribution<f64> for Fixed {
        fn sample<R: rand::Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
            self.0
        }
    }

    #[test]
    fn everyone_ages_by_one_before_the_filter() {
        let mut world = World::new(SimulationParams::default());
        let mut system = MortalitySystem::with_distribution(Fixed(1000.0));
        let mut rng = SimRng::seeded(1);
        system
            .run(&SystemContext { year: 0 }, &mut world, &mut rng)
            .unwrap();

        assert_eq!(world.total_population(), 40);
        assert_eq!(world.count_in_range(31, 32), 20);
        assert_eq!(world.count_in_range(43, 44), 2);
    }

    #[test]
    fn zero_life_expectancy_empties_the_population() {
        let mut world = World::new(SimulationParams::default());
        let mut system = MortalitySystem::with_distribution(Fixed(0.0));
        let mut rng = SimRng::seeded(1);
        system
            .run(&SystemContext { year: 0 }, &mut world, &mut rng)
            .unwrap();

        assert_eq!(world.total_population(), 0);
    }

    #[test]
    fn draws_are_per_individual() {
        // A cohort one year past the mean should lose roughly half its
        // members, never all or none; a single shared draw would produce an
        // all-or-nothing outcome.
        let params = SimulationParams {
            quaestor_age: 55,
            aedile_age: 56,
            praetor_age: 57,
            consul_age: 58,
            quaestor_positions: 1000,
            ..SimulationParams::default()
        };
        let mut world = World::new(params.clone());
        let mut system = MortalitySystem::from_params(&params).unwrap();
        let mut rng = SimRng::seeded(99);
        system
            .run(&SystemContext { year: 0 }, &mut world, &mut rng)
            .unwrap();

        let survivors = world.count_in_range(56, 57);
        assert!(
            (300..700).contains(&survivors),
            "expected roughly half of 1000 to survive, got {survivors}"
        );
    }
}
