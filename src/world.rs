use serde::{Deserialize, Serialize};

use crate::config::SimulationParams;

/// An office-holder. Identity is irrelevant; every rule keys off age alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    age: u32,
}

impl Politician {
    pub fn new(age: u32) -> Self {
        Self { age }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// The same politician one simulated year later.
    pub fn aged(self) -> Self {
        Self { age: self.age + 1 }
    }
}

/// Office rank, derived from age at the point of use and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Quaestor,
    Aedile,
    Praetor,
    Consul,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Quaestor, Tier::Aedile, Tier::Praetor, Tier::Consul];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Quaestor => "Quaestor",
            Tier::Aedile => "Aedile",
            Tier::Praetor => "Praetor",
            Tier::Consul => "Consul",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierStats {
    pub tier: Tier,
    pub count: usize,
    pub average_age: f64,
}

/// The owned simulation state: parameters, year counter, PSI, and the
/// population. Only systems mutate it, through the engine loop.
pub struct World {
    params: SimulationParams,
    year: u64,
    psi: i64,
    politicians: Vec<Politician>,
}

impl World {
    /// Seeds every tier to quota at its entry age.
    pub fn new(params: SimulationParams) -> Self {
        let mut politicians = Vec::with_capacity(params.total_quota() as usize);
        for tier in Tier::ALL {
            let age = params.entry_age(tier);
            for _ in 0..params.quota(tier) {
                politicians.push(Politician::new(age));
            }
        }
        Self {
            year: 0,
            psi: params.initial_psi,
            params,
            politicians,
        }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn year(&self) -> u64 {
        self.year
    }

    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    pub fn psi(&self) -> i64 {
        self.psi
    }

    pub fn add_psi(&mut self, delta: i64) {
        self.psi += delta;
    }

    pub fn politicians(&self) -> &[Politician] {
        &self.politicians
    }

    pub fn politicians_mut(&mut self) -> &mut Vec<Politician> {
        &mut self.politicians
    }

    pub fn enroll(&mut self, age: u32) {
        self.politicians.push(Politician::new(age));
    }

    pub fn total_population(&self) -> usize {
        self.politicians.len()
    }

    /// Politicians with age in the half-open range `[lo, hi)`.
    pub fn count_in_range(&self, lo: u32, hi: u32) -> usize {
        self.politicians
            .iter()
            .filter(|p| p.age() >= lo && p.age() < hi)
            .count()
    }

    /// Occupancy counted toward a tier's deficit (consul range capped at
    /// the life-expectancy mean).
    pub fn tier_occupancy(&self, tier: Tier) -> usize {
        let (lo, hi) = self.params.scoring_bounds(tier);
        self.count_in_range(lo, hi)
    }

    /// Final-report partition of the population. Unlike deficit scoring,
    /// the consul tier here is unbounded above. Empty tiers report a count
    /// of 0 and an average age of 0.0.
    pub fn age_distribution(&self) -> [TierStats; 4] {
        let mut counts = [0usize; 4];
        let mut sums = [0u64; 4];
        for p in &self.politicians {
            if let Some(tier) = self.params.tier_of(p.age()) {
                let i = tier as usize;
                counts[i] += 1;
                sums[i] += u64::from(p.age());
            }
        }
        Tier::ALL.map(|tier| {
            let i = tier as usize;
            let average_age = if counts[i] == 0 {
                0.0
            } else {
                sums[i] as f64 / counts[i] as f64
            };
            TierStats {
                tier,
                count: counts[i],
                average_age,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_population_fills_every_quota() {
        let params = SimulationParams::default();
        let world = World::new(params.clone());

        assert_eq!(world.total_population(), 40);
        assert_eq!(world.psi(), 100);
        assert_eq!(world.year(), 0);
        for tier in Tier::ALL {
            assert_eq!(
                world.tier_occupancy(tier),
                params.quota(tier) as usize,
                "{} should start at quota",
                tier.name()
            );
        }
    }

    #[test]
    fn count_in_range_is_half_open() {
        let world = World::new(SimulationParams::default());

        // 20 politicians at exactly age 30
        assert_eq!(world.count_in_range(30, 31), 20);
        assert_eq!(world.count_in_range(31, 36), 0);
        assert_eq!(world.count_in_range(30, 30), 0);
    }

    #[test]
    fn age_distribution_partitions_initial_population() {
        let world = World::new(SimulationParams::default());
        let [q, a, p, c] = world.age_distribution();

        assert_eq!((q.count, q.average_age), (20, 30.0));
        assert_eq!((a.count, a.average_age), (10, 36.0));
        assert_eq!((p.count, p.average_age), (8, 39.0));
        assert_eq!((c.count, c.average_age), (2, 42.0));
    }

    #[test]
    fn empty_tier_reports_zero_average() {
        let mut world = World::new(SimulationParams::default());
        world.politicians_mut().clear();
        world.enroll(80);

        let [q, _, _, c] = world.age_distribution();
        assert_eq!((q.count, q.average_age), (0, 0.0));
        assert_eq!((c.count, c.average_age), (1, 80.0));
    }

    #[test]
    fn consul_occupancy_excludes_elders_past_life_mean() {
        let mut world = World::new(SimulationParams::default());
        world.politicians_mut().clear();
        world.enroll(54);
        world.enroll(55);
        world.enroll(70);

        // Scoring caps the consul range at the life-expectancy mean (55)...
        assert_eq!(world.tier_occupancy(Tier::Consul), 1);
        // ...but the reported distribution does not.
        let [_, _, _, c] = world.age_distribution();
        assert_eq!(c.count, 3);
    }
}
