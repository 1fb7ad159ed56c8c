//! End-of-run report
//!
//! Three sections, order-significant: final PSI, the static fill-rate table,
//! and the per-tier age distribution. The fill rate is `quota / years × 100`
//! computed from configuration alone. It measures configured capacity against
//! the horizon, not observed occupancy, and is reported as-is.

use std::fmt;

use crate::world::{Tier, TierStats, World};

pub struct Report {
    pub psi: i64,
    pub fill_rates: [(Tier, f64); 4],
    pub age_distribution: [TierStats; 4],
}

impl Report {
    pub fn from_world(world: &World) -> Self {
        let params = world.params();
        let fill_rates = Tier::ALL
            .map(|tier| (tier, f64::from(params.quota(tier)) / params.years as f64 * 100.0));
        Self {
            psi: world.psi(),
            fill_rates,
            age_distribution: world.age_distribution(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "End-of-Simulation PSI: {}", self.psi)?;
        writeln!(f, "Annual Fill Rate:")?;
        for (tier, pct) in &self.fill_rates {
            writeln!(f, "{}: {}%", tier.name(), pct)?;
        }
        writeln!(f, "Age Distribution:")?;
        for stats in &self.age_distribution {
            writeln!(
                f,
                "{}: Count={}, Average Age={}",
                stats.tier.name(),
                stats.count,
                stats.average_age
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationParams;

    #[test]
    fn renders_the_exact_output_contract() {
        let world = World::new(SimulationParams::default());
        let report = Report::from_world(&world);

        assert_eq!(
            report.to_string(),
            "End-of-Simulation PSI: 100\n\
             Annual Fill Rate:\n\
             Quaestor: 10%\n\
             Aedile: 5%\n\
             Praetor: 4%\n\
             Consul: 1%\n\
             Age Distribution:\n\
             Quaestor: Count=20, Average Age=30\n\
             Aedile: Count=10, Average Age=36\n\
             Praetor: Count=8, Average Age=39\n\
             Consul: Count=2, Average Age=42\n"
        );
    }

    #[test]
    fn fill_rates_come_from_configuration_alone() {
        let mut world = World::new(SimulationParams::default());
        world.politicians_mut().clear();
        let report = Report::from_world(&world);

        let rates: Vec<f64> = report.fill_rates.iter().map(|(_, pct)| *pct).collect();
        assert_eq!(rates, vec![10.0, 5.0, 4.0, 1.0]);
    }
}
