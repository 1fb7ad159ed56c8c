use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    rng::SimRng,
    world::{Tier, World},
};

/// Applies the yearly PSI adjustment: a per-tier unfilled-position penalty,
/// plus the consul reelection penalty every `reelection_interval` years
/// (year 0 included). A tier over quota has a negative deficit and so pushes
/// PSI upward.
pub struct SatisfactionSystem;

impl SatisfactionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SatisfactionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for SatisfactionSystem {
    fn name(&self) -> &str {
        "satisfaction"
    }

    fn run(&mut self, ctx: &SystemContext, world: &mut World, _rng: &mut SimRng) -> Result<()> {
        let params = world.params();
        let deficit = |tier: Tier| i64::from(params.quota(tier)) - world.tier_occupancy(tier) as i64;

        let mut delta = 0;
        for tier in Tier::ALL {
            delta += params.unfilled_position_penalty * deficit(tier);
        }
        if ctx.year % params.reelection_interval == 0 {
            delta += params.consul_reelection_penalty * deficit(Tier::Consul);
        }
        world.add_psi(delta);
        Ok(())
    }
}
