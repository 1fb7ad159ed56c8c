//! Simulation parameters
//!
//! Every knob of the simulation lives here with a compiled-in default, so
//! the binary runs the classical republic scenario with no arguments while a
//! YAML file can still override any subset of fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::Tier;

fn default_years() -> u64 {
    200
}

fn default_reelection_interval() -> u64 {
    10
}

fn default_quaestor_age() -> u32 {
    30
}

fn default_aedile_age() -> u32 {
    36
}

fn default_praetor_age() -> u32 {
    39
}

fn default_consul_age() -> u32 {
    42
}

fn default_quaestor_positions() -> u32 {
    20
}

fn default_aedile_positions() -> u32 {
    10
}

fn default_praetor_positions() -> u32 {
    8
}

fn default_consul_positions() -> u32 {
    2
}

fn default_initial_psi() -> i64 {
    100
}

fn default_unfilled_position_penalty() -> i64 {
    -5
}

fn default_consul_reelection_penalty() -> i64 {
    -10
}

fn default_life_expectancy_mean() -> u32 {
    55
}

fn default_life_expectancy_stddev() -> f64 {
    10.0
}

fn default_influx_mean() -> f64 {
    15.0
}

fn default_influx_stddev() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Simulated horizon in years.
    #[serde(default = "default_years")]
    pub years: u64,
    /// Fixed RNG seed; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_quaestor_age")]
    pub quaestor_age: u32,
    #[serde(default = "default_aedile_age")]
    pub aedile_age: u32,
    #[serde(default = "default_praetor_age")]
    pub praetor_age: u32,
    #[serde(default = "default_consul_age")]
    pub consul_age: u32,
    #[serde(default = "default_quaestor_positions")]
    pub quaestor_positions: u32,
    #[serde(default = "default_aedile_positions")]
    pub aedile_positions: u32,
    #[serde(default = "default_praetor_positions")]
    pub praetor_positions: u32,
    #[serde(default = "default_consul_positions")]
    pub consul_positions: u32,
    #[serde(default = "default_initial_psi")]
    pub initial_psi: i64,
    #[serde(default = "default_unfilled_position_penalty")]
    pub unfilled_position_penalty: i64,
    #[serde(default = "default_consul_reelection_penalty")]
    pub consul_reelection_penalty: i64,
    /// Years between consul reelection penalties; fires at year 0.
    #[serde(default = "default_reelection_interval")]
    pub reelection_interval: u64,
    #[serde(default = "default_life_expectancy_mean")]
    pub life_expectancy_mean: u32,
    #[serde(default = "default_life_expectancy_stddev")]
    pub life_expectancy_stddev: f64,
    #[serde(default = "default_influx_mean")]
    pub influx_mean: f64,
    #[serde(default = "default_influx_stddev")]
    pub influx_stddev: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            years: default_years(),
            seed: None,
            quaestor_age: default_quaestor_age(),
            aedile_age: default_aedile_age(),
            praetor_age: default_praetor_age(),
            consul_age: default_consul_age(),
            quaestor_positions: default_quaestor_positions(),
            aedile_positions: default_aedile_positions(),
            praetor_positions: default_praetor_positions(),
            consul_positions: default_consul_positions(),
            initial_psi: default_initial_psi(),
            unfilled_position_penalty: default_unfilled_position_penalty(),
            consul_reelection_penalty: default_consul_reelection_penalty(),
            reelection_interval: default_reelection_interval(),
            life_expectancy_mean: default_life_expectancy_mean(),
            life_expectancy_stddev: default_life_expectancy_stddev(),
            influx_mean: default_influx_mean(),
            influx_stddev: default_influx_stddev(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("tier entry ages must be strictly increasing (got {0}, {1}, {2}, {3})")]
    TierAgesNotIncreasing(u32, u32, u32, u32),
    #[error("{name} must be non-negative and finite (got {value})")]
    InvalidStddev { name: &'static str, value: f64 },
    #[error("years must be at least 1")]
    ZeroYears,
    #[error("reelection interval must be at least 1")]
    ZeroReelectionInterval,
}

impl SimulationParams {
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let params: Self = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write scenario file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.quaestor_age < self.aedile_age
            && self.aedile_age < self.praetor_age
            && self.praetor_age < self.consul_age)
        {
            return Err(ParamsError::TierAgesNotIncreasing(
                self.quaestor_age,
                self.aedile_age,
                self.praetor_age,
                self.consul_age,
            ));
        }
        for (name, value) in [
            ("life_expectancy_stddev", self.life_expectancy_stddev),
            ("influx_stddev", self.influx_stddev),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::InvalidStddev { name, value });
            }
        }
        if self.years == 0 {
            return Err(ParamsError::ZeroYears);
        }
        if self.reelection_interval == 0 {
            return Err(ParamsError::ZeroReelectionInterval);
        }
        Ok(())
    }

    pub fn entry_age(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Quaestor => self.quaestor_age,
            Tier::Aedile => self.aedile_age,
            Tier::Praetor => self.praetor_age,
            Tier::Consul => self.consul_age,
        }
    }

    pub fn quota(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Quaestor => self.quaestor_positions,
            Tier::Aedile => self.aedile_positions,
            Tier::Praetor => self.praetor_positions,
            Tier::Consul => self.consul_positions,
        }
    }

    /// Half-open age range `[lo, hi)` counted toward a tier's occupancy
    /// deficit. The consul range is capped at the life-expectancy mean; the
    /// age-distribution report instead treats the consul tier as unbounded.
    pub fn scoring_bounds(&self, tier: Tier) -> (u32, u32) {
        match tier {
            Tier::Quaestor => (self.quaestor_age, self.aedile_age),
            Tier::Aedile => (self.aedile_age, self.praetor_age),
            Tier::Praetor => (self.praetor_age, self.consul_age),
            Tier::Consul => (self.consul_age, self.life_expectancy_mean),
        }
    }

    /// Tier a politician of the given age is reported under, or `None` below
    /// the quaestor entry age.
    pub fn tier_of(&self, age: u32) -> Option<Tier> {
        if age < self.quaestor_age {
            None
        } else if age < self.aedile_age {
            Some(Tier::Quaestor)
        } else if age < self.praetor_age {
            Some(Tier::Aedile)
        } else if age < self.consul_age {
            Some(Tier::Praetor)
        } else {
            Some(Tier::Consul)
        }
    }

    pub fn total_quota(&self) -> u32 {
        self.quaestor_positions
            + self.aedile_positions
            + self.praetor_positions
            + self.consul_positions
    }
}
