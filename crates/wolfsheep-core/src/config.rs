//! Configuration types for the simulation.

use crate::{Breed, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Side length of the default world.
pub const WORLD_SIZE: i32 = 20;

/// Smallest side length for which every neighbourhood cell is distinct.
pub const MIN_WORLD_SIZE: i32 = 3;

/// Upper bound of animal energy and grass progress.
pub const MAX_LEVEL: i32 = 100;

/// Per-breed animal parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedConfig {
    /// Number of animals placed when the world is built
    pub initial_count: usize,
    /// Energy spent on every step
    pub energy_step_expenditure: i32,
    /// Energy gained when eating
    pub energy_gain_from_food: i32,
    /// Energy the parent loses when giving birth
    pub reproduction_energy_cost: i32,
    /// Probability (0.0 to 1.0) of reproducing when able to
    pub reproduction_chance: f64,
}

impl BreedConfig {
    pub fn sheep() -> Self {
        Self {
            initial_count: 100,
            energy_step_expenditure: 5,
            energy_gain_from_food: 35,
            reproduction_energy_cost: 30,
            reproduction_chance: 0.05,
        }
    }

    pub fn wolf() -> Self {
        Self {
            initial_count: 15,
            energy_step_expenditure: 2,
            energy_gain_from_food: 50,
            reproduction_energy_cost: 30,
            reproduction_chance: 0.201,
        }
    }

    fn validate(&self, breed: Breed) -> Result<()> {
        let levels = [
            ("energy_step_expenditure", self.energy_step_expenditure),
            ("energy_gain_from_food", self.energy_gain_from_food),
            ("reproduction_energy_cost", self.reproduction_energy_cost),
        ];
        for (name, value) in levels {
            check_level(&format!("{breed}.{name}"), value)?;
        }
        if !(0.0..=1.0).contains(&self.reproduction_chance) {
            return Err(Error::Validation(format!(
                "{breed}.reproduction_chance must be within [0, 1], got {}",
                self.reproduction_chance
            )));
        }
        Ok(())
    }
}

/// Model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
    /// Animals may move diagonally (Moore) or only orthogonally (Von Neumann)
    pub moore: bool,
    /// Grass growth percentage per step
    pub grass_progress_per_step: i32,
    pub sheep: BreedConfig,
    pub wolf: BreedConfig,
    /// Emit a population log event every this many ticks (0 disables)
    pub log_every: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: WORLD_SIZE,
            height: WORLD_SIZE,
            moore: true,
            grass_progress_per_step: 5,
            sheep: BreedConfig::sheep(),
            wolf: BreedConfig::wolf(),
            log_every: 50,
        }
    }
}

impl ModelConfig {
    /// Load a configuration from a JSON file; missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn breed(&self, breed: Breed) -> Option<&BreedConfig> {
        match breed {
            Breed::Sheep => Some(&self.sheep),
            Breed::Wolf => Some(&self.wolf),
            Breed::Grass => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WORLD_SIZE || self.height < MIN_WORLD_SIZE {
            return Err(Error::Validation(format!(
                "world must be at least {MIN_WORLD_SIZE}x{MIN_WORLD_SIZE}, got {}x{}",
                self.width, self.height
            )));
        }
        check_level("grass_progress_per_step", self.grass_progress_per_step)?;
        self.sheep.validate(Breed::Sheep)?;
        self.wolf.validate(Breed::Wolf)?;
        Ok(())
    }
}

/// Energy and growth parameters share the 0..=MAX_LEVEL range.
fn check_level(name: &str, value: i32) -> Result<()> {
    if !(0..=MAX_LEVEL).contains(&value) {
        return Err(Error::Validation(format!(
            "{name} must be within [0, {MAX_LEVEL}], got {value}"
        )));
    }
    Ok(())
}
