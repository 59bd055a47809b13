//! Agent state: grass patches and animals.

use crate::grid::Grid;
use crate::random_walk;
use rand::Rng;
use serde::{Deserialize, Serialize};
use wolfsheep_core::{AgentId, Breed, BreedConfig, Error, Result, MAX_LEVEL};

/// A patch of grass that grows at a fixed rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassPatch {
    progress: i32,
    progress_per_step: i32,
    is_fully_grown: bool,
}

impl GrassPatch {
    pub fn new(progress: i32, progress_per_step: i32) -> Self {
        let mut patch = Self {
            progress: progress.clamp(0, MAX_LEVEL),
            progress_per_step,
            is_fully_grown: false,
        };
        patch.update_state();
        patch
    }

    pub fn step(&mut self) {
        self.progress = self.progress.saturating_add(self.progress_per_step).min(MAX_LEVEL);
        self.update_state();
    }

    /// Eaten: growth starts over.
    pub fn reset(&mut self) {
        self.progress = 0;
        self.update_state();
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn progress_per_step(&self) -> i32 {
        self.progress_per_step
    }

    pub fn is_fully_grown(&self) -> bool {
        self.is_fully_grown
    }

    fn update_state(&mut self) {
        self.is_fully_grown = self.progress == MAX_LEVEL;
    }
}

/// Constant parameters shared by every animal of a breed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimalTraits {
    pub energy_step_expenditure: i32,
    pub energy_gain_from_food: i32,
    pub reproduction_energy_cost: i32,
    pub reproduction_chance: f64,
}

impl From<&BreedConfig> for AnimalTraits {
    fn from(config: &BreedConfig) -> Self {
        Self {
            energy_step_expenditure: config.energy_step_expenditure,
            energy_gain_from_food: config.energy_gain_from_food,
            reproduction_energy_cost: config.reproduction_energy_cost,
            reproduction_chance: config.reproduction_chance,
        }
    }
}

/// A sheep or a wolf. Both share every rule; only the traits differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    breed: Breed,
    energy: i32,
    traits: AnimalTraits,
    is_hungry: bool,
    can_reproduce: bool,
    age: u64,
    birth_tick: u64,
    offspring_count: u32,
}

impl Animal {
    pub fn new(breed: Breed, energy: i32, traits: AnimalTraits, birth_tick: u64) -> Result<Self> {
        if !breed.is_animal() {
            return Err(Error::InvalidState(format!("{breed} is not an animal breed")));
        }
        let mut animal = Self {
            breed,
            energy: energy.clamp(0, MAX_LEVEL),
            traits,
            is_hungry: false,
            can_reproduce: false,
            age: 0,
            birth_tick,
            offspring_count: 0,
        };
        animal.update_state();
        Ok(animal)
    }

    pub fn breed(&self) -> Breed {
        self.breed
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn traits(&self) -> &AnimalTraits {
        &self.traits
    }

    pub fn is_hungry(&self) -> bool {
        self.is_hungry
    }

    pub fn can_reproduce(&self) -> bool {
        self.can_reproduce
    }

    /// Steps taken since birth.
    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn birth_tick(&self) -> u64 {
        self.birth_tick
    }

    pub fn offspring_count(&self) -> u32 {
        self.offspring_count
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    /// Pay the per-step energy cost. Movement is handled by the caller.
    pub fn spend_step_energy(&mut self) {
        self.energy = self.energy.saturating_sub(self.traits.energy_step_expenditure).max(0);
        self.age += 1;
        self.update_state();
    }

    /// Credit the energy of one meal, capped at the maximum level.
    ///
    /// Flags keep their value from the last step until the next one.
    pub fn eat(&mut self) {
        self.energy = self.energy.saturating_add(self.traits.energy_gain_from_food).min(MAX_LEVEL);
    }

    /// Deduct the cost of giving birth, never going below zero.
    pub fn pay_reproduction_cost(&mut self) {
        self.energy = self.energy.saturating_sub(self.traits.reproduction_energy_cost).max(0);
        self.offspring_count += 1;
    }

    /// Starting energy of a newborn of this animal.
    pub fn offspring_energy(&self) -> i32 {
        self.traits
            .energy_step_expenditure
            .saturating_mul(2)
            .saturating_add(1)
    }

    fn update_state(&mut self) {
        self.is_hungry = self.energy <= MAX_LEVEL.saturating_sub(self.traits.energy_gain_from_food);
        self.can_reproduce = self.energy
            > self
                .traits
                .energy_step_expenditure
                .saturating_add(self.traits.reproduction_energy_cost);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AgentKind {
    Grass(GrassPatch),
    Animal(Animal),
}

/// An agent in the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,
}

impl Agent {
    pub fn grass(id: AgentId, patch: GrassPatch) -> Self {
        Self {
            id,
            kind: AgentKind::Grass(patch),
        }
    }

    pub fn animal(id: AgentId, animal: Animal) -> Self {
        Self {
            id,
            kind: AgentKind::Animal(animal),
        }
    }

    pub fn breed(&self) -> Breed {
        match &self.kind {
            AgentKind::Grass(_) => Breed::Grass,
            AgentKind::Animal(animal) => animal.breed(),
        }
    }

    pub fn as_animal(&self) -> Option<&Animal> {
        match &self.kind {
            AgentKind::Animal(animal) => Some(animal),
            AgentKind::Grass(_) => None,
        }
    }

    pub fn as_animal_mut(&mut self) -> Option<&mut Animal> {
        match &mut self.kind {
            AgentKind::Animal(animal) => Some(animal),
            AgentKind::Grass(_) => None,
        }
    }

    pub fn as_grass(&self) -> Option<&GrassPatch> {
        match &self.kind {
            AgentKind::Grass(patch) => Some(patch),
            AgentKind::Animal(_) => None,
        }
    }

    pub fn as_grass_mut(&mut self) -> Option<&mut GrassPatch> {
        match &mut self.kind {
            AgentKind::Grass(patch) => Some(patch),
            AgentKind::Animal(_) => None,
        }
    }

    /// Local transition for one tick: grass grows, animals walk then pay
    /// their step cost.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, moore: bool, rng: &mut R) -> Result<()> {
        match &mut self.kind {
            AgentKind::Grass(patch) => patch.step(),
            AgentKind::Animal(animal) => {
                random_walk::random_move(self.id, grid, moore, rng)?;
                animal.spend_step_energy();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn traits(step: i32, gain: i32, cost: i32) -> AnimalTraits {
        AnimalTraits {
            energy_step_expenditure: step,
            energy_gain_from_food: gain,
            reproduction_energy_cost: cost,
            reproduction_chance: 1.0,
        }
    }

    #[test]
    fn test_grass_growth_is_clamped() {
        let mut patch = GrassPatch::new(98, 5);
        assert!(!patch.is_fully_grown());
        patch.step();
        assert_eq!(patch.progress(), 100);
        assert!(patch.is_fully_grown());
    }

    #[test]
    fn test_grass_reset() {
        let mut patch = GrassPatch::new(100, 5);
        assert!(patch.is_fully_grown());
        patch.reset();
        assert_eq!(patch.progress(), 0);
        assert!(!patch.is_fully_grown());
    }

    #[test]
    fn test_energy_management() {
        let mut wolf = Animal::new(Breed::Wolf, 10, traits(5, 50, 30), 0).unwrap();
        wolf.spend_step_energy();
        assert_eq!(wolf.energy(), 5);
        assert!(wolf.is_hungry());
        assert!(wolf.is_alive());

        wolf.spend_step_energy();
        wolf.spend_step_energy();
        assert_eq!(wolf.energy(), 0);
        assert!(!wolf.is_alive());
        assert_eq!(wolf.age(), 3);
    }

    #[test]
    fn test_hunger_threshold_is_inclusive() {
        let sheep = Animal::new(Breed::Sheep, 65, traits(5, 35, 30), 0).unwrap();
        assert!(sheep.is_hungry());
        let sheep = Animal::new(Breed::Sheep, 66, traits(5, 35, 30), 0).unwrap();
        assert!(!sheep.is_hungry());
    }

    #[test]
    fn test_reproduction_threshold_is_strict() {
        // 5 + 30 = 35: energy must strictly exceed it after the step cost.
        let mut sheep = Animal::new(Breed::Sheep, 40, traits(5, 35, 30), 0).unwrap();
        sheep.spend_step_energy();
        assert_eq!(sheep.energy(), 35);
        assert!(!sheep.can_reproduce());

        let mut sheep = Animal::new(Breed::Sheep, 41, traits(5, 35, 30), 0).unwrap();
        sheep.spend_step_energy();
        assert!(sheep.can_reproduce());
    }

    #[test]
    fn test_reproduction_cost_never_goes_negative() {
        let mut wolf = Animal::new(Breed::Wolf, 10, traits(2, 50, 30), 0).unwrap();
        wolf.pay_reproduction_cost();
        assert_eq!(wolf.energy(), 0);
        assert_eq!(wolf.offspring_count(), 1);
        assert_eq!(wolf.offspring_energy(), 5);
    }

    #[test]
    fn test_eating_caps_energy() {
        let mut sheep = Animal::new(Breed::Sheep, 90, traits(5, 35, 30), 0).unwrap();
        sheep.eat();
        assert_eq!(sheep.energy(), MAX_LEVEL);
    }

    #[test]
    fn test_extreme_traits_saturate() {
        let mut patch = GrassPatch::new(50, i32::MAX);
        patch.step();
        assert_eq!(patch.progress(), MAX_LEVEL);

        let huge = 1_200_000_000;
        let mut sheep = Animal::new(Breed::Sheep, 100, traits(huge, huge, huge), 0).unwrap();
        assert!(!sheep.can_reproduce());
        assert_eq!(sheep.offspring_energy(), i32::MAX);
        sheep.eat();
        assert_eq!(sheep.energy(), MAX_LEVEL);
        sheep.spend_step_energy();
        assert_eq!(sheep.energy(), 0);
    }

    #[test]
    fn test_grass_is_not_an_animal_breed() {
        assert!(Animal::new(Breed::Grass, 10, traits(1, 1, 1), 0).is_err());
    }

    proptest! {
        #[test]
        fn grass_reaches_full_growth_iff_enough_steps(per_step in 0i32..=100, steps in 0usize..40) {
            let mut patch = GrassPatch::new(0, per_step);
            patch.reset();
            for _ in 0..steps {
                patch.step();
                prop_assert!((0..=MAX_LEVEL).contains(&patch.progress()));
            }
            let expected = steps as i64 * per_step as i64 >= MAX_LEVEL as i64;
            prop_assert_eq!(patch.is_fully_grown(), expected);
        }
    }
}
