//! Wolf-sheep predation model.
//!
//! Replication of the NetLogo Wolf Sheep Predation model (Wilensky, 1997) on a
//! toroidal grid: wolves eat sheep, sheep eat grass, grass regrows.

use crate::agent::{Agent, Animal, AnimalTraits, GrassPatch};
use crate::collector::{Collector, DataCollector};
use crate::grid::Grid;
use crate::schedule::RandomActivationByBreed;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, instrument};
use wolfsheep_core::{
    max_or_zero, mean_or_zero, AgentId, Breed, Error, ModelConfig, Position, Result, TickEvents,
    TickMetrics, MAX_LEVEL,
};

pub struct WolfSheep {
    grid: Grid,
    schedule: RandomActivationByBreed,
    config: ModelConfig,
    rng: ChaCha8Rng,
    next_id: u64,
    tick: u64,
    // Life events of the tick in progress, and since construction
    events: TickEvents,
    totals: TickEvents,
    datacollector: DataCollector,
    collectors: Vec<Box<dyn Collector>>,
}

impl WolfSheep {
    /// Build a world seeded from `config.seed`.
    pub fn new(config: ModelConfig) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Build a world drawing every random choice from `rng`.
    pub fn with_rng(config: ModelConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;

        let mut model = Self {
            grid: Grid::new(config.width, config.height),
            schedule: RandomActivationByBreed::new(),
            config,
            rng,
            next_id: 0,
            tick: 0,
            events: TickEvents::default(),
            totals: TickEvents::default(),
            datacollector: DataCollector::new(),
            collectors: Vec::new(),
        };
        model.populate()?;

        info!(
            width = model.config.width,
            height = model.config.height,
            moore = model.config.moore,
            seed = model.config.seed,
            sheep = model.count(Breed::Sheep),
            wolves = model.count(Breed::Wolf),
            grass = model.count(Breed::Grass),
            "World created"
        );
        Ok(model)
    }

    fn populate(&mut self) -> Result<()> {
        for breed in [Breed::Sheep, Breed::Wolf] {
            let count = self.breed_traits(breed)?.1;
            for _ in 0..count {
                let cell = self
                    .grid
                    .find_empty(&mut self.rng)
                    .ok_or(Error::NoEmptyCell { breed })?;
                let energy = self.rng.gen_range(1..=MAX_LEVEL);
                self.spawn_animal(breed, cell, energy)?;
            }
        }

        let cells: Vec<Position> = self.grid.positions().collect();
        for pos in cells {
            let progress = self.rng.gen_range(0..=MAX_LEVEL);
            let patch = GrassPatch::new(progress, self.config.grass_progress_per_step);
            let id = self.next_agent_id();
            self.add_agent(Agent::grass(id, patch), pos)?;
        }
        Ok(())
    }

    /// Run the model for `step_count` ticks.
    #[instrument(skip(self), fields(start_tick = self.tick))]
    pub fn run(&mut self, step_count: u64) -> Result<()> {
        info!("Running model for {} ticks", step_count);
        for _ in 0..step_count {
            self.step()?;
        }
        self.emit_run_summary();
        Ok(())
    }

    /// Like [`run`](Self::run), but stop early once `cancel` is set.
    ///
    /// The flag is only read between ticks. Returns the ticks completed.
    #[instrument(skip(self, cancel), fields(start_tick = self.tick))]
    pub fn run_until_cancelled(&mut self, step_count: u64, cancel: &AtomicBool) -> Result<u64> {
        let mut completed = 0;
        while completed < step_count {
            if cancel.load(Ordering::Relaxed) {
                info!(completed, requested = step_count, "Run cancelled");
                break;
            }
            self.step()?;
            completed += 1;
        }
        self.emit_run_summary();
        Ok(completed)
    }

    /// Advance exactly one tick.
    pub fn step(&mut self) -> Result<()> {
        self.events = TickEvents::default();

        self.schedule
            .step(&mut self.grid, self.config.moore, &mut self.rng)?;
        self.kill_animals()?;
        self.feed_animals()?;
        self.reproduce_animals()?;

        self.tick += 1;
        self.totals.starved += self.events.starved;
        self.totals.sheep_eaten += self.events.sheep_eaten;
        self.totals.grass_eaten += self.events.grass_eaten;
        self.totals.births += self.events.births;
        debug_assert!(self.check_consistency().is_ok());

        self.collect();
        if self.config.log_every > 0 && self.tick % self.config.log_every == 0 {
            self.emit_population_metrics();
        }
        Ok(())
    }

    /// Cull every animal that ran out of energy.
    pub(crate) fn kill_animals(&mut self) -> Result<()> {
        let starved: Vec<AgentId> = self
            .schedule
            .agents()
            .filter(|a| a.as_animal().is_some_and(|animal| !animal.is_alive()))
            .map(|a| a.id)
            .collect();

        for id in starved {
            let agent = self.kill_agent(id)?;
            self.events.starved += 1;
            if let Some(animal) = agent.as_animal() {
                debug!(
                    event = "starvation",
                    agent_id = %id,
                    breed = %animal.breed(),
                    age = animal.age(),
                    birth_tick = animal.birth_tick(),
                    offspring_count = animal.offspring_count(),
                    tick = self.tick,
                    "Animal starved"
                );
            }
        }
        Ok(())
    }

    /// Wolves eat first, so a sheep taken by a wolf never grazes.
    pub(crate) fn feed_animals(&mut self) -> Result<()> {
        self.feed_wolves()?;
        self.feed_sheep()
    }

    pub(crate) fn feed_wolves(&mut self) -> Result<()> {
        for wolf_id in self.hungry(Breed::Wolf) {
            let pos = self.locate(wolf_id)?;
            let mut prey: Vec<AgentId> = self
                .grid
                .animals_at(pos)
                .iter()
                .copied()
                .filter(|id| self.schedule.get(*id).map(Agent::breed) == Some(Breed::Sheep))
                .collect();
            prey.sort_unstable();

            let Some(&sheep_id) = prey.choose(&mut self.rng) else {
                continue;
            };
            self.kill_agent(sheep_id)?;
            self.animal_mut(wolf_id)?.eat();
            self.events.sheep_eaten += 1;
            debug!(
                event = "predation",
                wolf_id = %wolf_id,
                sheep_id = %sheep_id,
                position = %pos,
                tick = self.tick,
                "Wolf ate a sheep"
            );
        }
        Ok(())
    }

    pub(crate) fn feed_sheep(&mut self) -> Result<()> {
        for sheep_id in self.hungry(Breed::Sheep) {
            let pos = self.locate(sheep_id)?;
            let grass_id = self
                .grid
                .grass_at(pos)
                .ok_or_else(|| Error::InvalidState(format!("cell {pos} has no grass patch")))?;
            let patch = self
                .schedule
                .get_mut(grass_id)
                .and_then(Agent::as_grass_mut)
                .ok_or_else(|| {
                    Error::InvalidState(format!("{grass_id} at {pos} is not a grass patch"))
                })?;
            if !patch.is_fully_grown() {
                continue;
            }
            patch.reset();
            self.animal_mut(sheep_id)?.eat();
            self.events.grass_eaten += 1;
        }
        Ok(())
    }

    /// Every animal able to reproduce rolls once against its breed's chance.
    pub(crate) fn reproduce_animals(&mut self) -> Result<()> {
        let parents: Vec<AgentId> = self
            .schedule
            .agents()
            .filter(|a| a.as_animal().is_some_and(Animal::can_reproduce))
            .map(|a| a.id)
            .collect();

        for parent_id in parents {
            let (breed, chance, offspring_energy) = {
                let parent = self.animal_mut(parent_id)?;
                (
                    parent.breed(),
                    parent.traits().reproduction_chance,
                    parent.offspring_energy(),
                )
            };
            let roll: f64 = self.rng.gen();
            if roll > chance {
                continue;
            }

            let pos = self.locate(parent_id)?;
            let child_id = self.spawn_animal(breed, pos, offspring_energy)?;
            let parent = self.animal_mut(parent_id)?;
            parent.pay_reproduction_cost();
            let parent_energy = parent.energy();
            self.events.births += 1;
            debug!(
                event = "birth",
                parent_id = %parent_id,
                child_id = %child_id,
                breed = %breed,
                parent_energy,
                offspring_energy,
                position = %pos,
                tick = self.tick,
                "Animal reproduced"
            );
        }
        Ok(())
    }

    /// Create an animal of `breed` with that breed's configured traits.
    pub(crate) fn spawn_animal(&mut self, breed: Breed, pos: Position, energy: i32) -> Result<AgentId> {
        let traits = self.breed_traits(breed)?.0;
        let id = self.next_agent_id();
        let animal = Animal::new(breed, energy, traits, self.tick)?;
        self.add_agent(Agent::animal(id, animal), pos)?;
        Ok(id)
    }

    fn breed_traits(&self, breed: Breed) -> Result<(AnimalTraits, usize)> {
        let config = self
            .config
            .breed(breed)
            .ok_or_else(|| Error::InvalidState(format!("{breed} is not an animal breed")))?;
        Ok((AnimalTraits::from(config), config.initial_count))
    }

    fn next_agent_id(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register an agent with the scheduler and the grid together.
    fn add_agent(&mut self, agent: Agent, pos: Position) -> Result<()> {
        let id = agent.id;
        self.grid.place(id, agent.breed(), pos)?;
        if let Err(e) = self.schedule.add(agent) {
            self.grid.remove(id)?;
            return Err(e);
        }
        Ok(())
    }

    /// Remove an agent from the scheduler and the grid together.
    fn kill_agent(&mut self, id: AgentId) -> Result<Agent> {
        let agent = self.schedule.remove(id)?;
        self.grid.remove(id)?;
        Ok(agent)
    }

    fn hungry(&self, breed: Breed) -> Vec<AgentId> {
        self.schedule
            .agents_of(breed)
            .filter(|a| a.as_animal().is_some_and(Animal::is_hungry))
            .map(|a| a.id)
            .collect()
    }

    fn locate(&self, id: AgentId) -> Result<Position> {
        self.grid.position_of(id).ok_or(Error::UnknownAgent(id))
    }

    fn animal_mut(&mut self, id: AgentId) -> Result<&mut Animal> {
        self.schedule
            .get_mut(id)
            .and_then(Agent::as_animal_mut)
            .ok_or(Error::UnknownAgent(id))
    }

    fn collect(&mut self) {
        let metrics = self.metrics();
        self.datacollector.record(metrics);

        let mut collectors = std::mem::take(&mut self.collectors);
        for collector in &mut collectors {
            collector.collect(self);
        }
        self.collectors = collectors;
    }

    /// Attach an observer called after every completed tick.
    pub fn add_collector(&mut self, collector: Box<dyn Collector>) {
        self.collectors.push(collector);
    }

    /// Verify the scheduler and the grid hold exactly the same agents.
    pub fn check_consistency(&self) -> Result<()> {
        if self.schedule.len() != self.grid.len() {
            return Err(Error::InvalidState(format!(
                "{} scheduled agents but {} placed on the grid",
                self.schedule.len(),
                self.grid.len()
            )));
        }
        for (id, pos) in self.grid.locations() {
            let agent = self.schedule.get(id).ok_or_else(|| {
                Error::InvalidState(format!("{id} is on the grid at {pos} but not scheduled"))
            })?;
            let in_cell = self.grid.contents_of(pos).any(|occupant| occupant == id);
            if !in_cell {
                return Err(Error::InvalidState(format!(
                    "{id} is indexed at {pos} but missing from that cell"
                )));
            }
            if (agent.breed() == Breed::Grass) != (self.grid.grass_at(pos) == Some(id)) {
                return Err(Error::InvalidState(format!(
                    "{id} occupies the wrong slot of cell {pos}"
                )));
            }
        }
        for (pos, cell) in self.grid.iter() {
            if cell.grass().is_none() {
                return Err(Error::InvalidState(format!("cell {pos} has no grass patch")));
            }
        }
        Ok(())
    }

    /// Aggregate statistics for the current state.
    pub fn metrics(&self) -> TickMetrics {
        let energies = |breed| {
            self.schedule
                .agents_of(breed)
                .filter_map(Agent::as_animal)
                .map(Animal::energy)
        };
        TickMetrics {
            tick: self.tick,
            average_grass_growth: mean_or_zero(
                self.schedule
                    .agents_of(Breed::Grass)
                    .filter_map(Agent::as_grass)
                    .map(GrassPatch::progress),
            ),
            average_sheep_energy: mean_or_zero(energies(Breed::Sheep)),
            max_sheep_energy: max_or_zero(energies(Breed::Sheep)),
            average_wolf_energy: mean_or_zero(energies(Breed::Wolf)),
            max_wolf_energy: max_or_zero(energies(Breed::Wolf)),
            sheep_count: self.count(Breed::Sheep),
            wolf_count: self.count(Breed::Wolf),
            events: self.events,
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn datacollector(&self) -> &DataCollector {
        &self.datacollector
    }

    /// Life events of the last completed tick.
    pub fn last_events(&self) -> TickEvents {
        self.events
    }

    /// Life events summed over every completed tick.
    pub fn total_events(&self) -> TickEvents {
        self.totals
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.schedule.get(id)
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.schedule.agents()
    }

    pub fn agents_of(&self, breed: Breed) -> impl Iterator<Item = &Agent> + '_ {
        self.schedule.agents_of(breed)
    }

    pub fn count(&self, breed: Breed) -> usize {
        self.schedule.count(breed)
    }

    pub fn position_of(&self, id: AgentId) -> Option<Position> {
        self.grid.position_of(id)
    }

    /// Agent ids in a cell, grass first.
    pub fn cell_contents(&self, pos: Position) -> Vec<AgentId> {
        self.grid.contents_of(pos).collect()
    }

    pub fn grass_at(&self, pos: Position) -> Option<&GrassPatch> {
        self.grid
            .grass_at(pos)
            .and_then(|id| self.schedule.get(id))
            .and_then(Agent::as_grass)
    }

    /// Read-only view of every live agent, in creation order.
    pub fn snapshot(&self) -> Vec<AgentView> {
        self.schedule
            .agents()
            .filter_map(|agent| {
                let position = self.grid.position_of(agent.id)?;
                Some(AgentView::new(agent, position))
            })
            .collect()
    }

    /// Emit population metrics
    fn emit_population_metrics(&self) {
        let metrics = self.metrics();
        info!(
            event = "population_metrics",
            tick = metrics.tick,
            sheep = metrics.sheep_count,
            wolves = metrics.wolf_count,
            avg_grass_growth = format!("{:.1}", metrics.average_grass_growth),
            avg_sheep_energy = format!("{:.1}", metrics.average_sheep_energy),
            max_sheep_energy = metrics.max_sheep_energy,
            avg_wolf_energy = format!("{:.1}", metrics.average_wolf_energy),
            max_wolf_energy = metrics.max_wolf_energy,
            "Population metrics snapshot"
        );
    }

    fn emit_run_summary(&self) {
        info!(
            event = "run_summary",
            final_tick = self.tick,
            sheep = self.count(Breed::Sheep),
            wolves = self.count(Breed::Wolf),
            births_total = self.totals.births,
            starved_total = self.totals.starved,
            sheep_eaten_total = self.totals.sheep_eaten,
            grass_eaten_total = self.totals.grass_eaten,
            "Run complete"
        );
    }
}

/// Serializable agent state for external consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub breed: Breed,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
}

impl AgentView {
    pub fn new(agent: &Agent, position: Position) -> Self {
        Self {
            id: agent.id,
            breed: agent.breed(),
            position,
            energy: agent.as_animal().map(Animal::energy),
            progress: agent.as_grass().map(GrassPatch::progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentKind;

    /// A 3x3 world holding only grass, with one step of each breed fixed.
    fn empty_world(wolf_step: i32) -> WolfSheep {
        let mut config = ModelConfig {
            width: 3,
            height: 3,
            seed: 42,
            log_every: 0,
            ..Default::default()
        };
        config.sheep.initial_count = 0;
        config.sheep.reproduction_chance = 0.0;
        config.wolf.initial_count = 0;
        config.wolf.energy_step_expenditure = wolf_step;
        config.wolf.energy_gain_from_food = 50;
        config.wolf.reproduction_chance = 0.0;
        WolfSheep::new(config).unwrap()
    }

    /// Run the local step, then put every animal back on `pos` so feeding is
    /// deterministic.
    fn step_agents_onto(model: &mut WolfSheep, pos: Position) {
        model
            .schedule
            .step(&mut model.grid, model.config.moore, &mut model.rng)
            .unwrap();
        let animals: Vec<AgentId> = model
            .agents()
            .filter(|a| a.breed().is_animal())
            .map(|a| a.id)
            .collect();
        for id in animals {
            model.grid.move_agent(id, pos).unwrap();
        }
    }

    #[test]
    fn test_world_population() {
        let model = WolfSheep::new(ModelConfig {
            seed: 42,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(model.count(Breed::Sheep), 100);
        assert_eq!(model.count(Breed::Wolf), 15);
        assert_eq!(model.count(Breed::Grass), 400);
        assert!(model.check_consistency().is_ok());

        // Initial animals never share a cell.
        for (_, cell) in model.grid().iter() {
            assert!(cell.animals().len() <= 1);
        }
        for agent in model.agents() {
            match &agent.kind {
                AgentKind::Animal(a) => assert!((1..=100).contains(&a.energy())),
                AgentKind::Grass(g) => assert!((0..=100).contains(&g.progress())),
            }
        }
    }

    #[test]
    fn test_overcrowded_world_fails_to_initialize() {
        let mut config = ModelConfig {
            width: 3,
            height: 3,
            ..Default::default()
        };
        config.sheep.initial_count = 9;
        config.wolf.initial_count = 1;
        assert!(matches!(
            WolfSheep::new(config),
            Err(Error::NoEmptyCell { breed: Breed::Wolf })
        ));
    }

    #[test]
    fn test_wolf_eats_sheep_in_its_cell() {
        let mut model = empty_world(5);
        let origin = Position::new(0, 0);
        let wolf = model.spawn_animal(Breed::Wolf, origin, 10).unwrap();
        let sheep = model.spawn_animal(Breed::Sheep, origin, 90).unwrap();

        step_agents_onto(&mut model, origin);
        let animal = model.agent(wolf).unwrap().as_animal().unwrap();
        assert_eq!(animal.energy(), 5);
        assert!(animal.is_hungry());

        model.kill_animals().unwrap();
        model.feed_animals().unwrap();

        assert!(model.agent(sheep).is_none());
        assert!(model.position_of(sheep).is_none());
        assert_eq!(model.agent(wolf).unwrap().as_animal().unwrap().energy(), 55);
        assert_eq!(model.events.sheep_eaten, 1);
        assert!(model.check_consistency().is_ok());
    }

    #[test]
    fn test_shared_cell_wolves_each_eat_one_sheep() {
        let mut model = empty_world(5);
        let origin = Position::new(0, 0);
        let wolves: Vec<AgentId> = (0..2)
            .map(|_| model.spawn_animal(Breed::Wolf, origin, 10).unwrap())
            .collect();
        let flock: Vec<AgentId> = (0..3)
            .map(|_| model.spawn_animal(Breed::Sheep, origin, 90).unwrap())
            .collect();

        step_agents_onto(&mut model, origin);
        model.kill_animals().unwrap();
        model.feed_animals().unwrap();

        let survivors: Vec<AgentId> = flock
            .iter()
            .copied()
            .filter(|id| model.agent(*id).is_some())
            .collect();
        assert_eq!(survivors.len(), 1);
        assert_eq!(model.grid.animals_at(origin).len(), 3);
        // 10 - 5 + 50, one meal each
        for wolf in wolves {
            assert_eq!(model.agent(wolf).unwrap().as_animal().unwrap().energy(), 55);
        }
        assert_eq!(model.events.sheep_eaten, 2);
        assert!(model.check_consistency().is_ok());
    }

    #[test]
    fn test_starving_wolf_does_not_eat() {
        let mut model = empty_world(5);
        let origin = Position::new(1, 1);
        let wolf = model.spawn_animal(Breed::Wolf, origin, 5).unwrap();
        let sheep = model.spawn_animal(Breed::Sheep, origin, 90).unwrap();

        step_agents_onto(&mut model, origin);
        model.kill_animals().unwrap();
        assert!(model.agent(wolf).is_none());

        model.feed_animals().unwrap();
        model.reproduce_animals().unwrap();
        assert!(model.agent(sheep).is_some());
        assert_eq!(model.events.starved, 1);
        assert_eq!(model.events.sheep_eaten, 0);
        assert!(model.check_consistency().is_ok());
    }

    #[test]
    fn test_eaten_sheep_does_not_graze() {
        let mut model = empty_world(1);
        let origin = Position::new(2, 2);
        model.spawn_animal(Breed::Wolf, origin, 40).unwrap();
        let sheep = model.spawn_animal(Breed::Sheep, origin, 10).unwrap();
        let grass_id = model.grid.grass_at(origin).unwrap();

        step_agents_onto(&mut model, origin);
        // Grow the patch in the sheep's cell to full after the local step.
        let patch = model
            .schedule
            .get_mut(grass_id)
            .and_then(Agent::as_grass_mut)
            .unwrap();
        *patch = GrassPatch::new(100, patch.progress_per_step());

        model.kill_animals().unwrap();
        model.feed_animals().unwrap();

        assert!(model.agent(sheep).is_none());
        assert!(model.grass_at(origin).unwrap().is_fully_grown());
        assert_eq!(model.events.grass_eaten, 0);
    }

    #[test]
    fn test_hungry_sheep_eats_grown_grass() {
        let mut model = empty_world(1);
        let origin = Position::new(0, 2);
        let sheep = model.spawn_animal(Breed::Sheep, origin, 20).unwrap();

        step_agents_onto(&mut model, origin);
        let grass_id = model.grid.grass_at(origin).unwrap();
        *model
            .schedule
            .get_mut(grass_id)
            .and_then(Agent::as_grass_mut)
            .unwrap() = GrassPatch::new(100, 5);

        model.kill_animals().unwrap();
        model.feed_animals().unwrap();

        // 20 - 5 + 35
        assert_eq!(model.agent(sheep).unwrap().as_animal().unwrap().energy(), 50);
        assert_eq!(model.grass_at(origin).unwrap().progress(), 0);
    }

    #[test]
    fn test_reproduction_places_offspring_with_parent() {
        let mut model = empty_world(2);
        model.config.wolf.reproduction_chance = 1.0;
        model.config.wolf.reproduction_energy_cost = 30;
        let origin = Position::new(1, 0);
        let parent = model.spawn_animal(Breed::Wolf, origin, 80).unwrap();

        step_agents_onto(&mut model, origin);
        assert_eq!(model.agent(parent).unwrap().as_animal().unwrap().energy(), 78);
        model.kill_animals().unwrap();
        model.reproduce_animals().unwrap();

        assert_eq!(model.count(Breed::Wolf), 2);
        assert_eq!(model.events.births, 1);
        let child = model
            .agents_of(Breed::Wolf)
            .find(|a| a.id != parent)
            .unwrap();
        assert_eq!(model.position_of(child.id), Some(origin));
        // 2 * energy_step_expenditure + 1
        assert_eq!(child.as_animal().unwrap().energy(), 5);
        assert_eq!(model.agent(parent).unwrap().as_animal().unwrap().energy(), 48);
        assert!(model.check_consistency().is_ok());
    }

    #[test]
    fn test_metrics_tolerate_empty_populations() {
        let model = empty_world(1);
        let metrics = model.metrics();
        assert_eq!(metrics.sheep_count, 0);
        assert_eq!(metrics.wolf_count, 0);
        assert_eq!(metrics.average_sheep_energy, 0.0);
        assert_eq!(metrics.max_wolf_energy, 0);
    }

    #[test]
    fn test_snapshot_lists_every_agent() {
        let model = WolfSheep::new(ModelConfig::default()).unwrap();
        let snapshot = model.snapshot();
        assert_eq!(snapshot.len(), 515);
        let grass = snapshot.iter().find(|v| v.breed == Breed::Grass).unwrap();
        assert!(grass.progress.is_some());
        assert!(grass.energy.is_none());
    }
}
