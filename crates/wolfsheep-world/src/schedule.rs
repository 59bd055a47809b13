//! Breed-aware random activation.

use crate::agent::Agent;
use crate::grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use wolfsheep_core::{AgentId, Breed, Error, Result};

/// Live agents, activated one breed at a time in [`Breed::ACTIVATION_ORDER`].
///
/// Within a breed the order is reshuffled every step, so no agent is
/// systematically first to reach a contested cell.
#[derive(Debug, Default)]
pub struct RandomActivationByBreed {
    agents: BTreeMap<AgentId, Agent>,
}

impl RandomActivationByBreed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, agent: Agent) -> Result<()> {
        if self.agents.contains_key(&agent.id) {
            return Err(Error::InvalidState(format!(
                "agent {} is already scheduled",
                agent.id
            )));
        }
        self.agents.insert(agent.id, agent);
        Ok(())
    }

    pub fn remove(&mut self, id: AgentId) -> Result<Agent> {
        self.agents.remove(&id).ok_or(Error::UnknownAgent(id))
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agents in creation order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    pub fn agents_of(&self, breed: Breed) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values().filter(move |a| a.breed() == breed)
    }

    /// Snapshot of the ids of one breed, in creation order.
    ///
    /// The snapshot stays valid while agents are added or removed.
    pub fn ids_of(&self, breed: Breed) -> Vec<AgentId> {
        self.agents_of(breed).map(|a| a.id).collect()
    }

    pub fn count(&self, breed: Breed) -> usize {
        self.agents_of(breed).count()
    }

    /// Activate every agent once.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, moore: bool, rng: &mut R) -> Result<()> {
        for breed in Breed::ACTIVATION_ORDER {
            let mut order = self.ids_of(breed);
            order.shuffle(rng);
            for id in order {
                if let Some(agent) = self.agents.get_mut(&id) {
                    agent.step(grid, moore, rng)?;
                }
            }
        }
        Ok(())
    }
}
