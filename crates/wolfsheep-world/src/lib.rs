//! World simulation engine.
//!
//! This crate implements the toroidal grid where grass grows, sheep graze and
//! wolves hunt, together with the scheduler that drives them tick by tick.

pub mod agent;
pub mod collector;
pub mod grid;
pub mod model;
pub mod random_walk;
pub mod schedule;

pub use agent::{Agent, AgentKind, Animal, AnimalTraits, GrassPatch};
pub use collector::{Collector, DataCollector};
pub use grid::Grid;
pub use model::{AgentView, WolfSheep};
pub use schedule::RandomActivationByBreed;
