//! Error types for the simulation.

use crate::{AgentId, Breed, Position};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Raised while building the world when an animal cannot be placed.
    #[error("Initialization failure: no empty cell left to place a {breed}")]
    NoEmptyCell { breed: Breed },

    #[error("Cell {position} already holds grass patch {existing}")]
    CellOccupied { position: Position, existing: AgentId },

    #[error("Unknown agent {0}")]
    UnknownAgent(AgentId),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
