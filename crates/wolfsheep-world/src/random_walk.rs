//! Blind random walking, one grid cell at a time.

use crate::grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;
use wolfsheep_core::{AgentId, Error, Position, Result};

/// Step the agent into a uniformly chosen adjacent cell.
///
/// With `moore` the choice is among the 8 surrounding cells, otherwise among
/// the 4 orthogonal ones. The current cell is never chosen.
pub fn random_move<R: Rng + ?Sized>(
    id: AgentId,
    grid: &mut Grid,
    moore: bool,
    rng: &mut R,
) -> Result<Position> {
    let current = grid.position_of(id).ok_or(Error::UnknownAgent(id))?;
    let next_moves = grid.neighborhood(current, moore, false);
    let next = *next_moves
        .choose(rng)
        .ok_or_else(|| Error::InvalidState(format!("no cell adjacent to {current}")))?;
    grid.move_agent(id, next)?;
    trace!(agent_id = %id, from = %current, to = %next, "random move");
    Ok(next)
}
