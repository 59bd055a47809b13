//! 2D toroidal multi-grid holding agent ids.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use wolfsheep_core::{AgentId, Breed, Direction, Error, Position, Result};

/// Occupants of one grid cell.
///
/// A cell holds at most one grass patch and any number of animals.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    grass: Option<AgentId>,
    animals: Vec<AgentId>,
}

impl Cell {
    pub fn grass(&self) -> Option<AgentId> {
        self.grass
    }

    pub fn animals(&self) -> &[AgentId] {
        &self.animals
    }

    /// No animal present. Grass does not count.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

/// A 2D toroidal grid
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
    locations: HashMap<AgentId, Position>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            locations: HashMap::new(),
        }
    }

    /// Wrapped cells adjacent to `pos`, in fixed direction order.
    ///
    /// Duplicates that appear on very small tori are dropped.
    pub fn neighborhood(&self, pos: Position, moore: bool, include_center: bool) -> Vec<Position> {
        let center = pos.wrap(self.width, self.height);
        let mut cells = Vec::with_capacity(9);
        if include_center {
            cells.push(center);
        }
        for direction in Direction::neighbourhood(moore) {
            let (dx, dy) = direction.to_delta();
            let neighbor = center.add(dx, dy).wrap(self.width, self.height);
            if (include_center || neighbor != center) && !cells.contains(&neighbor) {
                cells.push(neighbor);
            }
        }
        cells
    }

    /// Put a newly created agent on the grid.
    pub fn place(&mut self, id: AgentId, breed: Breed, pos: Position) -> Result<()> {
        if let Some(existing) = self.locations.get(&id) {
            return Err(Error::InvalidState(format!(
                "agent {id} is already placed at {existing}"
            )));
        }
        let wrapped = pos.wrap(self.width, self.height);
        let index = self.pos_to_index(wrapped);
        let cell = &mut self.cells[index];
        if breed == Breed::Grass {
            if let Some(existing) = cell.grass {
                return Err(Error::CellOccupied {
                    position: wrapped,
                    existing,
                });
            }
            cell.grass = Some(id);
        } else {
            cell.animals.push(id);
        }
        self.locations.insert(id, wrapped);
        Ok(())
    }

    /// Take an agent off the grid, returning the cell it occupied.
    pub fn remove(&mut self, id: AgentId) -> Result<Position> {
        let pos = self.locations.remove(&id).ok_or(Error::UnknownAgent(id))?;
        let index = self.pos_to_index(pos);
        let cell = &mut self.cells[index];
        if cell.grass == Some(id) {
            cell.grass = None;
        } else if let Some(slot) = cell.animals.iter().position(|a| *a == id) {
            cell.animals.swap_remove(slot);
        } else {
            return Err(Error::InvalidState(format!(
                "agent {id} indexed at {pos} but missing from that cell"
            )));
        }
        Ok(pos)
    }

    /// Relocate an animal. Grass patches are fixed to their cell.
    pub fn move_agent(&mut self, id: AgentId, new_pos: Position) -> Result<()> {
        let old_pos = *self.locations.get(&id).ok_or(Error::UnknownAgent(id))?;
        let old_index = self.pos_to_index(old_pos);
        if self.cells[old_index].grass == Some(id) {
            return Err(Error::InvalidState(format!(
                "grass patch {id} cannot move"
            )));
        }
        let slot = self.cells[old_index]
            .animals
            .iter()
            .position(|a| *a == id)
            .ok_or_else(|| {
                Error::InvalidState(format!(
                    "agent {id} indexed at {old_pos} but missing from that cell"
                ))
            })?;

        let wrapped = new_pos.wrap(self.width, self.height);
        let new_index = self.pos_to_index(wrapped);
        self.cells[old_index].animals.swap_remove(slot);
        self.cells[new_index].animals.push(id);
        self.locations.insert(id, wrapped);
        Ok(())
    }

    pub fn position_of(&self, id: AgentId) -> Option<Position> {
        self.locations.get(&id).copied()
    }

    /// Get cell at position (with toroidal wrapping)
    pub fn cell(&self, pos: Position) -> &Cell {
        let wrapped = pos.wrap(self.width, self.height);
        &self.cells[self.pos_to_index(wrapped)]
    }

    /// Every agent id in the cell, grass first.
    pub fn contents_of(&self, pos: Position) -> impl Iterator<Item = AgentId> + '_ {
        let cell = self.cell(pos);
        cell.grass.into_iter().chain(cell.animals.iter().copied())
    }

    pub fn grass_at(&self, pos: Position) -> Option<AgentId> {
        self.cell(pos).grass
    }

    pub fn animals_at(&self, pos: Position) -> &[AgentId] {
        &self.cell(pos).animals
    }

    /// Pick a random cell without animals, or `None` if every cell has one.
    pub fn find_empty<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let empties: Vec<Position> = self
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect();
        empties.choose(rng).copied()
    }

    /// Number of agents on the grid.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    /// Iterator over all positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), cell))
    }

    /// Indexed agents and their recorded cells.
    pub fn locations(&self) -> impl Iterator<Item = (AgentId, Position)> + '_ {
        self.locations.iter().map(|(id, pos)| (*id, *pos))
    }
}
