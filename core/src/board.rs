use std::fmt;

use crate::shuffle::shuffled_ids;

pub type TileId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub row: u32,
    pub col: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    pub solved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapError {
    UnknownTile { id: TileId },
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::UnknownTile { id } => {
                write!(f, "no tile with id {id} on the board")
            }
        }
    }
}

impl std::error::Error for SwapError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: u32,
    tiles: Vec<Tile>,
    slots: Vec<TileId>,
    solved: bool,
}

impl Board {
    pub fn in_order(grid: u32) -> Self {
        let total = (grid * grid) as usize;
        let mut tiles = Vec::with_capacity(total);
        for row in 0..grid {
            for col in 0..grid {
                tiles.push(Tile {
                    id: (row * grid + col) as TileId,
                    row,
                    col,
                });
            }
        }
        let slots: Vec<TileId> = (0..total).collect();
        let solved = home_order(&slots);
        Self {
            grid,
            tiles,
            slots,
            solved,
        }
    }

    pub fn shuffled(grid: u32, seed: u32) -> Self {
        let mut board = Self::in_order(grid);
        board.slots = shuffled_ids(seed, board.slots.len());
        board.solved = home_order(&board.slots);
        board
    }

    pub fn grid(&self) -> u32 {
        self.grid
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn slots(&self) -> &[TileId] {
        &self.slots
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn slot_of(&self, id: TileId) -> Option<usize> {
        self.slots.iter().position(|&occupant| occupant == id)
    }

    pub fn tiles_in_slot_order(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.slots.iter().filter_map(|id| self.tiles.get(*id))
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    // Exchanges the slots of two tiles addressed by stable id. Argument
    // order does not matter; unknown ids leave the board untouched.
    pub fn swap(&mut self, a: TileId, b: TileId) -> Result<SwapOutcome, SwapError> {
        let slot_a = self.slot_of(a).ok_or(SwapError::UnknownTile { id: a })?;
        let slot_b = self.slot_of(b).ok_or(SwapError::UnknownTile { id: b })?;
        self.slots.swap(slot_a, slot_b);
        self.solved = home_order(&self.slots);
        Ok(SwapOutcome {
            solved: self.solved,
        })
    }
}

fn home_order(slots: &[TileId]) -> bool {
    slots.iter().enumerate().all(|(slot, &id)| id == slot)
}
