pub mod board;
pub mod shuffle;

pub use board::{Board, SwapError, SwapOutcome, Tile, TileId};
pub use shuffle::{rand_unit, scramble_seed, shuffled_ids, splitmix32, BOARD_SEED};
