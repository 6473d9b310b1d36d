use shaffuru_core::{scramble_seed, shuffled_ids, Board, SwapError, BOARD_SEED};

const TEST_SEED: u32 = 0x1A2B_3C4D;

#[test]
fn shuffled_board_holds_a_full_permutation() {
    for grid in [1u32, 2, 3, 5] {
        let total = (grid * grid) as usize;
        let board = Board::shuffled(grid, TEST_SEED);
        assert_eq!(board.tile_count(), total);
        assert_eq!(board.slots().len(), total);
        let mut seen = vec![false; total];
        for &id in board.slots() {
            assert!(id < total, "slot occupant {id} out of range for grid {grid}");
            assert!(!seen[id], "duplicate occupant {id} for grid {grid}");
            seen[id] = true;
        }
    }
}

#[test]
fn arena_matches_home_grid() {
    let grid = 3u32;
    let board = Board::shuffled(grid, TEST_SEED);
    for (index, tile) in board.tiles().iter().enumerate() {
        assert_eq!(tile.id, index);
        assert_eq!(tile.row, index as u32 / grid);
        assert_eq!(tile.col, index as u32 % grid);
    }
}

#[test]
fn shuffle_is_reproducible_under_a_fixed_seed() {
    assert_eq!(shuffled_ids(TEST_SEED, 9), vec![6, 2, 0, 5, 8, 4, 7, 1, 3]);
    assert_eq!(shuffled_ids(TEST_SEED, 4), vec![1, 2, 0, 3]);
    assert_eq!(shuffled_ids(TEST_SEED, 1), vec![0]);
    let first = Board::shuffled(3, TEST_SEED);
    let second = Board::shuffled(3, TEST_SEED);
    assert_eq!(first.slots(), second.slots());
}

#[test]
fn scramble_seed_separates_nonces_and_grids() {
    let a = scramble_seed(BOARD_SEED, 1, 3);
    let b = scramble_seed(BOARD_SEED, 2, 3);
    assert_ne!(a, b);
    assert_ne!(scramble_seed(BOARD_SEED, 1, 2), a);
    assert_eq!(a, scramble_seed(BOARD_SEED, 1, 3));
}

#[test]
fn swap_is_self_inverse() {
    let mut board = Board::shuffled(3, TEST_SEED);
    let before = board.slots().to_vec();
    board.swap(2, 7).expect("first swap");
    assert_ne!(board.slots(), before.as_slice());
    board.swap(2, 7).expect("second swap");
    assert_eq!(board.slots(), before.as_slice());
}

#[test]
fn swap_ignores_argument_order() {
    let mut forward = Board::shuffled(3, TEST_SEED);
    let mut reversed = forward.clone();
    forward.swap(1, 8).expect("forward swap");
    reversed.swap(8, 1).expect("reversed swap");
    assert_eq!(forward.slots(), reversed.slots());
}

#[test]
fn single_transposition_is_not_solved() {
    let mut board = Board::in_order(3);
    assert!(board.is_solved());
    let outcome = board.swap(0, 1).expect("transpose");
    assert!(!outcome.solved);
    assert!(!board.is_solved());
    assert_eq!(board.slots(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
    let outcome = board.swap(0, 1).expect("transpose back");
    assert!(outcome.solved);
    assert!(board.is_solved());
    assert_eq!(board.slots(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn undoing_the_shuffle_by_swaps_solves() {
    let mut board = Board::shuffled(3, TEST_SEED);
    assert!(!board.is_solved());
    let mut outcomes = Vec::new();
    for slot in 0..board.tile_count() {
        let occupant = board.slots()[slot];
        if occupant != slot {
            outcomes.push(board.swap(occupant, slot).expect("undo swap"));
        }
    }
    assert!(board.is_solved());
    let (last, rest) = outcomes.split_last().expect("at least one swap");
    assert!(last.solved);
    assert!(rest.iter().all(|outcome| !outcome.solved));
}

#[test]
fn swap_reports_the_predicate_on_every_call() {
    let mut board = Board::in_order(3);
    // Swapping a tile with itself leaves the order alone but still reports.
    let outcome = board.swap(4, 4).expect("identity swap");
    assert!(outcome.solved);
    assert!(board.is_solved());
}

#[test]
fn unknown_tile_is_rejected_without_side_effects() {
    let mut board = Board::shuffled(3, TEST_SEED);
    let slots = board.slots().to_vec();
    let solved = board.is_solved();
    assert_eq!(
        board.swap(0, 99),
        Err(SwapError::UnknownTile { id: 99 })
    );
    assert_eq!(
        board.swap(99, 0),
        Err(SwapError::UnknownTile { id: 99 })
    );
    assert_eq!(board.slots(), slots.as_slice());
    assert_eq!(board.is_solved(), solved);
}

#[test]
fn one_tile_board_is_born_solved() {
    let board = Board::shuffled(1, TEST_SEED);
    assert_eq!(board.slots(), &[0]);
    assert!(board.is_solved());
}
