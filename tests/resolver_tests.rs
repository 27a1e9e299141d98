use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    apply_shot, cells, random_fleet, Board, Cell, CellState, HitSet, Outcome, ShipRegistry,
};

fn single(row: usize, col: usize) -> ShipRegistry {
    ShipRegistry::from_layout(vec![vec![Cell::new(row, col)]]).unwrap()
}

fn random_registry(seed: u64) -> ShipRegistry {
    let mut rng = SmallRng::seed_from_u64(seed);
    ShipRegistry::from_layout(random_fleet(&mut rng).unwrap()).unwrap()
}

fn states(board: &Board) -> Vec<CellState> {
    cells().map(|c| board.get(c).unwrap()).collect()
}

#[test]
fn test_single_cell_ship_sinks_and_marks_water() {
    let reg = single(5, 5);
    let mut board = Board::new();
    let mut hits = HitSet::new();

    let outcome = apply_shot(&mut board, Cell::new(5, 5), &reg, &mut hits).unwrap();
    assert_eq!(outcome, Outcome::Hit);
    assert!(reg.is_destroyed(0, &hits));
    assert_eq!(board.get(Cell::new(5, 5)), Ok(CellState::Hit));
    for n in Board::neighbors8(Cell::new(5, 5)) {
        assert_eq!(board.get(n), Ok(CellState::Miss), "neighbor {}", n);
    }
    assert_eq!(board.unknown_cells().len(), 100 - 9);
    assert!(reg.all_cells().is_subset(&hits));
}

#[test]
fn test_repeat_miss_is_idempotent() {
    let reg = single(0, 0);
    let mut board = Board::new();
    let mut hits = HitSet::new();

    let cell = Cell::new(6, 6);
    assert_eq!(
        apply_shot(&mut board, cell, &reg, &mut hits),
        Ok(Outcome::Miss)
    );
    let after_first = board;
    assert_eq!(
        apply_shot(&mut board, cell, &reg, &mut hits),
        Ok(Outcome::Miss)
    );
    assert_eq!(board, after_first);
    assert!(hits.is_empty());
}

#[test]
fn test_partial_hit_does_not_mark_water() {
    let reg = ShipRegistry::from_layout(vec![vec![Cell::new(2, 2), Cell::new(3, 2)]]).unwrap();
    let mut board = Board::new();
    let mut hits = HitSet::new();
    apply_shot(&mut board, Cell::new(2, 2), &reg, &mut hits).unwrap();
    assert_eq!(board.unknown_cells().len(), 99);

    apply_shot(&mut board, Cell::new(3, 2), &reg, &mut hits).unwrap();
    // 2x1 ship at the interior: 3x4 block minus the two ship cells
    assert_eq!(board.misses().len(), 10);
    assert_eq!(board.hits().len(), 2);
}

#[test]
fn test_water_marking_keeps_existing_misses() {
    let reg = single(0, 0);
    let mut board = Board::new();
    let mut hits = HitSet::new();
    apply_shot(&mut board, Cell::new(1, 1), &reg, &mut hits).unwrap();
    apply_shot(&mut board, Cell::new(0, 0), &reg, &mut hits).unwrap();
    assert_eq!(board.misses().len(), 3);
    assert_eq!(board.get(Cell::new(1, 1)), Ok(CellState::Miss));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cell_states_are_monotonic(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10usize, 0..10usize), 0..120),
    ) {
        let reg = random_registry(seed);
        let mut board = Board::new();
        let mut hits = HitSet::new();
        for (r, c) in shots {
            let before = states(&board);
            let outcome = apply_shot(&mut board, Cell::new(r, c), &reg, &mut hits).unwrap();
            let after = states(&board);
            for (b, a) in before.iter().zip(after.iter()) {
                if *b != CellState::Unknown {
                    prop_assert_eq!(b, a);
                }
            }
            prop_assert_eq!(outcome == Outcome::Hit, reg.ship_at(Cell::new(r, c)).is_some());
        }
        for ship in reg.ships() {
            let all_hit = ship.cells().iter().all(|&c| hits.contains(c));
            prop_assert_eq!(reg.is_destroyed(ship.id(), &hits), all_hit);
        }
    }

    #[test]
    fn destruction_changes_only_the_ship_perimeter(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10usize, 0..10usize), 0..150),
    ) {
        let reg = random_registry(seed);
        let mut board = Board::new();
        let mut hits = HitSet::new();
        for (r, c) in shots {
            let cell = Cell::new(r, c);
            let target = reg.ship_at(cell);
            let was_destroyed = target.is_some_and(|id| reg.is_destroyed(id, &hits));
            let before = board;
            apply_shot(&mut board, cell, &reg, &mut hits).unwrap();

            let Some(id) = target else { continue };
            if was_destroyed || !reg.is_destroyed(id, &hits) {
                continue;
            }
            let ship = reg.ship(id).unwrap();
            for probe in cells() {
                let old = before.get(probe).unwrap();
                let new = board.get(probe).unwrap();
                let perimeter = ship
                    .cells()
                    .iter()
                    .any(|&s| Board::neighbors8(s).any(|n| n == probe));
                if probe == cell {
                    prop_assert_eq!(new, CellState::Hit);
                } else if perimeter && old == CellState::Unknown && !ship.contains(probe) {
                    prop_assert_eq!(new, CellState::Miss);
                } else {
                    prop_assert_eq!(new, old);
                }
            }
        }
    }
}
