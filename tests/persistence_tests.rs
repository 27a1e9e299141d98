use std::fs;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::persistence::{layout_from_records, layout_records, LayoutRecord};
use seabattle::{
    random_fleet, Cell, CsvStore, GameError, LayoutStore, MemoryStore, PersistenceError,
    PlacementError, Side, TurnSink, TurnSnapshot,
};
use tempfile::tempdir;

fn snapshot(turn: u32) -> TurnSnapshot {
    TurnSnapshot {
        turn,
        player_move: format!("{},0:miss", turn),
        bot_move: "3,3:hit".to_string(),
        board: ".".repeat(100),
    }
}

#[test]
fn test_layout_round_trip_through_csv() {
    let dir = tempdir().unwrap();
    let mut store = CsvStore::new(dir.path().join("data"));
    let mut rng = SmallRng::seed_from_u64(5);
    let layout = random_fleet(&mut rng).unwrap();

    store.save_layout(Side::Bot, &layout).unwrap();
    let loaded = store.load_layout(Side::Bot).unwrap();
    assert_eq!(loaded, layout);

    let text = fs::read_to_string(store.layout_path(Side::Bot)).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ship_id,row,col"));
    assert_eq!(lines.count(), 20);
}

#[test]
fn test_layout_file_names() {
    let store = CsvStore::new("data");
    assert!(store.layout_path(Side::Player).ends_with("player_ships.csv"));
    assert!(store.layout_path(Side::Bot).ends_with("bot_ships.csv"));
    assert!(store.game_state_path().ends_with("game_state.csv"));
}

#[test]
fn test_missing_layout_is_reported() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    let err = store.load_layout(Side::Player).unwrap_err();
    assert!(matches!(err, PersistenceError::MissingLayout(_)));
}

#[test]
fn test_touching_layout_is_rejected() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path());
    fs::write(
        store.layout_path(Side::Player),
        "ship_id,row,col\n0,0,0\n0,0,1\n1,1,2\n",
    )
    .unwrap();
    let err = store.load_layout(Side::Player).unwrap_err();
    match err {
        PersistenceError::InvalidLayout(e) => assert_eq!(
            e,
            GameError::InvalidPlacement(PlacementError::TouchesAnotherShip)
        ),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_records_are_grouped_by_ship_id() {
    let records = vec![
        LayoutRecord { ship_id: 1, row: 5, col: 5 },
        LayoutRecord { ship_id: 0, row: 0, col: 0 },
        LayoutRecord { ship_id: 0, row: 1, col: 0 },
    ];
    let layout = layout_from_records(records).unwrap();
    assert_eq!(
        layout,
        vec![
            vec![Cell::new(0, 0), Cell::new(1, 0)],
            vec![Cell::new(5, 5)]
        ]
    );
    assert_eq!(layout_records(&layout).len(), 3);
    assert_eq!(layout_records(&layout)[2], LayoutRecord { ship_id: 1, row: 5, col: 5 });
}

#[test]
fn test_turns_are_appended_with_single_header() {
    let dir = tempdir().unwrap();
    let mut store = CsvStore::new(dir.path());
    store.append_turn(&snapshot(1)).unwrap();
    store.append_turn(&snapshot(2)).unwrap();

    // a fresh store on the same directory keeps appending
    let mut reopened = CsvStore::new(dir.path());
    reopened.append_turn(&snapshot(3)).unwrap();

    let text = fs::read_to_string(store.game_state_path()).unwrap();
    assert_eq!(text.lines().next(), Some("turn,player_move,bot_move,board"));
    assert_eq!(text.matches("turn,player_move").count(), 1);

    let turns = store.load_turns().unwrap();
    assert_eq!(turns, vec![snapshot(1), snapshot(2), snapshot(3)]);
}

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        store.load_layout(Side::Bot),
        Err(PersistenceError::MissingLayout(_))
    ));
    let layout = vec![vec![Cell::new(0, 0), Cell::new(0, 1)]];
    store.save_layout(Side::Bot, &layout).unwrap();
    assert_eq!(store.load_layout(Side::Bot).unwrap(), layout);

    store.append_turn(&snapshot(1)).unwrap();
    assert_eq!(store.turns(), &[snapshot(1)]);
}
