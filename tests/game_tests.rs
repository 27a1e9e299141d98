use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    play_session, random_fleet, Board, BotPlayer, Cell, GameEngine, GameError, GameStatus,
    Layout, MemoryStore, Mode, Outcome, Player, ShipRegistry,
};

/// Player that fires a fixed list of moves, repeating the last one.
struct Scripted {
    moves: VecDeque<Cell>,
    last: Cell,
    results: Vec<(Cell, Outcome)>,
}

impl Scripted {
    fn new(moves: &[(usize, usize)]) -> Self {
        let moves: VecDeque<Cell> = moves.iter().map(|&c| Cell::from(c)).collect();
        Self {
            last: moves[0],
            moves,
            results: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn place_ships(&mut self, _rng: &mut SmallRng) -> Result<Layout, GameError> {
        Ok(vec![vec![Cell::new(0, 0)]])
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _view: &Board,
        _incoming: &Board,
    ) -> Result<Cell, GameError> {
        if let Some(next) = self.moves.pop_front() {
            self.last = next;
        }
        Ok(self.last)
    }

    fn handle_shot_result(
        &mut self,
        cell: Cell,
        outcome: Outcome,
        _opponent: &ShipRegistry,
        _hits: &seabattle::HitSet,
    ) {
        self.results.push((cell, outcome));
    }
}

fn fleet(cells: &[(usize, usize)]) -> ShipRegistry {
    ShipRegistry::from_layout(vec![cells.iter().map(|&c| Cell::from(c)).collect()]).unwrap()
}

#[test]
fn test_player_win_ends_turn_without_bot_move() {
    let mut engine = GameEngine::new(fleet(&[(0, 0)]), fleet(&[(5, 5)]));
    let mut human = Scripted::new(&[(5, 5)]);
    let mut bot = BotPlayer::new();
    let mut store = MemoryStore::new();
    let mut rng = SmallRng::seed_from_u64(3);

    let status = play_session(&mut engine, &mut human, &mut bot, &mut store, &mut rng).unwrap();
    assert_eq!(status, GameStatus::PlayerWon);
    assert_eq!(store.turns().len(), 1);

    let snap = &store.turns()[0];
    assert_eq!(snap.turn, 1);
    assert_eq!(snap.player_move, "5,5:hit");
    assert_eq!(snap.bot_move, "");
    assert_eq!(snap.board.len(), 100);
    assert_eq!(snap.board.chars().nth(55), Some('X'));
    assert_eq!(snap.board.matches('O').count(), 8);
    assert_eq!(human.results, vec![(Cell::new(5, 5), Outcome::Hit)]);
}

#[test]
fn test_bot_wins_against_idle_player() {
    let mut engine = GameEngine::new(fleet(&[(0, 0)]), fleet(&[(4, 4), (4, 5)]));
    let mut human = Scripted::new(&[(9, 9)]);
    let mut bot = BotPlayer::new();
    let mut store = MemoryStore::new();
    let mut rng = SmallRng::seed_from_u64(11);

    let status = play_session(&mut engine, &mut human, &mut bot, &mut store, &mut rng).unwrap();
    assert_eq!(status, GameStatus::BotWon);
    assert_eq!(engine.status(), GameStatus::BotWon);

    let turns = store.turns();
    assert!(turns.len() <= 100);
    for (i, snap) in turns.iter().enumerate() {
        assert_eq!(snap.turn as usize, i + 1);
        assert_eq!(snap.player_move, "9,9:miss");
        assert!(snap.bot_move.ends_with(":miss") || i + 1 == turns.len());
    }
    assert_eq!(turns.last().unwrap().bot_move, "0,0:hit");
    assert_eq!(bot.targeting().mode(), Mode::Random);
}

#[test]
fn test_snapshot_tracks_player_view() {
    let mut engine = GameEngine::new(fleet(&[(0, 0)]), fleet(&[(2, 2), (2, 3)]));
    assert_eq!(engine.player_shoot(Cell::new(2, 2)), Ok(Outcome::Hit));
    assert_eq!(engine.player_shoot(Cell::new(7, 7)), Ok(Outcome::Miss));
    assert_eq!(engine.status(), GameStatus::InProgress);

    let snap = engine.snapshot("7,7:miss".into(), "1,1:miss".into());
    assert_eq!(snap.turn, 1);
    assert_eq!(snap.board.chars().nth(22), Some('X'));
    assert_eq!(snap.board.chars().nth(77), Some('O'));
    assert_eq!(snap.board.matches('.').count(), 98);

    engine.next_turn();
    assert_eq!(engine.turn(), 2);
}

#[test]
fn test_bot_versus_bot_finishes() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut p1 = BotPlayer::new();
        let mut p2 = BotPlayer::new();
        let f1 = ShipRegistry::from_layout(random_fleet(&mut rng).unwrap()).unwrap();
        let f2 = ShipRegistry::from_layout(p2.place_ships(&mut rng).unwrap()).unwrap();
        let mut engine = GameEngine::new(f1, f2);
        let mut store = MemoryStore::new();

        let status = play_session(&mut engine, &mut p1, &mut p2, &mut store, &mut rng).unwrap();
        assert_ne!(status, GameStatus::InProgress);
        assert!(store.turns().len() <= 100, "seed {}", seed);
        match status {
            GameStatus::PlayerWon => assert_eq!(engine.player_hits().len(), 20),
            GameStatus::BotWon => assert_eq!(engine.bot_hits().len(), 20),
            GameStatus::InProgress => unreachable!(),
        }
    }
}
