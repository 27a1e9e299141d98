use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    play_session, BotPlayer, GameEngine, GameStatus, MemoryStore, Player, ShipRegistry,
};
use serde_json::json;

/// Bot against bot on one seed, printing a JSON summary.
fn main() -> anyhow::Result<()> {
    seabattle::init_logging(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    // The "player" seat is taken by a second bot.
    let mut p1 = BotPlayer::new();
    let mut p2 = BotPlayer::new();
    let fleet1 = ShipRegistry::from_layout(p1.place_ships(&mut rng)?)?;
    let fleet2 = ShipRegistry::from_layout(p2.place_ships(&mut rng)?)?;
    let mut engine = GameEngine::new(fleet1, fleet2);
    let mut store = MemoryStore::new();

    let status = play_session(&mut engine, &mut p1, &mut p2, &mut store, &mut rng)?;

    let winner = match status {
        GameStatus::PlayerWon => Some("player1"),
        GameStatus::BotWon => Some("player2"),
        GameStatus::InProgress => None,
    };
    let turns = store.turns().len();
    // The winning turn of player1 has no reply shot.
    let p2_shots = match status {
        GameStatus::PlayerWon => turns - 1,
        _ => turns,
    };
    let result = json!({
        "seed": seed,
        "turns": turns,
        "winner": winner,
        "player1": {"shots": turns, "hits": engine.player_hits().len()},
        "player2": {"shots": p2_shots, "hits": engine.bot_hits().len()},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
