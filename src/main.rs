#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, play_session, random_fleet, ui::render_fleet, BotPlayer, CliPlayer, CsvStore,
    GameEngine, GameStatus, LayoutStore, Player, ShipRegistry, Side, DEFAULT_DATA_DIR,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Directory holding ship layouts and the turn history.
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place your ships, generate the bot fleet, then play (default).
    New {
        #[arg(long, help = "Place your ships randomly instead of typing them")]
        random: bool,
    },
    /// Place your ships and save them.
    Place {
        #[arg(long, help = "Place your ships randomly instead of typing them")]
        random: bool,
    },
    /// Generate and save a random bot fleet.
    Generate,
    /// Play using the layouts already saved in the data directory.
    Play,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut store = CsvStore::new(cli.data_dir);

    println!("================================");
    println!("        BATTLESHIP GAME         ");
    println!("================================\n");

    match cli.command.unwrap_or(Commands::New { random: false }) {
        Commands::New { random } => {
            place_player(&mut store, &mut rng, random)?;
            generate_bot(&mut store, &mut rng)?;
            play(&mut store, &mut rng)?;
        }
        Commands::Place { random } => place_player(&mut store, &mut rng, random)?,
        Commands::Generate => generate_bot(&mut store, &mut rng)?,
        Commands::Play => play(&mut store, &mut rng)?,
    }
    Ok(())
}

#[cfg(feature = "std")]
fn place_player(store: &mut CsvStore, rng: &mut SmallRng, random: bool) -> anyhow::Result<()> {
    let layout = if random {
        random_fleet(rng)?
    } else {
        CliPlayer::stdio().place_ships(rng)?
    };
    store.save_layout(Side::Player, &layout)?;
    let fleet = ShipRegistry::from_layout(layout)?;
    println!(
        "\n{}",
        render_fleet(&fleet, &Default::default(), "Your fleet")
    );
    println!("Player ships saved to {}", store.layout_path(Side::Player).display());
    Ok(())
}

#[cfg(feature = "std")]
fn generate_bot(store: &mut CsvStore, rng: &mut SmallRng) -> anyhow::Result<()> {
    let layout = BotPlayer::new().place_ships(rng)?;
    store.save_layout(Side::Bot, &layout)?;
    println!("Bot ships saved to {}", store.layout_path(Side::Bot).display());
    Ok(())
}

#[cfg(feature = "std")]
fn play(store: &mut CsvStore, rng: &mut SmallRng) -> anyhow::Result<()> {
    let player_fleet = ShipRegistry::from_layout(store.load_layout(Side::Player)?)?;
    let bot_fleet = ShipRegistry::from_layout(store.load_layout(Side::Bot)?)?;
    let mut engine = GameEngine::new(player_fleet, bot_fleet);

    println!("\nGAME STARTED\n");
    let mut human = CliPlayer::stdio();
    let mut bot = BotPlayer::new();
    let status = play_session(&mut engine, &mut human, &mut bot, store, rng)?;

    println!(
        "\n{}",
        render_fleet(engine.player_fleet(), engine.bot_view(), "Your fleet")
    );
    match status {
        GameStatus::PlayerWon => println!("YOU WIN"),
        GameStatus::BotWon => println!("BOT WINS"),
        GameStatus::InProgress => {}
    }
    println!(
        "Turn history saved to {}",
        store.game_state_path().display()
    );
    Ok(())
}
