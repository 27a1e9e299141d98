#![cfg(feature = "std")]

//! The turn controller: alternate shots until one fleet is gone.

use log::info;
use rand::rngs::SmallRng;

use crate::{
    game::{move_record, GameEngine, GameStatus},
    persistence::TurnSink,
    player::Player,
};

/// Play `engine` to the end.
///
/// Each turn the human shoots first; if that sinks the last bot ship the turn
/// is persisted with an empty bot move and the game ends. Otherwise the bot
/// shoots, learns from the outcome, and the turn is persisted.
pub fn play_session<H, B, S>(
    engine: &mut GameEngine,
    human: &mut H,
    bot: &mut B,
    sink: &mut S,
    rng: &mut SmallRng,
) -> anyhow::Result<GameStatus>
where
    H: Player + ?Sized,
    B: Player + ?Sized,
    S: TurnSink + ?Sized,
{
    info!("game started");
    loop {
        let target = human.select_target(rng, engine.player_view(), engine.bot_view())?;
        let outcome = engine.player_shoot(target)?;
        info!("turn {}: {} shot {} -> {}", engine.turn(), human.name(), target, outcome);
        human.handle_shot_result(target, outcome, engine.bot_fleet(), engine.player_hits());
        bot.handle_opponent_shot(target, outcome);
        let player_move = move_record(target, outcome);

        if engine.status() == GameStatus::PlayerWon {
            sink.append_turn(&engine.snapshot(player_move, String::new()))?;
            info!("{} won on turn {}", human.name(), engine.turn());
            return Ok(GameStatus::PlayerWon);
        }

        let target = bot.select_target(rng, engine.bot_view(), engine.player_view())?;
        let outcome = engine.bot_shoot(target)?;
        info!("turn {}: {} shot {} -> {}", engine.turn(), bot.name(), target, outcome);
        bot.handle_shot_result(target, outcome, engine.player_fleet(), engine.bot_hits());
        human.handle_opponent_shot(target, outcome);

        sink.append_turn(&engine.snapshot(player_move, move_record(target, outcome)))?;
        if engine.status() == GameStatus::BotWon {
            info!("{} won on turn {}", bot.name(), engine.turn());
            return Ok(GameStatus::BotWon);
        }
        engine.next_turn();
    }
}
