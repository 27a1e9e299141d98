//! Game state for one human-versus-bot match.

use alloc::format;
use alloc::string::String;

use crate::board::Board;
use crate::common::{Cell, GameError, Outcome};
use crate::registry::{HitSet, ShipRegistry};
use crate::resolver::apply_shot;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    BotWon,
}

/// One persisted turn: both moves and the player's view of the bot board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSnapshot {
    pub turn: u32,
    /// `"row,col:outcome"`.
    pub player_move: String,
    /// `"row,col:outcome"`, empty when the game ended on the player's shot.
    pub bot_move: String,
    /// 100 symbols in row-major order.
    pub board: String,
}

/// Format a move as stored in [`TurnSnapshot`].
pub fn move_record(cell: Cell, outcome: Outcome) -> String {
    format!("{}:{}", cell, outcome)
}

/// What one side knows about, and has scored against, the other.
#[derive(Debug, Clone, Default)]
struct Attack {
    view: Board,
    hits: HitSet,
}

/// Both fleets plus each side's view and hit set.
#[derive(Debug, Clone)]
pub struct GameEngine {
    player_fleet: ShipRegistry,
    bot_fleet: ShipRegistry,
    /// The player's shots at the bot fleet.
    player: Attack,
    /// The bot's shots at the player fleet.
    bot: Attack,
    turn: u32,
}

impl GameEngine {
    /// Start a game with both fleets placed and every cell unknown.
    pub fn new(player_fleet: ShipRegistry, bot_fleet: ShipRegistry) -> Self {
        Self {
            player_fleet,
            bot_fleet,
            player: Attack::default(),
            bot: Attack::default(),
            turn: 1,
        }
    }

    /// Resolve a player shot against the bot fleet.
    pub fn player_shoot(&mut self, cell: Cell) -> Result<Outcome, GameError> {
        apply_shot(
            &mut self.player.view,
            cell,
            &self.bot_fleet,
            &mut self.player.hits,
        )
    }

    /// Resolve a bot shot against the player fleet.
    pub fn bot_shoot(&mut self, cell: Cell) -> Result<Outcome, GameError> {
        apply_shot(
            &mut self.bot.view,
            cell,
            &self.player_fleet,
            &mut self.bot.hits,
        )
    }

    /// Player is checked first since the player shoots first in a turn.
    pub fn status(&self) -> GameStatus {
        if self.bot_fleet.all_destroyed(&self.player.hits) {
            GameStatus::PlayerWon
        } else if self.player_fleet.all_destroyed(&self.bot.hits) {
            GameStatus::BotWon
        } else {
            GameStatus::InProgress
        }
    }

    /// The player's view of the bot board.
    pub fn player_view(&self) -> &Board {
        &self.player.view
    }

    /// The bot's view of the player board.
    pub fn bot_view(&self) -> &Board {
        &self.bot.view
    }

    pub fn player_hits(&self) -> &HitSet {
        &self.player.hits
    }

    pub fn bot_hits(&self) -> &HitSet {
        &self.bot.hits
    }

    pub fn player_fleet(&self) -> &ShipRegistry {
        &self.player_fleet
    }

    pub fn bot_fleet(&self) -> &ShipRegistry {
        &self.bot_fleet
    }

    /// 1-based number of the turn in progress.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Snapshot of the current turn, to be persisted once both moves are in.
    pub fn snapshot(&self, player_move: String, bot_move: String) -> TurnSnapshot {
        TurnSnapshot {
            turn: self.turn,
            player_move,
            bot_move,
            board: self.player.view.flatten(),
        }
    }

    pub fn next_turn(&mut self) {
        self.turn += 1;
    }
}
