#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Cell, GameError, Outcome},
    input::{parse_move, parse_ship},
    placement::{FleetBuilder, Layout},
    registry::{HitSet, ShipRegistry},
    ui::render_board,
    BOARD_SIZE,
};

use crate::player::Player;

/// Interactive player reading one line per request from `input` and writing
/// prompts and boards to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "You"
    }

    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Layout, GameError> {
        self.say(&format!(
            "Place your ships on a {0}x{0} board (rows & cols: 0-{1}).",
            BOARD_SIZE,
            BOARD_SIZE - 1
        ));
        self.say("Enter cells like '0,0 0,1 0,2'. Press enter for random placement.");
        let mut fleet = FleetBuilder::new();
        while let Some(size) = fleet.next_size() {
            let line = self.prompt(&format!("Enter ship of size {}: ", size))?;
            let placed = if line.is_empty() {
                fleet.add_random(rng)
            } else {
                parse_ship(&line).and_then(|cells| fleet.add(cells))
            };
            if let Err(e) = placed {
                warn!("rejected placement '{}': {}", line, e);
                self.say(&format!("{}", e));
            }
        }
        Ok(fleet.into_layout())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: &Board,
        incoming: &Board,
    ) -> Result<Cell, GameError> {
        let boards = format!(
            "\n{}\n{}",
            render_board(view, "Your view of the bot board"),
            render_board(incoming, "Bot view of your board")
        );
        self.say(&boards);
        loop {
            let line = self.prompt("Enter your move (row,col): ")?;
            match parse_move(&line) {
                Ok(cell) => return Ok(cell),
                Err(e) => {
                    warn!("rejected move '{}': {}", line, e);
                    self.say(&format!("{}", e));
                }
            }
        }
    }

    fn handle_shot_result(
        &mut self,
        cell: Cell,
        outcome: Outcome,
        opponent: &ShipRegistry,
        hits: &HitSet,
    ) {
        self.say(&format!("You shoot at {}: {}", cell, outcome));
        if let Some(id) = opponent.ship_at(cell) {
            if opponent.is_destroyed(id, hits) {
                let left = opponent.remaining(hits);
                self.say(&format!("Ship destroyed! {} left.", left));
            }
        }
    }

    fn handle_opponent_shot(&mut self, cell: Cell, outcome: Outcome) {
        self.say(&format!("Bot shoots at {}: {}", cell, outcome));
    }
}
