use core::mem;

use crate::{
    board::Board,
    common::{Cell, GameError, Outcome},
    placement::{random_fleet, Layout},
    registry::{HitSet, ShipRegistry},
    targeting::TargetingState,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Bot player: random fleet, hunt/target shooting.
#[derive(Debug, Default)]
pub struct BotPlayer {
    targeting: TargetingState,
}

impl BotPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targeting(&self) -> &TargetingState {
        &self.targeting
    }
}

impl Player for BotPlayer {
    fn name(&self) -> &str {
        "Bot"
    }

    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Layout, GameError> {
        random_fleet(rng)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Board,
        _incoming: &Board,
    ) -> Result<Cell, GameError> {
        self.targeting.choose_shot(view, rng)
    }

    fn handle_shot_result(
        &mut self,
        cell: Cell,
        outcome: Outcome,
        opponent: &ShipRegistry,
        hits: &HitSet,
    ) {
        let state = mem::take(&mut self.targeting);
        self.targeting = state.observe(cell, outcome, opponent, hits);
    }
}
