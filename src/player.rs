use crate::{
    board::Board,
    common::{Cell, GameError, Outcome},
    placement::Layout,
    registry::{HitSet, ShipRegistry},
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A player places its fleet, picks targets, and is told how every shot
/// turned out.
pub trait Player {
    /// Short label used in messages, e.g. `"You"` or `"Bot"`.
    fn name(&self) -> &str;

    /// Produce a complete fleet layout.
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Layout, GameError>;

    /// Choose the next target.
    ///
    /// `view` is this player's view of the opponent board; `incoming` is the
    /// opponent's view of this player's board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Board,
        incoming: &Board,
    ) -> Result<Cell, GameError>;

    /// Inform the player of the result of its last shot. `opponent` and
    /// `hits` reflect the state after the shot.
    fn handle_shot_result(
        &mut self,
        _cell: Cell,
        _outcome: Outcome,
        _opponent: &ShipRegistry,
        _hits: &HitSet,
    ) {
    }

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _cell: Cell, _outcome: Outcome) {}
}
