//! Bot targeting: hunt at random, probe around a first hit, then follow the
//! line once two hits fix the orientation.
//!
//! The state is a plain value. [`TargetingState::choose_shot`] reads it to
//! pick the next cell and [`TargetingState::observe`] consumes it together
//! with the shot outcome to produce the next state.
//!
//! Hits are tracked in one list for whichever ship is currently being worked
//! on. Ships never touch, so probes around a live hit cannot reach a second
//! ship. Misses never reset the search; only destroying the ship does.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{Cell, GameError, Outcome};
use crate::registry::{HitSet, ShipRegistry};
use crate::ship::Orientation;

/// Which rule picks the next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No live lead: any unknown cell.
    #[default]
    Random,
    /// One live hit: its unknown orthogonal neighbors.
    Smart,
    /// Two or more live hits: the cells extending the line at either end.
    Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetingState {
    mode: Mode,
    pending_hits: Vec<Cell>,
    axis: Option<Orientation>,
}

impl TargetingState {
    /// Hunting state with no recorded hits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Hits on the ship currently being tracked, in the order they landed.
    pub fn pending_hits(&self) -> &[Cell] {
        &self.pending_hits
    }

    pub fn axis(&self) -> Option<Orientation> {
        self.axis
    }

    /// Cells the current mode would like to shoot. Empty in `Random` mode or
    /// when the lead is exhausted.
    pub fn candidates(&self, view: &Board) -> Vec<Cell> {
        match (self.mode, self.pending_hits.first(), self.axis) {
            (Mode::Smart, Some(&hit), _) => smart_candidates(hit, view),
            (Mode::Axis, Some(_), Some(axis)) => axis_candidates(&self.pending_hits, axis, view),
            _ => Vec::new(),
        }
    }

    /// Pick the next shot against `view`.
    ///
    /// Falls back to a uniformly random unknown cell when the current mode has
    /// no candidate. Fails only when no unknown cell is left.
    pub fn choose_shot<R: Rng + ?Sized>(&self, view: &Board, rng: &mut R) -> Result<Cell, GameError> {
        let candidates = self.candidates(view);
        if !candidates.is_empty() {
            let cell = candidates[rng.random_range(0..candidates.len())];
            debug!("{:?} mode picks {} from {:?}", self.mode, cell, candidates);
            return Ok(cell);
        }
        if self.mode != Mode::Random {
            debug!("{:?} mode has no candidates, falling back to random", self.mode);
        }
        random_unknown(view, rng).ok_or(GameError::NoTargetsLeft)
    }

    /// Advance the state after the bot fired at `cell`.
    ///
    /// `registry` and `hits` are the opponent fleet and the bot's hit set
    /// after the shot was resolved.
    pub fn observe(
        mut self,
        cell: Cell,
        outcome: Outcome,
        registry: &ShipRegistry,
        hits: &HitSet,
    ) -> Self {
        if outcome == Outcome::Miss {
            return self;
        }

        self.pending_hits.push(cell);
        match self.pending_hits.len() {
            1 => self.mode = Mode::Smart,
            2 => {
                let axis = Orientation::between(self.pending_hits[0], self.pending_hits[1]);
                self.axis = Some(axis);
                self.mode = Mode::Axis;
            }
            _ => {}
        }

        let destroyed = registry
            .ship_at(cell)
            .is_some_and(|id| registry.is_destroyed(id, hits));
        if destroyed {
            debug!("tracked ship destroyed at {}, back to random", cell);
            return Self::new();
        }
        debug!(
            "hit at {}: mode {:?}, axis {:?}, {} pending",
            cell,
            self.mode,
            self.axis,
            self.pending_hits.len()
        );
        self
    }
}

/// Unknown orthogonal neighbors of `hit`.
pub fn smart_candidates(hit: Cell, view: &Board) -> Vec<Cell> {
    Board::neighbors4(hit)
        .filter(|&cell| view.is_unknown(cell))
        .collect()
}

/// Unknown cells just beyond either end of `hits` along `axis`.
pub fn axis_candidates(hits: &[Cell], axis: Orientation, view: &Board) -> Vec<Cell> {
    let mut sorted = hits.to_vec();
    sorted.sort_unstable();
    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    let ends = match axis {
        Orientation::Horizontal => [
            first.offset(0, -1),
            Cell::new(first.row, last.col).offset(0, 1),
        ],
        Orientation::Vertical => [
            first.offset(-1, 0),
            Cell::new(last.row, first.col).offset(1, 0),
        ],
    };
    ends.into_iter()
        .flatten()
        .filter(|&cell| view.is_unknown(cell))
        .collect()
}

/// Uniformly random unknown cell, or `None` when the board is fully resolved.
pub fn random_unknown<R: Rng + ?Sized>(view: &Board, rng: &mut R) -> Option<Cell> {
    let unknown = view.unknown_cells();
    if unknown.is_empty() {
        return None;
    }
    Some(unknown[rng.random_range(0..unknown.len())])
}
