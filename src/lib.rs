#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod persistence;
mod registry;
pub mod resolver;
#[cfg(feature = "std")]
mod session;
mod ship;
pub mod targeting;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, CellSet};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::{parse_move, parse_ship};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{random_fleet, validate_layout, validate_ship, FleetBuilder, Layout};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use persistence::{CsvStore, LayoutStore, MemoryStore, PersistenceError, Side, TurnSink};
pub use registry::*;
pub use resolver::apply_shot;
#[cfg(feature = "std")]
pub use session::play_session;
pub use ship::*;
pub use targeting::{Mode, TargetingState};
