#![cfg(feature = "std")]

//! Flat-file storage of fleet layouts and turn history.
//!
//! Layouts are CSV tables `ship_id,row,col` with one row per occupied cell.
//! The turn history is a CSV table `turn,player_move,bot_move,board` that is
//! only ever appended to.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Cell, GameError},
    config::{BOT_SHIPS_FILE, GAME_STATE_FILE, PLAYER_SHIPS_FILE},
    game::TurnSnapshot,
    placement::{validate_layout, Layout},
};

/// Whose fleet a layout belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    fn file_name(self) -> &'static str {
        match self {
            Side::Player => PLAYER_SHIPS_FILE,
            Side::Bot => BOT_SHIPS_FILE,
        }
    }
}

/// Storage failures. Fatal to the game session.
#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Csv(csv::Error),
    /// No layout has been saved for this side.
    MissingLayout(String),
    /// The stored layout breaks the placement rules.
    InvalidLayout(GameError),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "I/O error: {}", e),
            PersistenceError::Csv(e) => write!(f, "CSV error: {}", e),
            PersistenceError::MissingLayout(what) => write!(f, "No ship layout found: {}", what),
            PersistenceError::InvalidLayout(e) => write!(f, "Stored ship layout is invalid: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Csv(e) => Some(e),
            PersistenceError::InvalidLayout(e) => Some(e),
            PersistenceError::MissingLayout(_) => None,
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(err: io::Error) -> Self {
        PersistenceError::Io(err)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(err: csv::Error) -> Self {
        PersistenceError::Csv(err)
    }
}

/// Loads and saves fleet layouts.
pub trait LayoutStore {
    fn load_layout(&self, side: Side) -> Result<Layout, PersistenceError>;
    fn save_layout(&mut self, side: Side, layout: &[Vec<Cell>]) -> Result<(), PersistenceError>;
}

/// Receives one snapshot per completed turn.
pub trait TurnSink {
    fn append_turn(&mut self, snapshot: &TurnSnapshot) -> Result<(), PersistenceError>;
}

/// One occupied cell of a stored layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub ship_id: usize,
    pub row: usize,
    pub col: usize,
}

/// Flatten a layout into records, ship ids in layout order.
pub fn layout_records(layout: &[Vec<Cell>]) -> Vec<LayoutRecord> {
    layout
        .iter()
        .enumerate()
        .flat_map(|(ship_id, cells)| {
            cells.iter().map(move |c| LayoutRecord {
                ship_id,
                row: c.row,
                col: c.col,
            })
        })
        .collect()
}

/// Group records by `ship_id` (ascending) and check the placement rules.
pub fn layout_from_records<I>(records: I) -> Result<Layout, PersistenceError>
where
    I: IntoIterator<Item = LayoutRecord>,
{
    let mut groups: BTreeMap<usize, Vec<Cell>> = BTreeMap::new();
    for rec in records {
        groups
            .entry(rec.ship_id)
            .or_default()
            .push(Cell::new(rec.row, rec.col));
    }
    let layout: Layout = groups.into_values().collect();
    validate_layout(&layout).map_err(PersistenceError::InvalidLayout)?;
    Ok(layout)
}

/// CSV files inside one data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn layout_path(&self, side: Side) -> PathBuf {
        self.dir.join(side.file_name())
    }

    pub fn game_state_path(&self) -> PathBuf {
        self.dir.join(GAME_STATE_FILE)
    }

    /// Read back every snapshot appended so far.
    pub fn load_turns(&self) -> Result<Vec<TurnSnapshot>, PersistenceError> {
        let mut reader = csv::Reader::from_path(self.game_state_path())?;
        let turns = reader.deserialize().collect::<Result<Vec<_>, _>>()?;
        Ok(turns)
    }
}

impl LayoutStore for CsvStore {
    fn load_layout(&self, side: Side) -> Result<Layout, PersistenceError> {
        let path = self.layout_path(side);
        if !path.exists() {
            return Err(PersistenceError::MissingLayout(path.display().to_string()));
        }
        let mut reader = csv::Reader::from_path(&path)?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<LayoutRecord>, _>>()?;
        debug!("read {} layout records from {}", records.len(), path.display());
        layout_from_records(records)
    }

    fn save_layout(&mut self, side: Side, layout: &[Vec<Cell>]) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.layout_path(side);
        let mut writer = csv::Writer::from_path(&path)?;
        for rec in layout_records(layout) {
            writer.serialize(rec)?;
        }
        writer.flush()?;
        info!("{:?} ships saved to {}", side, path.display());
        Ok(())
    }
}

impl TurnSink for CsvStore {
    fn append_turn(&mut self, snapshot: &TurnSnapshot) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.game_state_path();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let needs_header = file.metadata()?.len() == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(snapshot)?;
        writer.flush()?;
        debug!("turn {} appended to {}", snapshot.turn, path.display());
        Ok(())
    }
}

/// In-memory store for tests and simulations.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    layouts: HashMap<Side, Layout>,
    turns: Vec<TurnSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[TurnSnapshot] {
        &self.turns
    }
}

impl LayoutStore for MemoryStore {
    fn load_layout(&self, side: Side) -> Result<Layout, PersistenceError> {
        let layout = self
            .layouts
            .get(&side)
            .cloned()
            .ok_or_else(|| PersistenceError::MissingLayout(format!("{:?}", side)))?;
        validate_layout(&layout).map_err(PersistenceError::InvalidLayout)?;
        Ok(layout)
    }

    fn save_layout(&mut self, side: Side, layout: &[Vec<Cell>]) -> Result<(), PersistenceError> {
        self.layouts.insert(side, layout.to_vec());
        Ok(())
    }
}

impl TurnSink for MemoryStore {
    fn append_turn(&mut self, snapshot: &TurnSnapshot) -> Result<(), PersistenceError> {
        self.turns.push(snapshot.clone());
        Ok(())
    }
}
