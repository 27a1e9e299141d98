//! Fixed game rules and file locations.

/// Side length of the square grid.
pub const BOARD_SIZE: u8 = 10;

/// Ship sizes in placement order.
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
pub const NUM_SHIPS: usize = 10;

/// Default directory holding the persisted layouts and turn history.
pub const DEFAULT_DATA_DIR: &str = "data";
pub const PLAYER_SHIPS_FILE: &str = "player_ships.csv";
pub const BOT_SHIPS_FILE: &str = "bot_ships.csv";
pub const GAME_STATE_FILE: &str = "game_state.csv";

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "SEABATTLE_LOG";
