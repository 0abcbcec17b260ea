use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::error::Result;
use crate::field::GameField;

/// Delay between two gameplay ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

/// Share of the field the snake must cover to win.
pub const WIN_COVERAGE: f64 = 0.3;

/// Cell glyph for any snake-occupied cell.
pub const GLYPH_SNAKE: char = 'S';

/// Cell glyph for the food cell.
pub const GLYPH_FOOD: char = 'F';

/// Cell glyph for an empty cell.
pub const GLYPH_EMPTY: char = '.';

pub const PROGRESS_PREFIX: &str = "Snake length: ";
pub const MESSAGE_LOST: &str = "Game Over!";
pub const MESSAGE_WON: &str = "You won!";

/// Level written to `--log-file`; trace includes every food placement.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;

/// Validated runtime settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub field: GameField,
    /// Seed for food placement; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Builds settings from raw command-line values.
    ///
    /// Rejects fields with a zero dimension.
    pub fn new(
        width: u16,
        height: u16,
        seed: Option<u64>,
        tick_interval_ms: u64,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let field = GameField::new(width, height)?;
        Ok(Self {
            field,
            seed,
            tick_interval: Duration::from_millis(tick_interval_ms),
            log_file,
        })
    }
}
