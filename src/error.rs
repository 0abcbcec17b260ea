use std::io;

use thiserror::Error;

/// Errors that stop a game before or while it runs.
///
/// Leaving the field and biting the body are not errors; they are
/// [`GameStatus::Lost`](crate::game::GameStatus::Lost) transitions.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    EmptyField { width: u16, height: u16 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, GameError>;
