use std::fmt;

use crate::config::WIN_COVERAGE;
use crate::error::{GameError, Result};
use crate::snake::Position;

/// Fixed rectangular play area. Both dimensions are positive.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameField {
    width: u16,
    height: u16,
}

impl GameField {
    /// Creates a field, rejecting a zero width or height.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyField { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns true when `position` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn is_inside(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }

    /// Returns the total number of cells in the field.
    #[must_use]
    pub fn total_cells(self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Returns the snake length that wins on this field.
    #[must_use]
    pub fn win_threshold(self) -> WinThreshold {
        WinThreshold(f64::from(self.total_cells()) * WIN_COVERAGE)
    }
}

/// Real-valued target length: cell count times the win coverage.
///
/// The product is kept as a float and compared for exact equality, so a
/// field whose product has a fractional part (5x5 gives 7.5) is never won.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinThreshold(f64);

impl WinThreshold {
    /// Returns true when a snake of `len` cells hits the threshold exactly.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    pub fn is_reached(self, len: usize) -> bool {
        len as f64 == self.0
    }
}

impl fmt::Display for WinThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
