use std::collections::HashSet;

use rand::Rng;

use crate::field::GameField;
use crate::snake::{Position, Snake};

/// Food cell currently on the board. Replaced, never moved, when eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a random cell the snake does not occupy.
    ///
    /// Returns `None` when the snake covers every cell of the field.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field: GameField, snake: &Snake) -> Option<Self> {
        spawn_position(rng, field, snake).map(Self::at)
    }
}

/// Samples uniform cells until one is free of the snake.
///
/// Returns `None` without sampling when no free cell exists.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    field: GameField,
    snake: &Snake,
) -> Option<Position> {
    let covered = snake
        .segments()
        .filter(|segment| field.is_inside(**segment))
        .collect::<HashSet<_>>()
        .len();
    if covered >= field.total_cells() as usize {
        return None;
    }

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(field.width())),
            y: rng.gen_range(0..i32::from(field.height())),
        };

        if !snake.occupies(candidate) {
            log::trace!("food placed at ({}, {})", candidate.x, candidate.y);
            return Some(candidate);
        }
    }
}
