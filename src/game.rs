use rand::Rng;

use crate::field::{GameField, WinThreshold};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// High-level state of one game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::Ongoing
    }
}

/// Immutable snapshot of a game between two ticks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    field: GameField,
    snake: Snake,
    food: Option<Food>,
    status: GameStatus,
}

/// Result of advancing a snapshot by one tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Tick {
    Ongoing(GameState),
    Won(GameState),
    Lost(GameState),
}

impl Tick {
    fn from_state(state: GameState) -> Self {
        match state.status {
            GameStatus::Ongoing => Self::Ongoing(state),
            GameStatus::Won => Self::Won(state),
            GameStatus::Lost => Self::Lost(state),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state().status
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        match self {
            Self::Ongoing(state) | Self::Won(state) | Self::Lost(state) => state,
        }
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        match self {
            Self::Ongoing(state) | Self::Won(state) | Self::Lost(state) => state,
        }
    }
}

impl GameState {
    /// Starts a game with a one-cell snake at the origin heading right and
    /// food on a random free cell.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(field: GameField, rng: &mut R) -> Self {
        let snake = Snake::new(Position { x: 0, y: 0 }, Direction::Right);
        let food = Food::spawn(rng, field, &snake);

        Self::from_parts(field, snake, food)
    }

    /// Assembles an ongoing game from explicit parts, for scenarios and replays.
    #[must_use]
    pub fn from_parts(field: GameField, snake: Snake, food: Option<Food>) -> Self {
        Self {
            field,
            snake,
            food,
            status: GameStatus::Ongoing,
        }
    }

    #[must_use]
    pub fn field(&self) -> GameField {
        self.field
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Food> {
        self.food
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn win_threshold(&self) -> WinThreshold {
        self.field.win_threshold()
    }

    /// Advances the game by one tick.
    ///
    /// `turn` is the heading read from input this tick, if any. A terminal
    /// snapshot is returned unchanged.
    #[must_use]
    pub fn step<R: Rng + ?Sized>(&self, turn: Option<Direction>, rng: &mut R) -> Tick {
        if self.status.is_terminal() {
            return Tick::from_state(self.clone());
        }

        let mut snake = self.snake.clone();
        if let Some(direction) = turn {
            snake.set_direction(direction);
        }
        snake.move_forward();

        let head = snake.head();
        let mut food = self.food;
        if food.is_some_and(|food| food.position == head) {
            snake.grow();
            log::debug!("food eaten at ({}, {}), length {}", head.x, head.y, snake.len());
            food = Food::spawn(rng, self.field, &snake);
        }

        let status = if !self.field.is_inside(head) || snake.is_self_eating() {
            GameStatus::Lost
        } else if self.field.win_threshold().is_reached(snake.len()) {
            GameStatus::Won
        } else {
            GameStatus::Ongoing
        };

        Tick::from_state(Self {
            field: self.field,
            snake,
            food,
            status,
        })
    }
}
