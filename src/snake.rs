use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so that a head stepping off the top or left edge stays
/// representable until the game notices it left the field.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// How the head touching the tail cell is judged.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TailOverlap {
    /// Head on the tail cell is not a collision.
    Allowed,
    /// Head on the tail cell counts like any other body cell.
    Collides,
}

/// Tail policy used by [`Snake::is_self_eating`].
pub const SELF_COLLISION_TAIL_OVERLAP: TailOverlap = TailOverlap::Allowed;

/// Snake body (front is head) and current heading.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Sets the heading for the next move. Reversals are accepted as-is.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Shifts the body one cell forward, keeping its length.
    pub fn move_forward(&mut self) {
        let next_head = self.head().step(self.direction);

        self.body.push_front(next_head);
        let _ = self.body.pop_back();
    }

    /// Appends a copy of the tail cell.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }

    /// Returns true if the head hits its own body under the game's tail policy.
    #[must_use]
    pub fn is_self_eating(&self) -> bool {
        self.head_hits_body(SELF_COLLISION_TAIL_OVERLAP)
    }

    /// Returns true if the head equals a non-head segment, judging the tail
    /// cell by `tail`.
    #[must_use]
    pub fn head_hits_body(&self, tail: TailOverlap) -> bool {
        let head = self.head();
        let checked = match tail {
            TailOverlap::Allowed => self.body.len().saturating_sub(2),
            TailOverlap::Collides => self.body.len().saturating_sub(1),
        };

        self.body
            .iter()
            .skip(1)
            .take(checked)
            .any(|segment| *segment == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Position, Snake, TailOverlap};
    use crate::input::Direction;

    fn pos(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(pos(5, 5), Direction::Right);

        snake.move_forward();

        assert_eq!(snake.head(), pos(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn each_direction_offsets_the_head() {
        let cases = [
            (Direction::Up, pos(5, 4)),
            (Direction::Down, pos(5, 6)),
            (Direction::Left, pos(4, 5)),
            (Direction::Right, pos(6, 5)),
        ];

        for (direction, expected) in cases {
            let mut snake = Snake::new(pos(5, 5), direction);
            snake.move_forward();
            assert_eq!(snake.head(), expected, "moving {direction:?}");
        }
    }

    #[test]
    fn move_has_no_bounds_check() {
        let mut snake = Snake::new(pos(0, 0), Direction::Left);

        snake.move_forward();

        assert_eq!(snake.head(), pos(-1, 0));
    }

    #[test]
    fn grow_duplicates_the_tail() {
        let mut snake = Snake::from_segments(vec![pos(2, 0), pos(1, 0)], Direction::Right);

        snake.grow();

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segments, vec![pos(2, 0), pos(1, 0), pos(1, 0)]);
    }

    #[test]
    fn reversal_is_accepted_and_bites_the_body() {
        let mut snake = Snake::from_segments(
            vec![pos(3, 1), pos(2, 1), pos(1, 1), pos(0, 1)],
            Direction::Right,
        );

        snake.set_direction(Direction::Left);
        snake.move_forward();

        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), pos(2, 1));
        assert!(snake.is_self_eating());
    }

    #[test]
    fn head_on_interior_cell_is_self_eating() {
        let snake = Snake::from_segments(
            vec![pos(1, 1), pos(1, 1), pos(2, 1), pos(3, 1)],
            Direction::Left,
        );

        assert!(snake.is_self_eating());
    }

    #[test]
    fn head_on_tail_only_is_not_self_eating() {
        let snake = Snake::from_segments(
            vec![pos(1, 1), pos(2, 1), pos(2, 2), pos(1, 2), pos(1, 1)],
            Direction::Up,
        );

        assert!(!snake.is_self_eating());
        assert!(snake.head_hits_body(TailOverlap::Collides));
    }

    #[test]
    fn short_snakes_never_self_eat() {
        let single = Snake::new(pos(0, 0), Direction::Right);
        let stacked = Snake::from_segments(vec![pos(0, 0), pos(0, 0)], Direction::Right);

        assert!(!single.is_self_eating());
        assert!(!stacked.is_self_eating());
    }

    fn arb_body() -> impl Strategy<Value = Vec<Position>> {
        prop::collection::vec((-3i32..3, -3i32..3).prop_map(|(x, y)| pos(x, y)), 1..12)
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_move_is_a_pure_shift(body in arb_body(), direction in arb_direction()) {
            let mut snake = Snake::from_segments(body.clone(), direction);
            snake.move_forward();

            let moved: Vec<_> = snake.segments().copied().collect();
            prop_assert_eq!(moved.len(), body.len());
            prop_assert_eq!(moved[0], body[0].step(direction));
            for index in 1..moved.len() {
                prop_assert_eq!(moved[index], body[index - 1]);
            }
        }

        #[test]
        fn prop_self_eating_checks_interior_cells_only(body in arb_body()) {
            let snake = Snake::from_segments(body.clone(), Direction::Right);
            let head = body[0];
            let interior_hit = body.len() > 2 && body[1..body.len() - 1].contains(&head);

            prop_assert_eq!(snake.is_self_eating(), interior_hit);
        }
    }
}
