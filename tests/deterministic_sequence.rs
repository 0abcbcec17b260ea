use std::io;
use std::time::Duration;

use grid_snake::field::GameField;
use grid_snake::food::Food;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::game_loop::{self, LoopExit};
use grid_snake::input::{Direction, Key, KeySource};
use grid_snake::snake::{Position, Snake};
use grid_snake::terminal_runtime::Screen;
use rand::SeedableRng;
use rand::rngs::StdRng;

struct NoKeys;

impl KeySource for NoKeys {
    fn key_available(&mut self) -> io::Result<bool> {
        Ok(false)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(Key::Other)
    }
}

#[derive(Default)]
struct TextScreen {
    current: Vec<String>,
    frames: usize,
}

impl Screen for TextScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.current.clear();
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.current.push(line.to_owned());
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}

fn field(width: u16, height: u16) -> GameField {
    GameField::new(width, height).expect("test field should be valid")
}

#[test]
fn snake_reaches_food_across_the_top_row() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::from_parts(
        field(5, 5),
        Snake::new(Position { x: 0, y: 0 }, Direction::Right),
        Some(Food::at(Position { x: 4, y: 0 })),
    );

    for _ in 0..3 {
        state = state.step(None, &mut rng).into_state();
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.status(), GameStatus::Ongoing);
    }

    state = state.step(None, &mut rng).into_state();
    assert_eq!(state.snake().head(), Position { x: 4, y: 0 });
    assert_eq!(state.snake().len(), 2);
    assert_eq!(state.status(), GameStatus::Ongoing);

    let food = state.food().expect("new food is placed");
    assert!(!state.snake().occupies(food.position));
    assert!(state.field().is_inside(food.position));
}

#[test]
fn running_off_a_small_field_ends_the_loop() {
    let state = GameState::from_parts(
        field(3, 3),
        Snake::new(Position { x: 1, y: 1 }, Direction::Right),
        Some(Food::at(Position { x: 0, y: 2 })),
    );
    let mut screen = TextScreen::default();
    let mut rng = StdRng::seed_from_u64(7);

    let exit = game_loop::run(state, &mut NoKeys, &mut screen, &mut rng, Duration::ZERO)
        .expect("loop should not fail");

    let LoopExit::Finished(last) = exit else {
        panic!("game should finish, not quit");
    };
    assert_eq!(last.status(), GameStatus::Lost);
    assert_eq!(last.snake().head(), Position { x: 3, y: 1 });
    assert_eq!(screen.frames, 3);
    assert_eq!(
        screen.current,
        vec!["Snake length: 1/2.6999999999999997", "...", "...", "F..", "Game Over!"]
    );
}

#[test]
fn win_is_declared_on_the_tick_length_hits_threshold() {
    // 4x5 field: 20 cells * 0.3 = 6.
    let field = field(4, 5);
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::from_parts(
        field,
        Snake::new(Position { x: 0, y: 0 }, Direction::Right),
        None,
    );

    let path = [
        (None, Position { x: 1, y: 0 }),
        (None, Position { x: 2, y: 0 }),
        (None, Position { x: 3, y: 0 }),
        (Some(Direction::Down), Position { x: 3, y: 1 }),
        (Some(Direction::Down), Position { x: 3, y: 2 }),
    ];

    for (index, (turn, food)) in path.into_iter().enumerate() {
        // Put each food directly in front of the head.
        state = GameState::from_parts(field, state.snake().clone(), Some(Food::at(food)));
        let tick = state.step(turn, &mut rng);
        assert_eq!(tick.state().snake().len(), index + 2);

        let expected = if index + 2 == 6 {
            GameStatus::Won
        } else {
            GameStatus::Ongoing
        };
        assert_eq!(tick.status(), expected);
        state = tick.into_state();
    }

    assert_eq!(state.status(), GameStatus::Won);
    let frozen = state.step(Some(Direction::Left), &mut rng).into_state();
    assert_eq!(frozen, state);
}
