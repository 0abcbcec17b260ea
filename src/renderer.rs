use crate::config::{
    GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE, MESSAGE_LOST, MESSAGE_WON, PROGRESS_PREFIX,
};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;

/// Builds the text of one frame from immutable state.
///
/// Progress line first, then one row per field line, then the end message
/// once the game is over.
#[must_use]
pub fn frame_lines(state: &GameState) -> Vec<String> {
    let field = state.field();
    let mut lines = Vec::with_capacity(usize::from(field.height()) + 2);

    lines.push(progress_line(state));
    for y in 0..i32::from(field.height()) {
        lines.push(grid_row(state, y));
    }

    match state.status() {
        GameStatus::Lost => lines.push(MESSAGE_LOST.to_owned()),
        GameStatus::Won => lines.push(MESSAGE_WON.to_owned()),
        GameStatus::Ongoing => {}
    }

    lines
}

/// Formats `Snake length: {len}/{threshold}`.
#[must_use]
pub fn progress_line(state: &GameState) -> String {
    format!(
        "{PROGRESS_PREFIX}{}/{}",
        state.snake().len(),
        state.win_threshold()
    )
}

fn grid_row(state: &GameState, y: i32) -> String {
    let food = state.food().map(|food| food.position);

    (0..i32::from(state.field().width()))
        .map(|x| {
            let cell = Position { x, y };
            // Snake wins over food when both claim a cell.
            if state.snake().occupies(cell) {
                GLYPH_SNAKE
            } else if food == Some(cell) {
                GLYPH_FOOD
            } else {
                GLYPH_EMPTY
            }
        })
        .collect()
}
