use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::error::Result;
use crate::game::{GameState, Tick};
use crate::input::{Key, KeySource};
use crate::renderer;
use crate::terminal_runtime::Screen;

/// How the game loop ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LoopExit {
    /// The game reached `Won` or `Lost`.
    Finished(GameState),
    /// The player pressed a quit key while the game was ongoing.
    Quit(GameState),
}

impl LoopExit {
    #[must_use]
    pub fn state(&self) -> &GameState {
        match self {
            Self::Finished(state) | Self::Quit(state) => state,
        }
    }
}

/// Runs ticks until the game ends or the player quits.
///
/// The starting board is drawn once before the first tick. Each tick then
/// polls at most one key, advances the state, draws the frame and sleeps
/// `tick_interval` unless the game just ended.
pub fn run<K, S, R>(
    mut state: GameState,
    keys: &mut K,
    screen: &mut S,
    rng: &mut R,
    tick_interval: Duration,
) -> Result<LoopExit>
where
    K: KeySource + ?Sized,
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    draw(screen, &state)?;
    if state.status().is_terminal() {
        return Ok(LoopExit::Finished(state));
    }

    loop {
        let mut turn = None;
        if keys.key_available()? {
            match keys.read_key()? {
                Key::Quit => {
                    log::info!("player quit at length {}", state.snake().len());
                    return Ok(LoopExit::Quit(state));
                }
                key => turn = key.direction(),
            }
        }

        let tick = state.step(turn, rng);
        draw(screen, tick.state())?;

        match tick {
            Tick::Ongoing(next) => state = next,
            Tick::Won(last) | Tick::Lost(last) => {
                log::info!(
                    "game ended {:?} at length {}",
                    last.status(),
                    last.snake().len()
                );
                return Ok(LoopExit::Finished(last));
            }
        }

        if !tick_interval.is_zero() {
            thread::sleep(tick_interval);
        }
    }
}

/// Clears the screen and writes one full frame.
pub fn draw<S: Screen + ?Sized>(screen: &mut S, state: &GameState) -> Result<()> {
    screen.clear()?;
    for line in renderer::frame_lines(state) {
        screen.write_line(&line)?;
    }
    screen.present()?;
    Ok(())
}
