use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One key read from the player.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Other,
}

impl Key {
    /// Returns the heading an arrow key selects.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Quit | Self::Other => None,
        }
    }
}

/// Non-blocking key source polled once per tick.
pub trait KeySource {
    /// Returns true when a key can be read without blocking.
    fn key_available(&mut self) -> io::Result<bool>;

    /// Reads exactly one pending key.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Reads keys from the terminal through crossterm's event queue.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn key_available(&mut self) -> io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(match event::read()? {
            Event::Key(key_event) => map_key_event(key_event),
            _ => Key::Other,
        })
    }
}

/// Maps a crossterm key event to a game key.
///
/// Releases and repeats map to [`Key::Other`] so one physical press turns
/// the snake once.
#[must_use]
pub fn map_key_event(key_event: KeyEvent) -> Key {
    if key_event.kind != KeyEventKind::Press {
        return Key::Other;
    }

    match key_event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Key::Quit,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        _ => Key::Other,
    }
}
