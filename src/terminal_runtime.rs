use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Line-oriented output surface the game loop draws frames on.
pub trait Screen {
    /// Erases the previous frame.
    fn clear(&mut self) -> io::Result<()>;

    /// Appends one line to the current frame.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Makes the lines written since the last `clear` visible.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Leaves raw mode and the alternate screen.
///
/// Safe to call more than once; the panic hook uses it too.
pub fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// [`Screen`] that buffers a frame and draws it as one ratatui paragraph.
///
/// Opened on the real terminal it owns raw mode and the alternate screen and
/// restores both when dropped.
pub struct TerminalScreen<B: Backend = CrosstermBackend<io::Stdout>> {
    terminal: Terminal<B>,
    lines: Vec<String>,
    owns_tty: bool,
}

impl TerminalScreen<CrosstermBackend<io::Stdout>> {
    /// Enters raw mode and the alternate screen on stdout.
    pub fn open() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                lines: Vec::new(),
                owns_tty: true,
            }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }
}

impl<B: Backend> TerminalScreen<B> {
    /// Draws on `backend` without touching the process terminal.
    pub fn with_backend(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            lines: Vec::new(),
            owns_tty: false,
        })
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Drop for TerminalScreen<B> {
    fn drop(&mut self) {
        if self.owns_tty {
            let _ = restore_terminal();
        }
    }
}

impl<B: Backend> Screen for TerminalScreen<B> {
    fn clear(&mut self) -> io::Result<()> {
        self.lines.clear();
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let text: Vec<Line<'_>> = self.lines.iter().map(|line| Line::raw(line.as_str())).collect();
        self.terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(text), frame.area());
        })?;
        Ok(())
    }
}
