//! Crossterm-backed render sink and keyboard stop source
//!
//! Raw mode + alternate screen for the run's duration; both are restored
//! on drop even when the loop exits through an error path.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::core::error::Result;
use crate::render::{RenderSink, StopSource};

/// Paints cells straight into the terminal via queued crossterm commands
pub struct TerminalSink {
    out: Stdout,
}

impl TerminalSink {
    /// Enter raw mode and the alternate screen; fails before any worker
    /// would be affected
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        // No Self yet, so Drop cannot restore the terminal: unwind raw
        // mode by hand if the screen setup fails.
        if let Err(err) = queue!(out, EnterAlternateScreen, cursor::Hide).and_then(|()| out.flush())
        {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { out })
    }
}

impl RenderSink for TerminalSink {
    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    fn set_pixel(&mut self, x: u16, y: u16, glyph: char, attr: u8) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetForegroundColor(Color::AnsiValue(attr)),
            Print(glyph),
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = queue!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Stops the run on ESC or `q`
///
/// Polling is non-blocking; pending non-key events are drained and
/// ignored so a resize cannot wedge the frame cadence.
pub struct KeyStopSource;

impl StopSource for KeyStopSource {
    fn should_stop(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
                {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
