//! Terminal surface using crossterm
//!
//! Paints the session directly onto the controlling terminal: raw mode,
//! bracketed paste, and OSC color sequences for themes.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    style::{Attribute, ResetColor, SetAttribute},
    terminal,
};
use tracing::{info, warn};

use crate::config::ColorScheme;
use crate::engine::Surface;

/// Reset foreground, background and cursor colors to the terminal's own
const RESET_COLORS: &str = "\x1b]110\x07\x1b]111\x07\x1b]112\x07";

/// Rendering surface on stdout
pub struct TerminalSurface {
    /// Whether the terminal has been initialized
    initialized: bool,
    /// Whether a color scheme has been applied
    themed: bool,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            initialized: false,
            themed: false,
        }
    }

    /// Initialize the terminal for the session
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnableBracketedPaste)?;
        stdout.flush()?;

        self.initialized = true;
        info!("Terminal surface initialized");
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();

        if self.themed {
            write!(stdout, "{}", RESET_COLORS)?;
            self.themed = false;
        }

        // Reset all attributes first
        let _ = execute!(stdout, ResetColor, SetAttribute(Attribute::Reset));

        // Show cursor
        let _ = execute!(stdout, Show);

        let _ = execute!(stdout, DisableBracketedPaste);

        write!(stdout, "\r\n")?;
        stdout.flush()?;

        terminal::disable_raw_mode()
    }

    /// Get terminal size
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Surface for TerminalSurface {
    fn write(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
        {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn columns(&self) -> u16 {
        Self::size().map(|(cols, _)| cols).unwrap_or(80)
    }

    fn focus(&mut self) {
        let _ = execute!(io::stdout(), Show);
    }

    fn set_theme(&mut self, scheme: &ColorScheme) {
        let osc = format!(
            "\x1b]10;{}\x07\x1b]11;{}\x07\x1b]12;{}\x07",
            scheme.foreground.to_hex(),
            scheme.background.to_hex(),
            scheme.cursor.to_hex(),
        );
        self.write(&osc);
        self.themed = true;
        info!("Applied color scheme '{}'", scheme.name);
    }

    fn dispose(&mut self) {
        if let Err(e) = self.cleanup() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
