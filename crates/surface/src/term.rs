//! TermSurface: flushes playfield frames to a real terminal.
//!
//! Owns the terminal session lifecycle (raw mode, alternate screen,
//! hidden cursor) and a reusable command buffer. Each render call
//! encodes into the buffer and writes it out in one flush.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::playfield::Playfield;
use crate::settings::Settings;
use gridfall_driver::RenderTarget;

pub struct TermSurface {
    stdout: io::Stdout,
    buf: Vec<u8>,
    field: Playfield,
}

impl TermSurface {
    pub fn new(settings: &Settings) -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            field: Playfield::new(settings),
        }
    }

    /// Enter the session: raw mode, alternate screen, static chrome.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.field.encode_chrome_into(&mut self.buf)?;
        self.flush_buf()
    }

    /// Restore the terminal. Callers run this on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl RenderTarget for TermSurface {
    fn render_grid(&mut self, main: &[u8], preview: &[u8], score: u32) -> Result<()> {
        self.buf.clear();
        self.field
            .encode_grid_into(main, preview, score, &mut self.buf)?;
        self.flush_buf()
    }

    fn render_text(&mut self, lines: &[&str], selected: Option<usize>) -> Result<()> {
        self.buf.clear();
        self.field
            .encode_text_into(lines, selected, &mut self.buf)?;
        self.flush_buf()
    }
}
