//! Screen: owns the terminal and flushes framebuffers to it.
//!
//! Only glyphs that differ from the previously flushed frame are written, as
//! horizontal runs. A size change (or [`Screen::invalidate`]) forces a full
//! redraw.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::Color;

/// Terminal output with raw mode, alternate screen and a frame diff.
///
/// `W` is the byte sink; it is [`Stdout`] for the real game and a `Vec<u8>`
/// in tests.
pub struct Screen<W: Write = Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl Screen<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    /// Switch to raw mode and the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`Screen::enter`]. Safe to call more than once.
    pub fn leave(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
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

    /// Force a full redraw on the next [`Screen::draw`] (after a resize, say).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush `fb`, writing only what changed since the last call.
    /// Returns the number of glyphs written.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<usize> {
        self.buf.clear();
        let written = encode_frame(self.last.as_ref(), fb, &mut self.buf)?;
        if written > 0 {
            self.flush_buf()?;
        }

        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(written)
    }

    /// Ring the terminal bell
    pub fn bell(&mut self) -> Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        // Errors here have nowhere to go; the terminal is best-effort restored.
        let _ = self.leave();
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no previous frame (or a different size) the screen is cleared and
/// every glyph is written. Returns the number of glyphs written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<Style> = None;
    let mut written = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        let runs = match prev {
            Some(prev) => changed_runs(prev.row(y), row),
            None => vec![(0, row.len())],
        };
        for (start, end) in runs {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for glyph in &row[start..end] {
                if style != Some(glyph.style) {
                    queue_style(out, glyph.style)?;
                    style = Some(glyph.style);
                }
                out.queue(Print(glyph.ch))?;
            }
            written += end - start;
        }
    }

    if written > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(written)
}

/// Half-open column ranges where `a` and `b` differ, merged into maximal runs
fn changed_runs(a: &[Glyph], b: &[Glyph]) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for (x, _) in a.iter().zip(b).enumerate().filter(|(_, (a, b))| a != b) {
        match runs.last_mut() {
            Some((_, end)) if *end == x => *end = x + 1,
            _ => runs.push((x, x + 1)),
        }
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(term_color(style.fg)))?;
    out.queue(SetBackgroundColor(term_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
