//! GameView: draws a [`GameSnapshot`] into a [`FrameBuffer`].
//!
//! This module is pure (no I/O) and can be unit-tested.

use crate::core::{catalog_shape, ActiveSnapshot, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::{Cell, Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

const BACKGROUND: Color = Color::rgb(0, 0, 0);
const WELL: Color = Color::rgb(30, 30, 40);
const GRID: Color = Color::rgb(90, 90, 100);
const BORDER: Color = Color::rgb(200, 200, 200);
const TEXT: Color = Color::rgb(220, 220, 220);
const SHADOW: Color = Color::rgb(140, 140, 140);

const BLOCK: char = '█';

/// Terminal size in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle of the bordered well, computed once per frame
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Board renderer. Each board cell is `cell_w` terminal columns wide and one row tall.
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::new(TEXT, BACKGROUND)));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Cell::Filled(color) => (BLOCK, Style::new(*color, WELL)),
                    Cell::Empty => ('·', Style::new(GRID, WELL).dim()),
                };
                self.fill_cell(fb, frame, x as i8, y as i8, ch, style);
            }
        }

        if let (Some(active), Some(shadow)) = (snap.active, snap.shadow) {
            let style = Style::new(SHADOW, WELL).dim();
            for (x, y) in active.cells_at(shadow) {
                self.fill_cell(fb, frame, x, y, '░', style);
            }
        }

        if let Some(active) = snap.active {
            self.draw_active(fb, frame, &active);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Ready => self.draw_overlay(fb, frame, &["PRESS ENTER"]),
            Phase::Paused => self.draw_overlay(fb, frame, &["PAUSED"]),
            Phase::GameOver => self.draw_overlay(fb, frame, &["GAME OVER", "PRESS ENTER"]),
            Phase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_active(&self, fb: &mut FrameBuffer, frame: Frame, active: &ActiveSnapshot) {
        let style = Style::new(active.kind.color(), WELL).bold();
        for (x, y) in active.cells_at(active.position) {
            self.fill_cell(fb, frame, x, y, BLOCK, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = Style::new(BORDER, BACKGROUND);
        let Frame { x, y, w, h } = frame;

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    /// Paint board cell `(x, y)`; cells outside the grid are skipped
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: Style) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = Style::new(TEXT, BACKGROUND).bold();
        let value = Style::new(TEXT, BACKGROUND);

        let mut y = frame.y;
        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let shape = catalog_shape(snap.next);
        let style = Style::new(snap.next.color(), BACKGROUND);
        for (dx, dy) in shape.cells() {
            let px = panel_x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, BLOCK, style);
        }
    }

    /// Centered lines of text over the well
    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = Style::new(Color::rgb(255, 255, 255), BACKGROUND).bold();
        let top = (frame.y + frame.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}
