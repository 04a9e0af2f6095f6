//! GameView: maps a game snapshot and play session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (centered in the viewport):
//!
//! ```text
//! BINGO                             [ Buy In ]
//!
//! T1 [X]   0 hits     T2 [X]   0 hits     CALLS 0/40
//! ┌────────────────┐ ┌────────────────┐   ...
//! │  3  9 14 ...   │ │                │
//! ...
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::session::PlaySession;
use crate::types::{CALLS_PER_GAME, TICKET_COUNT, TICKET_GRID_SIZE};

/// Terminal viewport dimensions.
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

/// Columns per ticket number (" 80 ").
const CELL_W: u16 = 4;
const TICKET_FRAME_W: u16 = TICKET_GRID_SIZE as u16 * CELL_W + 2;
const TICKET_FRAME_H: u16 = TICKET_GRID_SIZE as u16 + 2;
/// Title row above each frame.
const TICKET_BLOCK_H: u16 = TICKET_FRAME_H + 1;
const TICKET_COLUMNS: u16 = 2;
const TICKET_GAP_X: u16 = 2;
const TICKET_GAP_Y: u16 = 1;
const HEADER_H: u16 = 2;

const CALLS_PANEL_GAP: u16 = 3;
const CALL_COLUMNS: u16 = 4;
const CALL_W: u16 = 4;
const CALLS_PANEL_W: u16 = CALL_COLUMNS * CALL_W;

const FOOTER: &str = "b buy in/new game  r regenerate  1-4 in/out of play  q quit";

const NUMBER_BG: Rgb = Rgb::hex(0x1f0040);
const ACCENT: Rgb = Rgb::hex(0x00ffff);
const OVERLAY_FG: Rgb = Rgb::hex(0xff00e6);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Screen positions of every element, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Top-left of each ticket frame (below its title row).
    pub tickets: [(u16, u16); TICKET_COUNT],
    pub calls_x: u16,
    pub calls_y: u16,
    pub footer_y: u16,
}

impl Layout {
    pub const CONTENT_W: u16 = TICKET_COLUMNS * TICKET_FRAME_W
        + (TICKET_COLUMNS - 1) * TICKET_GAP_X
        + CALLS_PANEL_GAP
        + CALLS_PANEL_W;
    pub const TICKETS_H: u16 = ticket_rows() * TICKET_BLOCK_H + (ticket_rows() - 1) * TICKET_GAP_Y;
    pub const CONTENT_H: u16 = HEADER_H + Self::TICKETS_H + 2;

    pub fn new(viewport: Viewport) -> Self {
        let origin_x = viewport.width.saturating_sub(Self::CONTENT_W) / 2;
        let origin_y = viewport.height.saturating_sub(Self::CONTENT_H) / 2;
        let top = origin_y + HEADER_H;

        let mut tickets = [(0, 0); TICKET_COUNT];
        for (t, pos) in tickets.iter_mut().enumerate() {
            let col = t as u16 % TICKET_COLUMNS;
            let row = t as u16 / TICKET_COLUMNS;
            *pos = (
                origin_x + col * (TICKET_FRAME_W + TICKET_GAP_X),
                top + row * (TICKET_BLOCK_H + TICKET_GAP_Y) + 1,
            );
        }

        Self {
            origin_x,
            origin_y,
            tickets,
            calls_x: origin_x + TICKET_COLUMNS * TICKET_FRAME_W
                + (TICKET_COLUMNS - 1) * TICKET_GAP_X
                + CALLS_PANEL_GAP,
            calls_y: top,
            footer_y: top + Self::TICKETS_H + 1,
        }
    }

    /// Screen cell holding number `i` of ticket `t`.
    pub fn number_cell(&self, t: usize, i: usize) -> (u16, u16) {
        let (fx, fy) = self.tickets[t];
        let col = (i % TICKET_GRID_SIZE) as u16;
        let row = (i / TICKET_GRID_SIZE) as u16;
        (fx + 1 + col * CELL_W, fy + 1 + row)
    }
}

const fn ticket_rows() -> u16 {
    (TICKET_COUNT as u16 + TICKET_COLUMNS - 1) / TICKET_COLUMNS
}

/// A terminal renderer for the bingo table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    /// Hide the key-binding footer.
    hide_footer: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_footer(mut self) -> Self {
        self.hide_footer = true;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        session: &PlaySession,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = Layout::new(viewport);

        self.draw_header(fb, snap, &layout);
        for t in 0..TICKET_COUNT {
            self.draw_ticket(fb, snap, session, &layout, t);
        }
        self.draw_calls_panel(fb, session, &layout);

        if !self.hide_footer && (FOOTER.len() as u16) <= viewport.width {
            let style = CellStyle::default().dim();
            fb.put_str(layout.origin_x, layout.footer_y, FOOTER, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        session: &PlaySession,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, session, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let title = CellStyle::new(ACCENT, BLACK).bold();
        fb.put_str(layout.origin_x, layout.origin_y, "BINGO", title);

        let label = snap.phase.button_label();
        let button_w = label.len() as u16 + 4;
        let x = (layout.origin_x + Layout::CONTENT_W).saturating_sub(button_w);
        let button = CellStyle::new(WHITE, Rgb::hex(0x550055)).bold();
        let mut cx = fb.put_str(x, layout.origin_y, "[ ", button);
        cx = fb.put_str(cx, layout.origin_y, label, button);
        fb.put_str(cx, layout.origin_y, " ]", button);
    }

    fn draw_ticket(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        session: &PlaySession,
        layout: &Layout,
        t: usize,
    ) {
        let (fx, fy) = layout.tickets[t];
        let disabled = session.mask().is_disabled(t);

        // Title row: ticket number, in/out control, hit count.
        let label = CellStyle::default().bold();
        fb.put_char(fx, fy - 1, 'T', label);
        let cx = fb.put_u32(fx + 1, fy - 1, t as u32 + 1, label);
        let control = if disabled {
            CellStyle::new(WHITE, Rgb::hex(0x333333))
        } else {
            CellStyle::new(WHITE, Rgb::hex(0x550055))
        };
        fb.put_str(cx + 1, fy - 1, if disabled { "[+]" } else { "[X]" }, control);

        if !disabled {
            let hits = session.hit_count(snap, t) as u32;
            let dim = CellStyle::default().dim();
            let hx = fx + TICKET_FRAME_W - 7;
            fb.put_u32_right(hx, fy - 1, 2, hits, dim);
            fb.put_str(hx + 3, fy - 1, "hits", dim);
        }

        fb.draw_box(fx, fy, TICKET_FRAME_W, TICKET_FRAME_H, CellStyle::new(ACCENT, BLACK));

        if disabled {
            fb.fill_rect(
                fx + 1,
                fy + 1,
                TICKET_FRAME_W - 2,
                TICKET_FRAME_H - 2,
                ' ',
                CellStyle::new(OVERLAY_FG, BLACK),
            );
            let overlay = CellStyle::new(OVERLAY_FG, BLACK).bold();
            let mid = fy + TICKET_FRAME_H / 2;
            centered(fb, fx, TICKET_FRAME_W, mid - 1, "NOT IN", overlay);
            centered(fb, fx, TICKET_FRAME_W, mid, "PLAY!", overlay);
            return;
        }

        let normal = CellStyle::new(WHITE, NUMBER_BG);
        let hit = CellStyle::new(BLACK, ACCENT).bold();
        for (i, &n) in snap.tickets[t].iter().enumerate() {
            let style = if session.is_hit(t, n) { hit } else { normal };
            let (x, y) = layout.number_cell(t, i);
            fb.put_u32_right(x, y, CELL_W - 1, n, style);
            fb.put_char(x + CELL_W - 1, y, ' ', normal);
        }
    }

    fn draw_calls_panel(&self, fb: &mut FrameBuffer, session: &PlaySession, layout: &Layout) {
        if layout.calls_x >= fb.width() {
            return;
        }

        let reveal = session.reveal();
        let label = CellStyle::default().bold();
        let total = session.counter_total();
        let mut cx = fb.put_str(layout.calls_x, layout.calls_y, "CALLS ", label);
        cx = fb.put_u32(cx, layout.calls_y, reveal.revealed_count() as u32, label);
        fb.put_char(cx, layout.calls_y, '/', label);
        fb.put_u32(cx + 1, layout.calls_y, total as u32, label);

        let value = CellStyle::new(ACCENT, BLACK);
        let rows = (CALLS_PER_GAME as u16).div_ceil(CALL_COLUMNS);
        for (i, &n) in reveal.revealed().iter().enumerate() {
            let i = i as u16;
            // Column-major, so the ascending calls read top to bottom.
            let x = layout.calls_x + (i / rows) * CALL_W;
            let y = layout.calls_y + 1 + i % rows;
            fb.put_u32_right(x, y, CALL_W - 1, n, value);
        }
    }
}

fn centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}
