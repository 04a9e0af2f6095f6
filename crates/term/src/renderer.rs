//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and every frame after a resize) is a full redraw; later
//! frames only emit the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

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

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, emitting only what differs from the frame on screen.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &mut self.shown {
            Some(shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(shown, fb, &mut self.buf)?;
                shown.clone_from(fb);
            }
            slot => {
                encode_full_into(fb, &mut self.buf)?;
                *slot = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the style last sent so runs of equally-styled cells skip the escape codes.
struct StyleCursor {
    current: Option<CellStyle>,
}

impl StyleCursor {
    fn new() -> Self {
        Self { current: None }
    }

    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleCursor::new();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    finish(out)
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = StyleCursor::new();
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        write_run(next, x, y, len, &mut style, out)?;
    }
    finish(out)
}

fn write_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut StyleCursor,
    out: &mut Vec<u8>,
) -> Result<()> {
    for cx in x..x + len {
        let cell = fb.get(cx, y).unwrap_or_default();
        style.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ between the two frames.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(5, 1, Cell { ch: 'Y', style });

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(4, 4);
        assert_eq!(changed_runs(&a, &a.clone()).count(), 0);
    }

    #[test]
    fn style_only_change_is_a_run() {
        let a = FrameBuffer::new(3, 1);
        let mut b = a.clone();
        b.set(
            2,
            0,
            Cell {
                ch: ' ',
                style: CellStyle::default().bold(),
            },
        );
        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(2, 0, 1)]);
    }

    #[test]
    fn diff_of_identical_frames_only_resets() {
        let a = FrameBuffer::new(3, 1);
        let mut diff = Vec::new();
        encode_diff_into(&a, &a, &mut diff).unwrap();

        let mut reset = Vec::new();
        finish(&mut reset).unwrap();
        assert_eq!(diff, reset);
    }

    #[test]
    fn full_redraw_prints_every_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());
        fb.put_str(0, 1, "def", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc"));
        assert!(text.contains("def"));
    }
}
