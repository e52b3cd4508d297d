// grid_display - Bordered ASCII frames for a Life grid

use std::io::{self, Write};

use conway::Grid;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

/// Glyphs drawn for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub live: char,
    pub dead: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self { live: 'o', dead: ' ' }
    }
}

/// Renders one frame:
///
/// ```text
/// +---+
/// | o |
/// |  o|
/// +---+
/// ```
pub fn render(grid: &Grid, palette: Palette) -> String {
    let width = grid.width();
    let mut out = String::with_capacity((width + 3) * (grid.height() + 2));

    push_border(&mut out, width);
    for row in grid.rows() {
        out.push('|');
        out.extend(row.iter().map(|&alive| if alive { palette.live } else { palette.dead }));
        out.push('|');
        out.push('\n');
    }
    push_border(&mut out, width);

    out
}

fn push_border(out: &mut String, width: usize) {
    out.push('+');
    out.extend(std::iter::repeat('-').take(width));
    out.push('+');
    out.push('\n');
}

/// Frame writer for a terminal or any other byte sink.
pub struct FrameWriter<W: Write> {
    out: W,
    palette: Palette,
    clear: bool,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette, clear: false }
    }

    /// Redraw in place (clear screen, cursor home) instead of appending frames.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn write_frame(&mut self, grid: &Grid) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.write_all(render(grid, self.palette).as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
