// grid.rs - Toroidal grid for Conway's Game of Life

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::LoadError;

// Size limits for boards loaded from text
pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 100;

pub const DEAD: bool = false;
pub const ALIVE: bool = true;

/// A fixed-size grid whose edges wrap around in both directions.
///
/// Cells are stored row-major; dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Blank grid. Dimensions are held to the same bounds as a loaded board.
    pub fn new(width: usize, height: usize) -> Result<Self, LoadError> {
        check_dimension("width", width as i64)?;
        check_dimension("height", height as i64)?;
        Ok(Self::blank(width, height))
    }

    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![DEAD; width * height],
        }
    }

    /// Grid with the same dimensions and every cell dead. Contents are not copied.
    pub fn same_shape(&self) -> Self {
        Self::blank(self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked read; `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Cell at `(x, y)` with both coordinates wrapped onto the torus.
    pub fn wrapped(&self, x: isize, y: isize) -> bool {
        let (x, y) = self.wrap(x, y);
        self.cells[self.index(x, y)]
    }

    /// Writes through the same toroidal mapping as [`Grid::wrapped`].
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        let (x, y) = self.wrap(x, y);
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Parses a board: width line, height line, then `height` rows of `0`/`1`.
    ///
    /// Every row must be exactly `width` characters followed by `\n`. Anything
    /// after the last row is ignored.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, LoadError> {
        let mut line = String::new();

        let width = read_dimension(&mut reader, &mut line, "width")?;
        let height = read_dimension(&mut reader, &mut line, "height")?;
        let mut grid = Self::blank(width, height);

        for y in 0..height {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(LoadError::MissingLine {
                    what: format!("row {}", y),
                });
            }
            if line.len() != width + 1 || !line.ends_with('\n') {
                return Err(LoadError::RowLength {
                    row: y,
                    expected: width,
                    found: line.trim_end_matches('\n').chars().count(),
                });
            }
            for (x, c) in line[..width].chars().enumerate() {
                let alive = match c {
                    '0' => DEAD,
                    '1' => ALIVE,
                    other => {
                        return Err(LoadError::InvalidCell {
                            row: y,
                            column: x,
                            found: other,
                        })
                    }
                };
                let index = grid.index(x, y);
                grid.cells[index] = alive;
            }
        }

        Ok(grid)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serializes back into the format accepted by [`Grid::from_reader`].
    pub fn to_board_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height + 8);
        out.push_str(&format!("{}\n{}\n", self.width, self.height));
        for row in self.rows() {
            out.extend(row.iter().map(|&alive| if alive { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

fn read_dimension<R: BufRead>(
    reader: &mut R,
    line: &mut String,
    name: &'static str,
) -> Result<usize, LoadError> {
    line.clear();
    if reader.read_line(line)? == 0 {
        return Err(LoadError::MissingLine {
            what: name.to_string(),
        });
    }
    let value: i64 = line.trim().parse().map_err(|_| LoadError::InvalidDimension {
        name,
        line: line.trim_end().to_string(),
    })?;
    check_dimension(name, value)?;
    Ok(value as usize)
}

fn check_dimension(name: &'static str, value: i64) -> Result<(), LoadError> {
    if value < MIN_DIMENSION as i64 || value > MAX_DIMENSION as i64 {
        return Err(LoadError::DimensionOutOfRange { name, value });
    }
    Ok(())
}
