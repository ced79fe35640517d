use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// Integer tile coordinate; `x` grows east, `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell displaced by `(dx, dy)`, or `None` if a coordinate overflows.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("no start tile 'S' found")]
    MissingStart,
    #[error("no finish tile 'E' found")]
    MissingFinish,
    #[error("more than one start tile 'S': {first} and {second}")]
    DuplicateStart { first: Cell, second: Cell },
    #[error("more than one finish tile 'E': {first} and {second}")]
    DuplicateFinish { first: Cell, second: Cell },
    #[error("grid dimension {0} does not fit in a coordinate")]
    TooLarge(usize),
}

/// Rectangular maze of walls and free tiles with a start and a finish.
///
/// Read-only once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major, `true` for free tiles
    free: Vec<bool>,
    start: Cell,
    finish: Cell,
}

impl Grid {
    /// Parse a block of rows where `#` is a wall and anything else is free.
    ///
    /// Exactly one `S` and one `E` are required and every row must have the
    /// same width. Blank lines before the first row and after the last one
    /// are ignored; a blank line between rows is a ragged row.
    pub fn parse(input: &str) -> Result<Self, MalformedGridError> {
        let rows = input
            .trim_matches(['\r', '\n'])
            .lines()
            .map(|line| line.trim_end_matches('\r').as_bytes())
            .collect_vec();

        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(MalformedGridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.len())
            .find_position(|&len| len != width)
        {
            return Err(MalformedGridError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        let height = rows.len();
        for dim in [width, height] {
            i32::try_from(dim).map_err(|_| MalformedGridError::TooLarge(dim))?;
        }

        let mut start: Option<Cell> = None;
        let mut finish: Option<Cell> = None;
        let mut free = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                let cell = Cell::new(x as i32, y as i32);
                free.push(tile != b'#');
                match tile {
                    b'S' => {
                        if let Some(first) = start.replace(cell) {
                            return Err(MalformedGridError::DuplicateStart {
                                first,
                                second: cell,
                            });
                        }
                    }
                    b'E' => {
                        if let Some(first) = finish.replace(cell) {
                            return Err(MalformedGridError::DuplicateFinish {
                                first,
                                second: cell,
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            width,
            height,
            free,
            start: start.ok_or(MalformedGridError::MissingStart)?,
            finish: finish.ok_or(MalformedGridError::MissingFinish)?,
        })
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(cell.y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    /// `false` for walls and for anything outside the grid
    pub fn is_free(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.free[i])
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn finish(&self) -> Cell {
        self.finish
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.free.iter().enumerate().filter(|(_, free)| **free).map(|(i, _)| {
            Cell::new((i % self.width) as i32, (i / self.width) as i32)
        })
    }

    pub fn free_cell_count(&self) -> usize {
        self.free.iter().filter(|free| **free).count()
    }
}
