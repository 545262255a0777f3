//! Level maps
//!
//! A level is a grid of single-digit cell codes. `'0'` is empty space and any
//! other digit names a tile image (`tiles/1.png` for `'1'`).
//!
//! The built-in map is always available. A level can also be read from a RON
//! file holding the rows as a list of strings:
//!
//! ```text
//! [
//!     "0000000",
//!     "0011000",
//!     "1111111",
//! ]
//! ```

use std::fs;
use std::path::Path;

/// Validation limits for level files
pub mod limits {
    /// Maximum number of rows in a level
    pub const MAX_ROWS: usize = 256;
    /// Maximum number of cells per row
    pub const MAX_COLUMNS: usize = 4096;
}

/// Cell code for empty space
pub const EMPTY_CELL: char = '0';

/// The level shipped with the game
pub const DEFAULT_LEVEL: &[&str] = &[
    "0000000000000000000000000000000",
    "0000000000000000000000000000000",
    "0000001100000000000000000000000",
    "0000011111000000000000000000000",
    "1111111111111111111111111111111",
];

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// Immutable grid of cell codes, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    cells: Vec<char>,
    columns: usize,
    rows: usize,
}

impl Level {
    /// The built-in level
    pub fn builtin() -> Self {
        Self::build(DEFAULT_LEVEL)
    }

    /// Parse and validate rows of cell codes
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LevelError> {
        validate_rows(rows).map_err(LevelError::ValidationError)?;
        Ok(Self::build(rows))
    }

    fn build<S: AsRef<str>>(rows: &[S]) -> Self {
        let columns = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let cells: Vec<char> = rows.iter().flat_map(|r| r.as_ref().chars()).collect();
        Self {
            cells,
            columns,
            rows: rows.len(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell code at (row, column), or None outside the grid
    #[cfg(test)]
    pub fn cell(&self, row: usize, column: usize) -> Option<char> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    /// Non-empty cells as (row, column, code), row-major
    pub fn solid_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let columns = self.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &code)| code != EMPTY_CELL)
            .map(move |(i, &code)| (i / columns, i % columns, code))
    }

    /// Distinct tile codes used by this level, sorted
    pub fn tile_codes(&self) -> Vec<char> {
        let mut codes: Vec<char> = self.solid_cells().map(|(_, _, code)| code).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_rows<S: AsRef<str>>(rows: &[S]) -> Result<(), String> {
    let Some(first) = rows.first() else {
        return Err("level has no rows".to_string());
    };
    if rows.len() > limits::MAX_ROWS {
        return Err(format!("too many rows ({} > {})", rows.len(), limits::MAX_ROWS));
    }

    let columns = first.as_ref().chars().count();
    if columns == 0 {
        return Err("level rows are empty".to_string());
    }
    if columns > limits::MAX_COLUMNS {
        return Err(format!("row too long ({} > {})", columns, limits::MAX_COLUMNS));
    }

    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let len = row.chars().count();
        if len != columns {
            return Err(format!("row {} has {} cells, expected {}", i, len, columns));
        }
        if let Some(bad) = row.chars().find(|c| !c.is_ascii_digit()) {
            return Err(format!("row {} contains invalid cell code {:?}", i, bad));
        }
    }
    Ok(())
}

/// Parse a level from RON text (a list of row strings)
pub fn parse_level(text: &str) -> Result<Level, LevelError> {
    let rows: Vec<String> = ron::from_str(text)?;
    Level::from_rows(&rows)
}

/// Load a level from a RON file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let text = fs::read_to_string(path)?;
    parse_level(&text)
}
