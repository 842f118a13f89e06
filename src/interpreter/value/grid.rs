use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// A read-only grid of characters, one row per line of input text.
///
/// Rows keep their own length, so ragged input is preserved; the reported
/// column count is the length of the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from input text.
    ///
    /// Rows are separated by newlines; a trailing newline does not start an
    /// extra row, and `\r\n` line endings are accepted.
    ///
    /// # Example
    /// ```
    /// use xmas::interpreter::value::grid::Grid;
    ///
    /// let grid = Grid::parse("abc\ndef\n");
    ///
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.row(1), Some(&['d', 'e', 'f'][..]));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self { rows: text.lines().map(|line| line.chars().collect()).collect() }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row; `0` for an empty grid.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the characters of row `row`, if present.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns the rows `start..end` as a new grid.
    ///
    /// Callers validate the bounds; out-of-range bounds are clamped.
    #[must_use]
    pub fn slice_rows(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.rows.len());
        let start = start.min(end);

        Self { rows: self.rows[start..end].to_vec() }
    }

    /// Converts a row into a list of single-character text values.
    #[must_use]
    pub fn row_value(row: &[char]) -> Value {
        Value::List(Rc::new(row.iter().map(|c| Value::from(*c)).collect()))
    }

    /// Materializes the grid as a list of row lists.
    ///
    /// This is what `.rows()` returns.
    #[must_use]
    pub fn to_rows(&self) -> Value {
        Value::List(Rc::new(self.rows.iter().map(|row| Self::row_value(row)).collect()))
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{c}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
