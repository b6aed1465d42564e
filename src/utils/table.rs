//! Plain-text table output
//!
//! Cells are left-justified and padded to the widest cell of their column
//! plus a fixed gap. The last cell of every row is written without padding.

use std::fmt;

/// Spaces between columns
pub const COLUMN_GAP: usize = 2;

/// A left-aligned text table with a header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given header cells
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        table.push_row(header);
        table
    }

    /// Append a row of cells
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows below the header
    pub fn body_len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            // The last cell never takes part in alignment
            let aligned = row.len().saturating_sub(1);
            for (column, cell) in row.iter().take(aligned).enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for row in &self.rows {
            let mut line = String::new();
            for (column, cell) in row.iter().enumerate() {
                if column + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    let width = widths.get(column).copied().unwrap_or(0) + COLUMN_GAP;
                    line.push_str(&format!("{cell:<width$}"));
                }
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
