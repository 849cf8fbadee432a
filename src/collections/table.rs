//! Dense in-memory table of optional cells.

use crate::data::Values2D;

/// Row-major table of `Option<f64>` cells.
///
/// Rows may have different lengths; [`Values2D::column_count`] reports the
/// widest row. Any coordinate outside the stored cells, including negative
/// ones, reads as absent.
///
/// # Examples
/// ```
/// use u_tabular::collections::DefaultTable;
/// use u_tabular::data::Values2D;
///
/// let table = DefaultTable::from_rows(vec![
///     vec![Some(7.5), Some(4.0)],
///     vec![Some(-2.5), None],
/// ]);
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.value(1, 1), None);
/// assert_eq!(table.value(-1, 0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultTable {
    rows: Vec<Vec<Option<f64>>>,
}

impl DefaultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a table from rows of optional cells.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Self {
        Self { rows }
    }

    /// Creates a fully populated table from primitive rows.
    pub fn from_dense<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.as_ref().iter().copied().map(Some).collect())
                .collect(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<Option<f64>>) {
        self.rows.push(row);
    }

    /// Sets the cell at `(row, column)`, growing the table with absent
    /// cells as needed.
    ///
    /// # Panics
    /// Panics if `row` or `column` is `usize::MAX`. The table is left
    /// unchanged in that case.
    pub fn set_value(&mut self, row: usize, column: usize, value: Option<f64>) {
        let (Some(row_len), Some(column_len)) = (row.checked_add(1), column.checked_add(1)) else {
            panic!("cell ({row}, {column}) is beyond the addressable table size");
        };
        if self.rows.len() < row_len {
            self.rows.resize_with(row_len, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() < column_len {
            cells.resize(column_len, None);
        }
        cells[column] = value;
    }

    /// Rows of the table in order.
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }
}

impl Values2D for DefaultTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn value(&self, row: isize, column: isize) -> Option<f64> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        self.rows.get(row)?.get(column).copied().flatten()
    }
}
