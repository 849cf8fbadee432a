//! Totals, cumulative percentages and numeric array conversion.
//!
//! Every function here is pure: sources are read, never mutated or
//! retained past the call, and identical inputs give bit-identical output.
//!
//! # Absent inputs
//!
//! A required argument passed as `None` fails with
//! [`DataError::InvalidArgument`] before any work is done. An absent *cell*
//! or *item value* is not an error: it contributes `0.0` to every sum.
//!
//! # Floating-point edge cases
//!
//! Sums are plain left-to-right `f64` additions, so NaN and infinities in
//! the input propagate by IEEE-754 rules. Division by a zero total is not
//! trapped: [`get_cumulative_percentages`] emits NaN in that case.

use crate::collections::DefaultKeyedValues;
use crate::data::{KeyedValues, Values2D};
use crate::error::DataError;
use crate::number::Number;

/// Sums column `column` of `source` over rows `0..row_count()`.
///
/// The column index is not checked against `column_count()`. An index
/// outside the table (negative or too large) is passed to the source as-is;
/// a source that answers `None` there yields `0.0`.
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `source` is `None`.
///
/// # Examples
/// ```
/// use u_tabular::aggregate::calculate_column_total;
/// use u_tabular::collections::DefaultTable;
///
/// let t = DefaultTable::from_rows(vec![
///     vec![Some(7.5), Some(4.0)],
///     vec![Some(-2.5), None],
/// ]);
/// assert_eq!(calculate_column_total(Some(&t), 0).unwrap(), 5.0);
/// assert_eq!(calculate_column_total(Some(&t), 1).unwrap(), 4.0);
/// assert_eq!(calculate_column_total(Some(&t), -1).unwrap(), 0.0);
/// ```
pub fn calculate_column_total<S>(source: Option<&S>, column: isize) -> Result<f64, DataError>
where
    S: Values2D + ?Sized,
{
    let source = require(source, "source")?;
    let rows = source.row_count();
    tracing::trace!(column, rows, "calculating column total");
    Ok(sum_cells((0..rows).map(|row| source.value(to_index(row), column))))
}

/// Sums row `row` of `source` over columns `0..column_count()`.
///
/// The row index is not checked against `row_count()`; see
/// [`calculate_column_total`].
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `source` is `None`.
pub fn calculate_row_total<S>(source: Option<&S>, row: isize) -> Result<f64, DataError>
where
    S: Values2D + ?Sized,
{
    let source = require(source, "source")?;
    let columns = source.column_count();
    tracing::trace!(row, columns, "calculating row total");
    Ok(sum_cells((0..columns).map(|column| source.value(row, to_index(column)))))
}

/// Sums column `column` over the listed rows only.
///
/// Rows at or beyond `row_count()` are skipped without a lookup. Negative
/// row indices are looked up and normally read as absent.
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `source` is `None`.
pub fn calculate_column_total_for_rows<S>(
    source: Option<&S>,
    column: isize,
    valid_rows: &[isize],
) -> Result<f64, DataError>
where
    S: Values2D + ?Sized,
{
    let source = require(source, "source")?;
    let rows = source.row_count();
    Ok(sum_cells(
        valid_rows
            .iter()
            .filter(|&&row| below(row, rows))
            .map(|&row| source.value(row, column)),
    ))
}

/// Sums row `row` over the listed columns only.
///
/// Columns at or beyond `column_count()` are skipped without a lookup.
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `source` is `None`.
pub fn calculate_row_total_for_columns<S>(
    source: Option<&S>,
    row: isize,
    valid_columns: &[isize],
) -> Result<f64, DataError>
where
    S: Values2D + ?Sized,
{
    let source = require(source, "source")?;
    let columns = source.column_count();
    Ok(sum_cells(
        valid_columns
            .iter()
            .filter(|&&column| below(column, columns))
            .map(|&column| source.value(row, column)),
    ))
}

/// Boxes each primitive into a [`Number`], preserving order and bit
/// patterns (NaN, infinities, negative zero).
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `values` is `None`.
///
/// # Examples
/// ```
/// use u_tabular::aggregate::create_number_array;
/// let out = create_number_array(Some(&[1.5, 2.0, 3.5])).unwrap();
/// assert_eq!(out.iter().map(|n| n.value()).collect::<Vec<_>>(), vec![1.5, 2.0, 3.5]);
/// assert!(create_number_array(Some(&[])).unwrap().is_empty());
/// assert!(create_number_array(None).is_err());
/// ```
pub fn create_number_array(values: Option<&[f64]>) -> Result<Vec<Number>, DataError> {
    let values = require(values, "values")?;
    Ok(box_row(values))
}

/// Applies [`create_number_array`] to every row, preserving each row's
/// length. Rows need not be of equal length.
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `values` is `None` or any row
/// is `None`. No output is produced in that case.
///
/// # Examples
/// ```
/// use u_tabular::aggregate::create_number_array_2d;
/// let rows = vec![Some(vec![1.5, 2.5]), Some(vec![])];
/// let out = create_number_array_2d(Some(rows.as_slice())).unwrap();
/// assert_eq!(out.len(), 2);
/// assert!(out[1].is_empty());
///
/// let with_gap = vec![Some(vec![1.5, 2.5]), None];
/// assert!(create_number_array_2d(Some(with_gap.as_slice())).is_err());
/// ```
pub fn create_number_array_2d<R>(values: Option<&[Option<R>]>) -> Result<Vec<Vec<Number>>, DataError>
where
    R: AsRef<[f64]>,
{
    let values = require(values, "values")?;
    values
        .iter()
        .enumerate()
        .map(|(i, row)| match row {
            Some(row) => Ok(box_row(row.as_ref())),
            None => {
                tracing::debug!(row = i, "absent row in 2D array");
                Err(DataError::InvalidArgument("row"))
            }
        })
        .collect()
}

/// Computes the running share of the total at each position.
///
/// Every value in the returned collection is `Some`; absent input values
/// never produce absent output.
///
/// The value emitted for position `i` is
/// `(v[0] + ... + v[i]) / (v[0] + ... + v[n-1])`, with absent values read
/// as `0.0`. Keys are copied in input order; nothing is sorted or
/// deduplicated.
///
/// A zero total makes every emitted value NaN, except that a non-zero
/// prefix over a zero total (possible only with mixed signs) divides to an
/// infinity. Negative values are summed as-is, so ratios may be negative or
/// exceed `1.0`.
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `data` is `None`.
///
/// # Examples
/// ```
/// use u_tabular::aggregate::get_cumulative_percentages;
/// use u_tabular::collections::DefaultKeyedValues;
///
/// let data: DefaultKeyedValues<u32> =
///     vec![(0, Some(5.0)), (1, Some(9.0)), (2, Some(2.0))].into_iter().collect();
/// let out = get_cumulative_percentages(Some(&data)).unwrap();
/// assert_eq!(out.values(), &[Some(0.3125), Some(0.875), Some(1.0)]);
/// ```
pub fn get_cumulative_percentages<K>(
    data: Option<&K>,
) -> Result<DefaultKeyedValues<K::Key>, DataError>
where
    K: KeyedValues + ?Sized,
{
    let data = require(data, "data")?;
    let n = data.item_count();
    let total = sum_cells((0..n).map(|i| data.value(i)));
    if total == 0.0 {
        tracing::debug!(items = n, "zero total, cumulative percentages are NaN");
    }

    let mut result = DefaultKeyedValues::with_capacity(n);
    let mut running = 0.0;
    for i in 0..n {
        running += data.value(i).unwrap_or(0.0);
        result.push(data.key(i), Some(running / total));
    }
    Ok(result)
}

/// Deep copy of a 2D array whose rows may be absent. Absent rows stay
/// absent.
///
/// # Errors
/// Returns [`DataError::InvalidArgument`] if `source` is `None`.
pub fn clone_2d<R>(source: Option<&[Option<R>]>) -> Result<Vec<Option<Vec<f64>>>, DataError>
where
    R: AsRef<[f64]>,
{
    let source = require(source, "source")?;
    Ok(source
        .iter()
        .map(|row| row.as_ref().map(|r| r.as_ref().to_vec()))
        .collect())
}

/// Element-wise equality of two optional 2D arrays.
///
/// Two absent arrays are equal; an absent and a present one are not. Rows
/// compare equal when both are absent, or both are present with the same
/// length and equal elements. NaN equals NaN here.
pub fn equal_2d<A, B>(a: Option<&[Option<A>]>, b: Option<&[Option<B>]>) -> bool
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| match (x, y) {
                    (None, None) => true,
                    (Some(x), Some(y)) => rows_equal(x.as_ref(), y.as_ref()),
                    _ => false,
                })
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require<'a, T: ?Sized>(arg: Option<&'a T>, name: &'static str) -> Result<&'a T, DataError> {
    arg.ok_or_else(|| {
        tracing::debug!(argument = name, "required argument is absent");
        DataError::InvalidArgument(name)
    })
}

/// Left-to-right sum with absent cells as the additive identity.
fn sum_cells(cells: impl Iterator<Item = Option<f64>>) -> f64 {
    cells.fold(0.0, |acc, cell| acc + cell.unwrap_or(0.0))
}

fn box_row(values: &[f64]) -> Vec<Number> {
    values.iter().copied().map(Number::from).collect()
}

fn rows_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x == y || (x.is_nan() && y.is_nan()))
}

/// Position to lookup coordinate, saturating at `isize::MAX`.
fn to_index(i: usize) -> isize {
    isize::try_from(i).unwrap_or(isize::MAX)
}

fn below(index: isize, count: usize) -> bool {
    usize::try_from(index).map_or(true, |i| i < count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
