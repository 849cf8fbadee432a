//! Capability traits for caller-supplied data.
//!
//! The aggregation functions in [`crate::aggregate`] depend only on these
//! two traits, never on a concrete table type. Implementations may be backed
//! by dense arrays, sparse maps or computed views.
//!
//! # Absent values
//!
//! A lookup returns `None` when no value is present at that coordinate.
//! Every summation path in this crate treats `None` as the additive
//! identity `0.0`.

/// A two-dimensional table of optional numeric cells.
///
/// Nothing ties [`row_count`](Self::row_count) and
/// [`column_count`](Self::column_count) to the stored cells: a source may
/// answer `None` for any coordinate, in bounds or not. Coordinates are
/// signed so that out-of-range probes such as `-1` reach the source
/// unchanged.
pub trait Values2D {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Returns the cell at `(row, column)`, or `None` if it is absent.
    fn value(&self, row: isize, column: isize) -> Option<f64>;
}

/// An ordered collection of `(key, optional value)` items.
///
/// Items are addressed by position `0..item_count()`; iteration order of the
/// collection defines position.
pub trait KeyedValues {
    /// Key type. Keys are opaque to the aggregation functions.
    type Key: Clone;

    /// Number of items.
    fn item_count(&self) -> usize;

    /// Returns the key at `index`.
    ///
    /// # Panics
    /// Implementations may panic if `index >= item_count()`.
    fn key(&self, index: usize) -> Self::Key;

    /// Returns the value at `index`, or `None` if it is absent.
    fn value(&self, index: usize) -> Option<f64>;
}

impl<T: Values2D + ?Sized> Values2D for &T {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn value(&self, row: isize, column: isize) -> Option<f64> {
        (**self).value(row, column)
    }
}

impl<T: KeyedValues + ?Sized> KeyedValues for &T {
    type Key = T::Key;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn key(&self, index: usize) -> Self::Key {
        (**self).key(index)
    }

    fn value(&self, index: usize) -> Option<f64> {
        (**self).value(index)
    }
}
