//! In-memory implementations of the [`crate::data`] traits.

mod keyed;
mod table;

pub use keyed::DefaultKeyedValues;
pub use table::DefaultTable;
