//! # u-tabular
//!
//! Small numeric utilities for tabular and keyed data.
//!
//! This crate computes row and column totals over a two-dimensional data
//! source, cumulative percentage distributions over keyed values, and
//! converts primitive arrays into boxed [`number::Number`] sequences. It
//! also provides the immutable interval type [`range::Range`]. It knows
//! nothing about charts, rendering or storage.
//!
//! ## Modules
//!
//! - [`data`] — Capability traits implemented by callers
//! - [`aggregate`] — Totals, cumulative percentages, array conversion
//! - [`collections`] — In-memory implementations of the [`data`] traits
//! - [`range`] — Closed numeric interval
//! - [`number`] — Bit-preserving numeric wrapper
//! - [`error`] — The crate's error type
//!
//! ## Design Philosophy
//!
//! - **Absent is zero**: a missing cell or value is the additive identity
//!   in every sum, never an error
//! - **IEEE-754 all the way**: NaN and infinities propagate; dividing by a
//!   zero total yields NaN rather than failing
//! - **No hidden state**: every function is pure and repeatable
//! - **Property-based testing**: invariants verified via proptest

pub mod aggregate;
pub mod collections;
pub mod data;
pub mod error;
pub mod number;
pub mod range;

pub use error::DataError;
