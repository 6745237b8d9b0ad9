//! Implicit conversion ranking for Ember semantic analysis.
//!
//! # Architecture
//!
//! - [`rank`]: [`ConversionRank`] and the ranking algorithm
//! - [`tuple`]: binding source tuple elements to destination fields
//! - [`error`]: errors for conversions that are required but impossible
//! - [`diagnostics`]: ariadne rendering of those errors

pub mod diagnostics;
pub mod error;
pub mod rank;
pub mod tuple;

pub use error::ConversionError;
pub use rank::{check_conversion, conversion_rank, ConversionRank};
pub use tuple::{reconcile_tuple, FieldBinding, TupleMismatch};
