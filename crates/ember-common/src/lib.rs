//! Shared types for the Ember compiler.
//!
//! Positions are byte offsets into the source text. A [`SourceLoc`] names a
//! single point (the start of an expression, a delimiter), a [`Span`] a
//! half-open range handed to the diagnostic renderer.

pub mod span;

pub use span::{SourceLoc, Span};
