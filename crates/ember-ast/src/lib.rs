//! Ember expression trees.
//!
//! This crate holds the representation semantic analysis works on:
//!
//! - [`ty`]: the type primitives expressions are annotated with
//! - [`expr`] and [`decl`]: the closed set of expression kinds and the
//!   declarations they refer to
//! - [`context`]: the arena owning every node of a compilation unit
//! - [`walk`]: pre/post-order traversal with in-place rewriting
//! - [`print`]: the indented debug dump used by tests

pub mod context;
pub mod decl;
pub mod expr;
pub mod print;
pub mod ty;
pub mod walk;

pub use context::AstContext;
pub use decl::{Decl, DeclKind};
pub use expr::{BlockItem, DeclId, Expr, ExprId, ExprKind, TupleItem};
pub use print::{dump, print, print_to_string, PrintConfig};
pub use ty::{TupleField, Ty, TyCon, TyVar};
pub use walk::{walk, walk_fn, ExprVisitor, Visit, WalkOrder};
