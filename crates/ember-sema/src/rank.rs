//! Implicit conversion ranking.
//!
//! [`conversion_rank`] answers whether an expression can be implicitly
//! converted to a destination type, and how:
//!
//! 1. Canonically equal types convert by identity.
//! 2. A grouping parenthesis `(e)` converts like `e`.
//! 3. To a tuple type: a tuple literal is reconciled element by element; any
//!    other expression initializes the single field without a default; a
//!    tuple-typed expression may only permute its fields.
//! 4. To a function type: the expression is wrapped in a closure producing
//!    it, provided it converts to the function's result type.
//!
//! Anything else is [`ConversionRank::Invalid`], which is an ordinary result,
//! not an error.

use std::fmt;

use ember_ast::{AstContext, ExprId, ExprKind, TupleField, TupleItem, Ty};
use ember_common::Span;
use serde::Serialize;
use tracing::trace;

use crate::error::ConversionError;
use crate::tuple::{reconcile_tuple, FieldBinding};

/// The cost of an implicit conversion, ordered from cheapest to impossible.
///
/// Combining the ranks of several element conversions takes the maximum;
/// `Invalid` absorbs everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConversionRank {
    /// No conversion: the value already has the destination type, or only
    /// its tuple fields are rearranged.
    Identity,
    /// The value is wrapped in a zero-argument closure that produces it.
    AutoClosure,
    /// No implicit conversion exists.
    Invalid,
}

impl ConversionRank {
    /// The worse of two ranks.
    pub fn combine(self, other: ConversionRank) -> ConversionRank {
        self.max(other)
    }

    pub fn is_valid(self) -> bool {
        self != ConversionRank::Invalid
    }
}

impl fmt::Display for ConversionRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionRank::Identity => write!(f, "identity"),
            ConversionRank::AutoClosure => write!(f, "auto-closure"),
            ConversionRank::Invalid => write!(f, "invalid"),
        }
    }
}

/// Rank the implicit conversion of `expr` to `dest`.
///
/// Panics if `dest`, or a type it leads to during ranking, is still
/// unresolved: conversions are only ranked once the destination is known.
pub fn conversion_rank(ctx: &AstContext, expr: ExprId, dest: &Ty) -> ConversionRank {
    let rank = rank_of(ctx, expr, dest);
    trace!(?expr, %dest, %rank, "ranked conversion");
    rank
}

/// Like [`conversion_rank`], but reports an impossible conversion as an
/// error carrying the types involved and the expression's location.
pub fn check_conversion(
    ctx: &AstContext,
    expr: ExprId,
    dest: &Ty,
) -> Result<ConversionRank, ConversionError> {
    let rank = conversion_rank(ctx, expr, dest);
    if rank.is_valid() {
        return Ok(rank);
    }
    let span = Span::from(ctx.start_loc(expr));
    match ctx.ty_of(expr) {
        Some(from) => Err(ConversionError::NoConversion {
            from: from.clone(),
            to: dest.clone(),
            span,
        }),
        None => Err(ConversionError::UntypedSource {
            to: dest.clone(),
            span,
        }),
    }
}

fn rank_of(ctx: &AstContext, expr: ExprId, dest: &Ty) -> ConversionRank {
    assert!(
        !dest.is_unresolved(),
        "conversion destination `{}` is unresolved",
        dest
    );
    let node = ctx.expr(expr);

    if let Some(ty) = &node.ty {
        if ty.is_canonically_equal(dest) {
            return ConversionRank::Identity;
        }
    }

    if let Some(inner) = node.grouping_paren_inner() {
        return rank_of(ctx, inner, dest);
    }

    if let Some(fields) = dest.as_tuple() {
        if let Some(items) = tuple_literal_items(&node.kind) {
            return literal_tuple_rank(ctx, items, fields);
        }
        if let Some(field) = dest.scalar_init_field() {
            return rank_of(ctx, expr, &fields[field].ty);
        }
        if let Some(source_fields) = node.ty.as_ref().and_then(|ty| ty.as_tuple()) {
            return structural_tuple_rank(source_fields, fields);
        }
        return ConversionRank::Invalid;
    }

    if let Some((_, result)) = dest.as_function() {
        return match rank_of(ctx, expr, result) {
            ConversionRank::Invalid => ConversionRank::Invalid,
            ConversionRank::Identity | ConversionRank::AutoClosure => ConversionRank::AutoClosure,
        };
    }

    ConversionRank::Invalid
}

/// The elements of a tuple literal; `None` for every other kind.
fn tuple_literal_items(kind: &ExprKind) -> Option<&[TupleItem]> {
    match kind {
        ExprKind::Tuple { elements, .. } => Some(elements),
        ExprKind::IntegerLiteral { .. }
        | ExprKind::DeclRef { .. }
        | ExprKind::OverloadSetRef { .. }
        | ExprKind::UnresolvedDeclRef { .. }
        | ExprKind::UnresolvedMember { .. }
        | ExprKind::UnresolvedScopedIdentifier { .. }
        | ExprKind::UnresolvedDot { .. }
        | ExprKind::TupleElement { .. }
        | ExprKind::Apply { .. }
        | ExprKind::Sequence { .. }
        | ExprKind::Block { .. }
        | ExprKind::Closure { .. }
        | ExprKind::AnonClosureArg { .. }
        | ExprKind::Binary { .. } => None,
    }
}

/// Reconcile a tuple literal with `dest`, converting each bound element.
fn literal_tuple_rank(ctx: &AstContext, items: &[TupleItem], dest: &[TupleField]) -> ConversionRank {
    let names: Vec<Option<&str>> = items.iter().map(TupleItem::label).collect();
    let bindings = match reconcile_tuple(&names, dest) {
        Ok(bindings) => bindings,
        Err(mismatch) => {
            trace!(%mismatch, "tuple literal does not reconcile");
            return ConversionRank::Invalid;
        }
    };

    let mut rank = ConversionRank::Identity;
    for (field, binding) in dest.iter().zip(bindings) {
        let FieldBinding::BoundTo(index) = binding else {
            continue;
        };
        // An element already replaced by its default matches the field.
        let Some(value) = items[index].value else {
            continue;
        };
        rank = rank.combine(rank_of(ctx, value, &field.ty));
        if rank == ConversionRank::Invalid {
            break;
        }
    }
    rank
}

/// Reconcile a tuple-typed value with `dest`. Fields may be permuted or
/// defaulted, but each bound field must already have the destination type.
fn structural_tuple_rank(source: &[TupleField], dest: &[TupleField]) -> ConversionRank {
    let names: Vec<Option<&str>> = source.iter().map(TupleField::label).collect();
    let bindings = match reconcile_tuple(&names, dest) {
        Ok(bindings) => bindings,
        Err(mismatch) => {
            trace!(%mismatch, "tuple value does not reconcile");
            return ConversionRank::Invalid;
        }
    };

    let all_exact = dest.iter().zip(bindings).all(|(field, binding)| match binding {
        FieldBinding::BoundTo(index) => source[index].ty.is_canonically_equal(&field.ty),
        FieldBinding::UseDefault => true,
    });
    if all_exact {
        ConversionRank::Identity
    } else {
        ConversionRank::Invalid
    }
}
