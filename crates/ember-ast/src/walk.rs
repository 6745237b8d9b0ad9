//! Pre/post-order expression walker with in-place rewriting.
//!
//! [`walk`] calls the visitor before and after the children of every node.
//! The pre-order callback may skip a subtree; the post-order callback
//! returns the node that takes this node's place in its parent, or `None`
//! to abort the entire walk. Each child slot is written back as soon as
//! that child has been processed, so later siblings already see earlier
//! replacements.
//!
//! An aborted walk leaves completed rewrites in place. Callers treat it as a
//! failed pass; there is no rollback.

use tracing::{debug, trace};

use crate::context::AstContext;
use crate::decl::DeclKind;
use crate::expr::{BlockItem, DeclId, ExprId, ExprKind};

/// Which side of a node's children the visitor is being called on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOrder {
    PreOrder,
    PostOrder,
}

/// The pre-order decision for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Process the children, then call `post_visit`.
    Descend,
    /// Leave the subtree untouched. The node stays in place, its children
    /// are not visited and `post_visit` is not called for it.
    Skip,
}

/// Callbacks for [`walk`]. Both default to leaving the tree as it is.
pub trait ExprVisitor {
    fn pre_visit(&mut self, _ctx: &mut AstContext, _expr: ExprId) -> Visit {
        Visit::Descend
    }

    /// Returns the replacement for `expr` (often `expr` itself), or `None`
    /// to abort the walk.
    fn post_visit(&mut self, _ctx: &mut AstContext, expr: ExprId) -> Option<ExprId> {
        Some(expr)
    }
}

/// Adapter turning a single `(ctx, expr, order)` callback into a visitor.
///
/// In pre-order a `None` result skips the subtree and any `Some` descends;
/// in post-order the result is the replacement, `None` aborting the walk.
pub struct WalkFn<F>(pub F);

impl<F> ExprVisitor for WalkFn<F>
where
    F: FnMut(&mut AstContext, ExprId, WalkOrder) -> Option<ExprId>,
{
    fn pre_visit(&mut self, ctx: &mut AstContext, expr: ExprId) -> Visit {
        match (self.0)(ctx, expr, WalkOrder::PreOrder) {
            Some(_) => Visit::Descend,
            None => Visit::Skip,
        }
    }

    fn post_visit(&mut self, ctx: &mut AstContext, expr: ExprId) -> Option<ExprId> {
        (self.0)(ctx, expr, WalkOrder::PostOrder)
    }
}

/// Walk the tree rooted at `root`.
///
/// Returns the (possibly replaced) root, or `None` if the walk was aborted.
pub fn walk<V: ExprVisitor + ?Sized>(
    ctx: &mut AstContext,
    root: ExprId,
    visitor: &mut V,
) -> Option<ExprId> {
    process_node(ctx, root, visitor)
}

/// [`walk`] with a closure visitor; see [`WalkFn`].
pub fn walk_fn<F>(ctx: &mut AstContext, root: ExprId, f: F) -> Option<ExprId>
where
    F: FnMut(&mut AstContext, ExprId, WalkOrder) -> Option<ExprId>,
{
    walk(ctx, root, &mut WalkFn(f))
}

fn process_node<V: ExprVisitor + ?Sized>(
    ctx: &mut AstContext,
    expr: ExprId,
    visitor: &mut V,
) -> Option<ExprId> {
    if visitor.pre_visit(ctx, expr) == Visit::Skip {
        trace!(?expr, "subtree skipped");
        return Some(expr);
    }

    for slot in child_slots(ctx, expr) {
        let child = *slot_mut(ctx, expr, slot);
        let replacement = process_node(ctx, child, visitor)?;
        *slot_mut(ctx, expr, slot) = replacement;
    }

    let result = visitor.post_visit(ctx, expr);
    if result.is_none() {
        debug!(?expr, "walk aborted by visitor");
    }
    result
}

/// A structural child position inside a parent expression.
#[derive(Clone, Copy, Debug)]
enum ChildSlot {
    TupleElement(usize),
    Base,
    Callee,
    Arg,
    Element(usize),
    Initializer(DeclId),
    Input,
    Lhs,
    Rhs,
}

/// The child slots of `expr`, in evaluation order.
///
/// Missing tuple values and a missing dot base are not slots. Block
/// declarations contribute their initializer, if any.
fn child_slots(ctx: &AstContext, expr: ExprId) -> Vec<ChildSlot> {
    match &ctx.expr(expr).kind {
        ExprKind::IntegerLiteral { .. }
        | ExprKind::DeclRef { .. }
        | ExprKind::OverloadSetRef { .. }
        | ExprKind::UnresolvedDeclRef { .. }
        | ExprKind::UnresolvedMember { .. }
        | ExprKind::UnresolvedScopedIdentifier { .. }
        | ExprKind::AnonClosureArg { .. } => Vec::new(),
        ExprKind::Tuple { elements, .. } => elements
            .iter()
            .enumerate()
            .filter(|(_, elt)| elt.value.is_some())
            .map(|(i, _)| ChildSlot::TupleElement(i))
            .collect(),
        ExprKind::UnresolvedDot { base, .. } => match base {
            Some(_) => vec![ChildSlot::Base],
            None => Vec::new(),
        },
        ExprKind::TupleElement { .. } => vec![ChildSlot::Base],
        ExprKind::Apply { .. } => vec![ChildSlot::Callee, ChildSlot::Arg],
        ExprKind::Sequence { elements } => (0..elements.len()).map(ChildSlot::Element).collect(),
        ExprKind::Block { items, .. } => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                BlockItem::Expr(_) => Some(ChildSlot::Element(i)),
                BlockItem::Decl(decl) => ctx
                    .decl(*decl)
                    .init()
                    .map(|_| ChildSlot::Initializer(*decl)),
            })
            .collect(),
        ExprKind::Closure { .. } => vec![ChildSlot::Input],
        ExprKind::Binary { .. } => vec![ChildSlot::Lhs, ChildSlot::Rhs],
    }
}

fn slot_mut(ctx: &mut AstContext, parent: ExprId, slot: ChildSlot) -> &mut ExprId {
    if let ChildSlot::Initializer(decl) = slot {
        return match &mut ctx.decl_mut(decl).kind {
            DeclKind::Var { init: Some(init), .. } => init,
            _ => unreachable!("initializer slot on a declaration without one"),
        };
    }
    match (&mut ctx.expr_mut(parent).kind, slot) {
        (ExprKind::Tuple { elements, .. }, ChildSlot::TupleElement(i)) => match &mut elements[i].value {
            Some(value) => value,
            None => unreachable!("tuple element {} has no value", i),
        },
        (ExprKind::UnresolvedDot { base: Some(base), .. }, ChildSlot::Base) => base,
        (ExprKind::TupleElement { base, .. }, ChildSlot::Base) => base,
        (ExprKind::Apply { callee, .. }, ChildSlot::Callee) => callee,
        (ExprKind::Apply { arg, .. }, ChildSlot::Arg) => arg,
        (ExprKind::Sequence { elements }, ChildSlot::Element(i)) => &mut elements[i],
        (ExprKind::Block { items, .. }, ChildSlot::Element(i)) => match &mut items[i] {
            BlockItem::Expr(e) => e,
            BlockItem::Decl(_) => unreachable!("block item {} is a declaration", i),
        },
        (ExprKind::Closure { input }, ChildSlot::Input) => input,
        (ExprKind::Binary { lhs, .. }, ChildSlot::Lhs) => lhs,
        (ExprKind::Binary { rhs, .. }, ChildSlot::Rhs) => rhs,
        (kind, slot) => unreachable!("{:?} is not a child slot of {:?}", slot, kind),
    }
}
