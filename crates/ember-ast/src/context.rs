//! The arena that owns every node of a compilation unit.

use ember_common::SourceLoc;
use la_arena::Arena;

use crate::decl::Decl;
use crate::expr::{parse_integer_literal, DeclId, Expr, ExprId, ExprKind};
use crate::ty::Ty;

/// Owner of all expressions and declarations of one compilation unit.
///
/// Allocation is a single call returning an index; nothing is freed before
/// the context itself is dropped. Passes that rewrite trees borrow the
/// context mutably, so two rewriting walks can never overlap.
#[derive(Debug, Default)]
pub struct AstContext {
    exprs: Arena<Expr>,
    decls: Arena<Decl>,
}

impl AstContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Allocation ──────────────────────────────────────────────────────

    /// Allocate an expression that has not been type-checked yet.
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        self.exprs.alloc(Expr::new(kind))
    }

    /// Allocate an expression with its type already known.
    pub fn alloc_typed(&mut self, kind: ExprKind, ty: Ty) -> ExprId {
        self.exprs.alloc(Expr::with_ty(kind, ty))
    }

    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        self.decls.alloc(decl)
    }

    // ── Access ──────────────────────────────────────────────────────────

    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id]
    }

    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id]
    }

    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id]
    }

    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id]
    }

    pub fn ty_of(&self, id: ExprId) -> Option<&Ty> {
        self.exprs[id].ty.as_ref()
    }

    pub fn set_ty(&mut self, id: ExprId, ty: Ty) {
        self.exprs[id].ty = Some(ty);
    }

    // ── Derived properties ──────────────────────────────────────────────

    /// The location where the expression starts in the source.
    ///
    /// Leaves report their own token; composites report the start of their
    /// syntactically first piece.
    pub fn start_loc(&self, id: ExprId) -> SourceLoc {
        match &self.exprs[id].kind {
            ExprKind::IntegerLiteral { loc, .. } => *loc,
            ExprKind::DeclRef { loc, .. } => *loc,
            ExprKind::OverloadSetRef { loc, .. } => *loc,
            ExprKind::UnresolvedDeclRef { loc, .. } => *loc,
            ExprKind::UnresolvedMember { colon_loc, .. } => *colon_loc,
            ExprKind::UnresolvedScopedIdentifier { type_decl_loc, .. } => *type_decl_loc,
            ExprKind::Tuple { lparen_loc, .. } => *lparen_loc,
            ExprKind::UnresolvedDot { base, dot_loc, .. } => match base {
                Some(base) => self.start_loc(*base),
                None => *dot_loc,
            },
            ExprKind::TupleElement { base, .. } => self.start_loc(*base),
            ExprKind::Apply { callee, .. } => self.start_loc(*callee),
            ExprKind::Sequence { elements } => match elements.first() {
                Some(first) => self.start_loc(*first),
                None => unreachable!("sequence expression without elements"),
            },
            ExprKind::Block { lbrace_loc, .. } => *lbrace_loc,
            ExprKind::Closure { input } => self.start_loc(*input),
            ExprKind::AnonClosureArg { loc, .. } => *loc,
            ExprKind::Binary { lhs, .. } => self.start_loc(*lhs),
        }
    }

    /// The value of an integer literal.
    ///
    /// Panics if `id` is not an integer literal or its text does not decode;
    /// the parser only builds literals from valid number tokens.
    pub fn integer_value(&self, id: ExprId) -> u64 {
        match &self.exprs[id].kind {
            ExprKind::IntegerLiteral { text, .. } => parse_integer_literal(text)
                .unwrap_or_else(|| panic!("invalid integer literal `{}`", text)),
            other => panic!("integer_value called on {:?}", other),
        }
    }

    /// Number of arguments a closure takes: the parameter count of its
    /// function type.
    pub fn closure_num_args(&self, id: ExprId) -> usize {
        let expr = &self.exprs[id];
        assert!(
            matches!(expr.kind, ExprKind::Closure { .. }),
            "closure_num_args called on a non-closure expression"
        );
        match expr.ty.as_ref().and_then(|ty| ty.as_function()) {
            Some((params, _)) => params.len(),
            None => panic!("closure expression without a function type"),
        }
    }
}
