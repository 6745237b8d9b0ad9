//! Expression nodes.
//!
//! The set of expression kinds is closed: every pass dispatches with an
//! exhaustive `match` on [`ExprKind`], so adding a kind is a compile error in
//! the walker, the printer, location computation and conversion ranking
//! until each of them handles it.
//!
//! Children are referenced by [`ExprId`] into the owning
//! [`AstContext`](crate::AstContext) arena. Nodes are never freed or copied
//! between contexts; the child slots are the only part of a node that
//! changes after construction, and only through the tree walker.

use ember_common::SourceLoc;
use la_arena::Idx;

use crate::decl::Decl;
use crate::ty::Ty;

/// Index of an expression in its context's arena.
pub type ExprId = Idx<Expr>;

/// Index of a declaration in its context's arena.
pub type DeclId = Idx<Decl>;

/// An expression node: its kind plus the type assigned by the checker.
///
/// `ty` is `None` until type checking reaches the node, and may be
/// transiently `None` again while a pass is rewriting the tree.
#[derive(Clone, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Option<Ty>,
}

#[derive(Clone, Debug)]
pub enum ExprKind {
    /// An integer literal, kept as written (`42`, `0x2a`).
    IntegerLiteral { text: String, loc: SourceLoc },
    /// A reference to a resolved declaration.
    DeclRef { decl: DeclId, loc: SourceLoc },
    /// A reference to a set of overloaded declarations. Never empty.
    OverloadSetRef { decls: Vec<DeclId>, loc: SourceLoc },
    /// An identifier that name lookup has not resolved yet.
    UnresolvedDeclRef { name: String, loc: SourceLoc },
    /// `:name`, a member of a contextual type that is not known yet.
    UnresolvedMember {
        name: String,
        colon_loc: SourceLoc,
        name_loc: SourceLoc,
    },
    /// `Type::name`.
    UnresolvedScopedIdentifier {
        type_decl: DeclId,
        type_decl_loc: SourceLoc,
        name: String,
        name_loc: SourceLoc,
    },
    /// `(a, name: b, ...)`. A single unnamed element inside parentheses is a
    /// grouping parenthesis rather than a one-element tuple.
    Tuple {
        lparen_loc: SourceLoc,
        elements: Vec<TupleItem>,
        rparen_loc: SourceLoc,
        parenthesized: bool,
    },
    /// `base.name` before member lookup.
    UnresolvedDot {
        base: Option<ExprId>,
        dot_loc: SourceLoc,
        name: String,
        name_loc: SourceLoc,
        resolved_decls: Vec<DeclId>,
    },
    /// `base.N`, a tuple field projection by resolved index.
    TupleElement {
        base: ExprId,
        field_index: usize,
        name_loc: SourceLoc,
    },
    /// `callee arg`.
    Apply { callee: ExprId, arg: ExprId },
    /// Expressions evaluated in order. Never empty.
    Sequence { elements: Vec<ExprId> },
    /// `{ ... }` holding expressions and local declarations.
    Block {
        lbrace_loc: SourceLoc,
        items: Vec<BlockItem>,
        rbrace_loc: SourceLoc,
    },
    /// A closure whose body is the single expression `input`.
    Closure { input: ExprId },
    /// `$N`, an anonymous positional closure argument.
    AnonClosureArg { index: u32, loc: SourceLoc },
    /// `lhs op rhs`. `op` refers to the operator function; it is absent for
    /// plain assignment.
    Binary {
        op: Option<ExprId>,
        lhs: ExprId,
        rhs: ExprId,
    },
}

/// One element of a tuple expression.
///
/// `value` is `None` once a pass has decided the element takes the default
/// value of the corresponding field.
#[derive(Clone, Debug)]
pub struct TupleItem {
    pub name: Option<String>,
    pub value: Option<ExprId>,
}

impl TupleItem {
    pub fn unnamed(value: ExprId) -> Self {
        TupleItem {
            name: None,
            value: Some(value),
        }
    }

    pub fn named(name: impl Into<String>, value: ExprId) -> Self {
        TupleItem {
            name: Some(name.into()),
            value: Some(value),
        }
    }

    /// The element label, treating an empty name as no name.
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// An entry of a block: an expression or a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockItem {
    Expr(ExprId),
    Decl(DeclId),
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind, ty: None }
    }

    pub fn with_ty(kind: ExprKind, ty: Ty) -> Self {
        Expr { kind, ty: Some(ty) }
    }

    /// The wrapped expression if this is a grouping parenthesis `(e)`.
    pub fn grouping_paren_inner(&self) -> Option<ExprId> {
        match &self.kind {
            ExprKind::Tuple {
                elements,
                parenthesized: true,
                ..
            } => match elements.as_slice() {
                [only] if only.label().is_none() => only.value,
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_grouping_paren(&self) -> bool {
        self.grouping_paren_inner().is_some()
    }
}

/// Decode integer literal text, detecting the radix from its prefix:
/// `0x` hexadecimal, `0b` binary, `0o` or a bare leading `0` octal,
/// decimal otherwise.
pub fn parse_integer_literal(text: &str) -> Option<u64> {
    let (digits, radix) = if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (rest, 16)
    } else if let Some(rest) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (rest, 2)
    } else if let Some(rest) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
        (rest, 8)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}
