//! The slice of the declaration model expression trees refer to.
//!
//! Expressions only need a declaration's name (for printing and operator
//! lookup) and, for variables, the initializer the walker descends into.

use ember_common::SourceLoc;

use crate::expr::ExprId;
use crate::ty::Ty;

#[derive(Clone, Debug)]
pub struct Decl {
    pub name: String,
    pub loc: SourceLoc,
    pub kind: DeclKind,
}

#[derive(Clone, Debug)]
pub enum DeclKind {
    /// A value binding: `var name: ty = init`. Functions and operators are
    /// modelled as variables of function type without an initializer.
    Var { ty: Option<Ty>, init: Option<ExprId> },
    /// A named type: `typealias name = ty`.
    TypeAlias { ty: Ty },
}

impl Decl {
    pub fn var(name: impl Into<String>, loc: SourceLoc, ty: Option<Ty>, init: Option<ExprId>) -> Self {
        Decl {
            name: name.into(),
            loc,
            kind: DeclKind::Var { ty, init },
        }
    }

    pub fn type_alias(name: impl Into<String>, loc: SourceLoc, ty: Ty) -> Self {
        Decl {
            name: name.into(),
            loc,
            kind: DeclKind::TypeAlias { ty },
        }
    }

    /// The declared type, if one has been recorded.
    pub fn ty(&self) -> Option<&Ty> {
        match &self.kind {
            DeclKind::Var { ty, .. } => ty.as_ref(),
            DeclKind::TypeAlias { ty } => Some(ty),
        }
    }

    /// The initializer expression of a variable.
    pub fn init(&self) -> Option<ExprId> {
        match &self.kind {
            DeclKind::Var { init, .. } => *init,
            DeclKind::TypeAlias { .. } => None,
        }
    }
}
