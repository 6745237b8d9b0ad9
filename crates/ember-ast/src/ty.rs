//! Type primitives consumed by expression trees and conversion ranking.
//!
//! Ember's semantic analysis only needs a narrow view of the type system:
//! canonical equality, tuple and function introspection, and whether a type
//! is still unresolved. [`Ty`] provides exactly that. Aliases are the only
//! sugar; [`Ty::canonical`] strips them so that two spellings of the same
//! type compare equal.

use std::fmt;

/// A type variable standing for a type that has not been resolved yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TyVar(pub u32);

/// A type constructor -- a named type like `Int`, `String`, `Bool`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TyCon {
    pub name: String,
}

impl TyCon {
    pub fn new(name: impl Into<String>) -> Self {
        TyCon { name: name.into() }
    }
}

impl fmt::Display for TyCon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One field of a tuple type: `name: Ty`, optionally with a default value.
///
/// Only the presence of a default matters here; the default expression
/// itself belongs to the declaration that introduced the tuple type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleField {
    pub name: Option<String>,
    pub ty: Ty,
    pub has_default: bool,
}

impl TupleField {
    /// An unnamed field without a default.
    pub fn positional(ty: Ty) -> Self {
        TupleField {
            name: None,
            ty,
            has_default: false,
        }
    }

    /// A named field without a default.
    pub fn named(name: impl Into<String>, ty: Ty) -> Self {
        TupleField {
            name: Some(name.into()),
            ty,
            has_default: false,
        }
    }

    /// Mark this field as carrying a default value.
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// The field name, treating an empty name as no name.
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// An Ember type.
///
/// - `Var`: an unresolved type (dependent on inference that has not finished)
/// - `Con`: a concrete nominal type (Int, String, Bool, ...)
/// - `Alias`: a named spelling of another type; removed by canonicalization
/// - `Fun`: a function type `(params) -> result`
/// - `Tuple`: a tuple type with optionally named, optionally defaulted fields
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Var(TyVar),
    Con(TyCon),
    Alias(String, Box<Ty>),
    Fun(Vec<Ty>, Box<Ty>),
    Tuple(Vec<TupleField>),
}

impl Ty {
    /// Create an `Int` type.
    pub fn int() -> Ty {
        Ty::Con(TyCon::new("Int"))
    }

    /// Create a `Bool` type.
    pub fn bool() -> Ty {
        Ty::Con(TyCon::new("Bool"))
    }

    /// Create a `String` type.
    pub fn string() -> Ty {
        Ty::Con(TyCon::new("String"))
    }

    /// Create a function type.
    pub fn fun(params: Vec<Ty>, ret: Ty) -> Ty {
        Ty::Fun(params, Box::new(ret))
    }

    /// Create a tuple type from its fields.
    pub fn tuple(fields: Vec<TupleField>) -> Ty {
        Ty::Tuple(fields)
    }

    /// Create a tuple type of unnamed, non-defaulted fields.
    pub fn unnamed_tuple(elems: Vec<Ty>) -> Ty {
        Ty::Tuple(elems.into_iter().map(TupleField::positional).collect())
    }

    /// Create a named alias for `target`.
    pub fn alias(name: impl Into<String>, target: Ty) -> Ty {
        Ty::Alias(name.into(), Box::new(target))
    }

    /// The type with every alias replaced by its target, at every depth.
    pub fn canonical(&self) -> Ty {
        match self {
            Ty::Var(_) | Ty::Con(_) => self.clone(),
            Ty::Alias(_, target) => target.canonical(),
            Ty::Fun(params, ret) => Ty::Fun(
                params.iter().map(Ty::canonical).collect(),
                Box::new(ret.canonical()),
            ),
            Ty::Tuple(fields) => Ty::Tuple(
                fields
                    .iter()
                    .map(|f| TupleField {
                        name: f.name.clone(),
                        ty: f.ty.canonical(),
                        has_default: f.has_default,
                    })
                    .collect(),
            ),
        }
    }

    /// Whether `self` and `other` denote the same type once aliases are gone.
    pub fn is_canonically_equal(&self, other: &Ty) -> bool {
        self.canonical() == other.canonical()
    }

    /// Look through aliases to the outermost non-alias type.
    pub fn desugared(&self) -> &Ty {
        let mut ty = self;
        while let Ty::Alias(_, target) = ty {
            ty = target;
        }
        ty
    }

    /// The fields of this type if it is (an alias of) a tuple type.
    pub fn as_tuple(&self) -> Option<&[TupleField]> {
        match self.desugared() {
            Ty::Tuple(fields) => Some(fields),
            _ => None,
        }
    }

    /// The parameters and result of this type if it is (an alias of) a
    /// function type.
    pub fn as_function(&self) -> Option<(&[Ty], &Ty)> {
        match self.desugared() {
            Ty::Fun(params, ret) => Some((params, ret)),
            _ => None,
        }
    }

    /// Whether this type is still an unresolved variable.
    pub fn is_unresolved(&self) -> bool {
        matches!(self.desugared(), Ty::Var(_))
    }

    /// The field a scalar value initializes when it is converted to this
    /// tuple type: the only field without a default.
    ///
    /// Returns `None` for non-tuple types and for tuples where zero or more
    /// than one field lacks a default.
    pub fn scalar_init_field(&self) -> Option<usize> {
        let fields = self.as_tuple()?;
        let mut required = fields
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.has_default)
            .map(|(i, _)| i);
        let first = required.next()?;
        match required.next() {
            None => Some(first),
            Some(_) => None,
        }
    }
}

impl fmt::Display for TupleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.label() {
            write!(f, "{}: ", name)?;
        }
        write!(f, "{}", self.ty)?;
        if self.has_default {
            write!(f, " = default")?;
        }
        Ok(())
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Var(v) => write!(f, "?{}", v.0),
            Ty::Con(c) => write!(f, "{}", c),
            Ty::Alias(name, _) => write!(f, "{}", name),
            Ty::Fun(params, ret) => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ") -> {}", ret)
            }
            Ty::Tuple(fields) => {
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, ")")
            }
        }
    }
}
