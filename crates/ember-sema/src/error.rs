//! Errors reported when a required implicit conversion does not exist.
//!
//! Ranking itself never fails; these errors exist for callers that need a
//! conversion to succeed and want something to report when it does not.

use std::fmt;

use ember_ast::Ty;
use ember_common::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum ConversionError {
    /// The expression's type has no implicit conversion to the destination.
    NoConversion { from: Ty, to: Ty, span: Span },
    /// The expression has not been assigned a type, and its structure alone
    /// does not convert to the destination.
    UntypedSource { to: Ty, span: Span },
}

impl ConversionError {
    /// Where the offending expression starts.
    pub fn span(&self) -> Span {
        match self {
            ConversionError::NoConversion { span, .. } | ConversionError::UntypedSource { span, .. } => *span,
        }
    }

    /// The destination type of the failed conversion.
    pub fn target(&self) -> &Ty {
        match self {
            ConversionError::NoConversion { to, .. } | ConversionError::UntypedSource { to, .. } => to,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NoConversion { from, to, .. } => {
                write!(f, "cannot convert `{}` to `{}`", from, to)
            }
            ConversionError::UntypedSource { to, .. } => {
                write!(f, "untyped expression cannot be converted to `{}`", to)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_types() {
        let err = ConversionError::NoConversion {
            from: Ty::bool(),
            to: Ty::fun(vec![], Ty::int()),
            span: Span::new(3, 3),
        };
        assert_eq!(err.to_string(), "cannot convert `Bool` to `() -> Int`");
        assert_eq!(err.span(), Span::new(3, 3));
    }

    #[test]
    fn untyped_display() {
        let err = ConversionError::UntypedSource {
            to: Ty::int(),
            span: Span::new(0, 0),
        };
        assert_eq!(err.to_string(), "untyped expression cannot be converted to `Int`");
        assert_eq!(*err.target(), Ty::int());
    }
}
