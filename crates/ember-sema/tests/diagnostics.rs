//! Rendering conversion errors as ariadne reports.

use ember_ast::{AstContext, Decl, ExprKind, Ty};
use ember_common::{SourceLoc, Span};
use ember_sema::{check_conversion, diagnostics::render_diagnostic, ConversionError};

#[test]
fn no_conversion_names_both_types() {
    let source = "let x: () -> Int = flag";
    let mut ctx = AstContext::new();
    let decl = ctx.alloc_decl(Decl::var("flag", SourceLoc(0), Some(Ty::bool()), None));
    let flag = ctx.alloc_typed(
        ExprKind::DeclRef {
            decl,
            loc: SourceLoc(19),
        },
        Ty::bool(),
    );

    let err = check_conversion(&ctx, flag, &Ty::fun(vec![], Ty::int())).unwrap_err();
    let output = render_diagnostic(&err, source, "main.em");

    assert!(output.contains("E0101"), "{}", output);
    assert!(output.contains("cannot convert `Bool` to `() -> Int`"), "{}", output);
    assert!(output.contains("this expression has type `Bool`"), "{}", output);
    assert!(output.contains("function's result"), "{}", output);
}

#[test]
fn untyped_source_has_its_own_code() {
    let err = ConversionError::UntypedSource {
        to: Ty::unnamed_tuple(vec![Ty::int(), Ty::int()]),
        span: Span::new(4, 9),
    };
    let output = render_diagnostic(&err, "let later = 1", "main.em");

    assert!(output.contains("E0102"), "{}", output);
    assert!(output.contains("untyped expression cannot be converted to `(Int, Int)`"));
    assert!(output.contains("this expression has no type yet"));
    assert!(output.contains("matched by name first"));
}

#[test]
fn span_past_the_end_is_clamped() {
    let err = ConversionError::NoConversion {
        from: Ty::bool(),
        to: Ty::int(),
        span: Span::new(40, 40),
    };
    let output = render_diagnostic(&err, "flag", "main.em");
    assert!(output.contains("E0101"), "{}", output);
}
