//! Debug printer snapshot tests.

use ember_ast::print::{print, print_decl, print_with_config};
use ember_ast::{
    print_to_string, AstContext, Decl, ExprId, ExprKind, PrintConfig, TupleField, TupleItem, Ty,
};
use ember_common::SourceLoc;

fn loc() -> SourceLoc {
    SourceLoc(0)
}

fn int(ctx: &mut AstContext, text: &str) -> ExprId {
    ctx.alloc_typed(
        ExprKind::IntegerLiteral {
            text: text.to_string(),
            loc: loc(),
        },
        Ty::int(),
    )
}

fn func_decl(ctx: &mut AstContext, name: &str, ty: Ty) -> ember_ast::DeclId {
    ctx.alloc_decl(Decl::var(name, loc(), Some(ty), None))
}

#[test]
fn leaf_clauses() {
    let mut ctx = AstContext::new();
    let add_ty = Ty::fun(vec![Ty::int(), Ty::int()], Ty::int());
    let add = func_decl(&mut ctx, "+", add_ty.clone());
    let add_float = func_decl(&mut ctx, "+", Ty::fun(vec![], Ty::int()));
    let point = ctx.alloc_decl(Decl::type_alias(
        "Point",
        loc(),
        Ty::unnamed_tuple(vec![Ty::int(), Ty::int()]),
    ));

    let leaves = vec![
        int(&mut ctx, "0x10"),
        ctx.alloc_typed(ExprKind::DeclRef { decl: add, loc: loc() }, add_ty),
        ctx.alloc_expr(ExprKind::OverloadSetRef {
            decls: vec![add, add_float],
            loc: loc(),
        }),
        ctx.alloc_expr(ExprKind::UnresolvedDeclRef {
            name: "foo".to_string(),
            loc: loc(),
        }),
        ctx.alloc_expr(ExprKind::UnresolvedMember {
            name: "none".to_string(),
            colon_loc: loc(),
            name_loc: loc(),
        }),
        ctx.alloc_expr(ExprKind::UnresolvedScopedIdentifier {
            type_decl: point,
            type_decl_loc: loc(),
            name: "origin".to_string(),
            name_loc: loc(),
        }),
        ctx.alloc_typed(ExprKind::AnonClosureArg { index: 1, loc: loc() }, Ty::int()),
    ];
    let seq = ctx.alloc_expr(ExprKind::Sequence { elements: leaves });

    insta::assert_snapshot!(print_to_string(&ctx, seq), @r"
    (sequence_expr type='<null>'
      (integer_literal type='Int' value=0x10)
      (declref_expr type='(Int, Int) -> Int' decl=+)
      (overloadsetref_expr type='<null>' decl=+)
      (unresolved_decl_ref_expr type='<null>' name=foo)
      (unresolved_member_expr type='<null>' name='none')
      (unresolved_scoped_identifier_expr type='Point' name='origin')
      (anon_closure_arg_expr type='Int' ArgNo=1))
    ");
}

#[test]
fn tuple_with_default_placeholder() {
    let mut ctx = AstContext::new();
    let one = int(&mut ctx, "1");
    let ty = Ty::tuple(vec![
        TupleField::named("a", Ty::int()),
        TupleField::named("b", Ty::int()).with_default(),
    ]);
    let t = ctx.alloc_typed(
        ExprKind::Tuple {
            lparen_loc: loc(),
            elements: vec![
                TupleItem::named("a", one),
                TupleItem {
                    name: Some("b".to_string()),
                    value: None,
                },
            ],
            rparen_loc: loc(),
            parenthesized: true,
        },
        ty,
    );

    insta::assert_snapshot!(print_to_string(&ctx, t), @r"
    (tuple_expr type='(a: Int, b: Int = default)'
      (integer_literal type='Int' value=1)
      <<tuple element default value>>)
    ");
}

#[test]
fn member_projections() {
    let mut ctx = AstContext::new();
    let p = ctx.alloc_expr(ExprKind::UnresolvedDeclRef {
        name: "p".to_string(),
        loc: loc(),
    });
    let x_decl = func_decl(&mut ctx, "x", Ty::int());
    let dot = ctx.alloc_expr(ExprKind::UnresolvedDot {
        base: Some(p),
        dot_loc: loc(),
        name: "x".to_string(),
        name_loc: loc(),
        resolved_decls: vec![x_decl],
    });
    let bare_dot = ctx.alloc_expr(ExprKind::UnresolvedDot {
        base: None,
        dot_loc: loc(),
        name: "y".to_string(),
        name_loc: loc(),
        resolved_decls: Vec::new(),
    });
    let projection = ctx.alloc_typed(
        ExprKind::TupleElement {
            base: dot,
            field_index: 1,
            name_loc: loc(),
        },
        Ty::int(),
    );
    let seq = ctx.alloc_expr(ExprKind::Sequence {
        elements: vec![projection, bare_dot],
    });

    insta::assert_snapshot!(print_to_string(&ctx, seq), @r"
    (sequence_expr type='<null>'
      (tuple_element_expr type='Int' field #1
        (unresolved_dot_expr type='<null>' field 'x' decl resolved to 1 candidate(s)!
          (unresolved_decl_ref_expr type='<null>' name=p)))
      (unresolved_dot_expr type='<null>' field 'y'))
    ");
}

#[test]
fn binary_operator_names() {
    let mut ctx = AstContext::new();
    let plus = func_decl(&mut ctx, "+", Ty::fun(vec![Ty::int(), Ty::int()], Ty::int()));
    let plus_ref = ctx.alloc_expr(ExprKind::DeclRef { decl: plus, loc: loc() });
    let one = int(&mut ctx, "1");
    let two = int(&mut ctx, "2");
    let sum = ctx.alloc_typed(
        ExprKind::Binary {
            op: Some(plus_ref),
            lhs: one,
            rhs: two,
        },
        Ty::int(),
    );

    let target = ctx.alloc_expr(ExprKind::UnresolvedDeclRef {
        name: "x".to_string(),
        loc: loc(),
    });
    let three = int(&mut ctx, "3");
    let assign = ctx.alloc_expr(ExprKind::Binary {
        op: None,
        lhs: target,
        rhs: three,
    });

    let weird_op = int(&mut ctx, "9");
    let four = int(&mut ctx, "4");
    let five = int(&mut ctx, "5");
    let unknown = ctx.alloc_expr(ExprKind::Binary {
        op: Some(weird_op),
        lhs: four,
        rhs: five,
    });

    let seq = ctx.alloc_expr(ExprKind::Sequence {
        elements: vec![sum, assign, unknown],
    });
    insta::assert_snapshot!(print_to_string(&ctx, seq), @r"
    (sequence_expr type='<null>'
      (binary_expr '+' type='Int'
        (integer_literal type='Int' value=1)
        (integer_literal type='Int' value=2))
      (binary_expr '=' type='<null>'
        (unresolved_decl_ref_expr type='<null>' name=x)
        (integer_literal type='Int' value=3))
      (binary_expr '***UNKNOWN***' type='<null>'
        (integer_literal type='Int' value=4)
        (integer_literal type='Int' value=5)))
    ");
}

#[test]
fn closure_and_apply_with_indent_and_config() {
    let mut ctx = AstContext::new();
    let arg = ctx.alloc_typed(ExprKind::AnonClosureArg { index: 0, loc: loc() }, Ty::int());
    let closure = ctx.alloc_typed(
        ExprKind::Closure { input: arg },
        Ty::fun(vec![Ty::int()], Ty::int()),
    );
    let one = int(&mut ctx, "1");
    let call = ctx.alloc_typed(ExprKind::Apply { callee: closure, arg: one }, Ty::int());

    let mut out = String::new();
    print(&ctx, call, &mut out, 2).unwrap();
    assert_eq!(
        out,
        "  (apply_expr type='Int'\n    (closure_expr type='(Int) -> Int'\n      \
         (anon_closure_arg_expr type='Int' ArgNo=0))\n    (integer_literal type='Int' value=1))"
    );

    let mut wide = String::new();
    print_with_config(&ctx, closure, &mut wide, 0, &PrintConfig { indent_size: 4 }).unwrap();
    assert_eq!(
        wide,
        "(closure_expr type='(Int) -> Int'\n    (anon_closure_arg_expr type='Int' ArgNo=0))"
    );
}

#[test]
fn declaration_without_initializer() {
    let mut ctx = AstContext::new();
    let decl = ctx.alloc_decl(Decl::var("pending", loc(), None, None));
    let mut out = String::new();
    print_decl(&ctx, decl, &mut out, 0).unwrap();
    assert_eq!(out, "(var_decl 'pending' type='<null>')");
}
