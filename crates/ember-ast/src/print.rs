//! Indented debug dump of expression trees.
//!
//! Each node prints as a parenthesized clause carrying its type, with
//! children on the following lines one indentation step deeper. A tuple
//! element whose value was replaced by its default prints as a placeholder
//! line so that two dumps can be diffed structurally. The output is meant
//! for tests and debugging only.

use std::fmt::{self, Write};

use crate::context::AstContext;
use crate::decl::DeclKind;
use crate::expr::{BlockItem, DeclId, ExprId, ExprKind};
use crate::ty::Ty;

/// Configuration for the debug printer.
#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Extra indentation applied to each level of children. Default: 2.
    pub indent_size: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self { indent_size: 2 }
    }
}

/// Print `expr` into `out`, starting `indent` columns in.
pub fn print<W: Write>(ctx: &AstContext, expr: ExprId, out: &mut W, indent: usize) -> fmt::Result {
    print_with_config(ctx, expr, out, indent, &PrintConfig::default())
}

pub fn print_with_config<W: Write>(
    ctx: &AstContext,
    expr: ExprId,
    out: &mut W,
    indent: usize,
    config: &PrintConfig,
) -> fmt::Result {
    Printer {
        ctx,
        out,
        indent,
        config,
    }
    .visit(expr)
}

/// Print a declaration clause.
pub fn print_decl<W: Write>(ctx: &AstContext, decl: DeclId, out: &mut W, indent: usize) -> fmt::Result {
    Printer {
        ctx,
        out,
        indent,
        config: &PrintConfig::default(),
    }
    .visit_decl(decl)
}

/// Render `expr` with the default configuration.
pub fn print_to_string(ctx: &AstContext, expr: ExprId) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = print(ctx, expr, &mut out, 0);
    out
}

/// Print `expr` to stderr, followed by a newline.
pub fn dump(ctx: &AstContext, expr: ExprId) {
    eprintln!("{}", print_to_string(ctx, expr));
}

/// A type slot in a clause; `<null>` when the checker has not set it.
struct TyLabel<'a>(Option<&'a Ty>);

impl fmt::Display for TyLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ty) => write!(f, "{}", ty),
            None => write!(f, "<null>"),
        }
    }
}

struct Printer<'a, W> {
    ctx: &'a AstContext,
    out: &'a mut W,
    indent: usize,
    config: &'a PrintConfig,
}

impl<'a, W: Write> Printer<'a, W> {
    fn pad(&mut self, width: usize) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = width)
    }

    /// Print a child one level deeper.
    fn print_rec(&mut self, expr: ExprId) -> fmt::Result {
        self.indent += self.config.indent_size;
        let result = self.visit(expr);
        self.indent -= self.config.indent_size;
        result
    }

    fn print_rec_decl(&mut self, decl: DeclId) -> fmt::Result {
        self.indent += self.config.indent_size;
        let result = self.visit_decl(decl);
        self.indent -= self.config.indent_size;
        result
    }

    fn decl_name(&self, decl: DeclId) -> &'a str {
        &self.ctx.decl(decl).name
    }

    fn first_decl_name(&self, decls: &[DeclId]) -> &'a str {
        match decls.first() {
            Some(decl) => self.decl_name(*decl),
            None => unreachable!("overload set without candidates"),
        }
    }

    fn visit(&mut self, id: ExprId) -> fmt::Result {
        let ctx = self.ctx;
        let expr = ctx.expr(id);
        let ty = TyLabel(expr.ty.as_ref());
        self.pad(self.indent)?;
        match &expr.kind {
            ExprKind::IntegerLiteral { text, .. } => {
                write!(self.out, "(integer_literal type='{}' value={})", ty, text)
            }
            ExprKind::DeclRef { decl, .. } => {
                let name = self.decl_name(*decl);
                write!(self.out, "(declref_expr type='{}' decl={})", ty, name)
            }
            ExprKind::OverloadSetRef { decls, .. } => {
                let name = self.first_decl_name(decls);
                write!(self.out, "(overloadsetref_expr type='{}' decl={})", ty, name)
            }
            ExprKind::UnresolvedDeclRef { name, .. } => {
                write!(self.out, "(unresolved_decl_ref_expr type='{}' name={})", ty, name)
            }
            ExprKind::UnresolvedMember { name, .. } => {
                write!(self.out, "(unresolved_member_expr type='{}' name='{}')", ty, name)
            }
            ExprKind::UnresolvedScopedIdentifier { type_decl, name, .. } => {
                let type_name = self.decl_name(*type_decl);
                write!(
                    self.out,
                    "(unresolved_scoped_identifier_expr type='{}' name='{}')",
                    type_name, name
                )
            }
            ExprKind::Tuple { elements, .. } => {
                write!(self.out, "(tuple_expr type='{}'", ty)?;
                for element in elements {
                    self.out.write_char('\n')?;
                    match element.value {
                        Some(value) => self.print_rec(value)?,
                        None => {
                            self.pad(self.indent + self.config.indent_size)?;
                            self.out.write_str("<<tuple element default value>>")?;
                        }
                    }
                }
                self.out.write_char(')')
            }
            ExprKind::UnresolvedDot {
                base,
                name,
                resolved_decls,
                ..
            } => {
                write!(self.out, "(unresolved_dot_expr type='{}' field '{}'", ty, name)?;
                if !resolved_decls.is_empty() {
                    write!(
                        self.out,
                        " decl resolved to {} candidate(s)!",
                        resolved_decls.len()
                    )?;
                }
                if let Some(base) = base {
                    self.out.write_char('\n')?;
                    self.print_rec(*base)?;
                }
                self.out.write_char(')')
            }
            ExprKind::TupleElement {
                base, field_index, ..
            } => {
                writeln!(self.out, "(tuple_element_expr type='{}' field #{}", ty, field_index)?;
                self.print_rec(*base)?;
                self.out.write_char(')')
            }
            ExprKind::Apply { callee, arg } => {
                writeln!(self.out, "(apply_expr type='{}'", ty)?;
                self.print_rec(*callee)?;
                self.out.write_char('\n')?;
                self.print_rec(*arg)?;
                self.out.write_char(')')
            }
            ExprKind::Sequence { elements } => {
                write!(self.out, "(sequence_expr type='{}'", ty)?;
                for element in elements {
                    self.out.write_char('\n')?;
                    self.print_rec(*element)?;
                }
                self.out.write_char(')')
            }
            ExprKind::Block { items, .. } => {
                write!(self.out, "(brace_expr type='{}'", ty)?;
                for item in items {
                    self.out.write_char('\n')?;
                    match item {
                        BlockItem::Expr(expr) => self.print_rec(*expr)?,
                        BlockItem::Decl(decl) => self.print_rec_decl(*decl)?,
                    }
                }
                self.out.write_char(')')
            }
            ExprKind::Closure { input } => {
                writeln!(self.out, "(closure_expr type='{}'", ty)?;
                self.print_rec(*input)?;
                self.out.write_char(')')
            }
            ExprKind::AnonClosureArg { index, .. } => {
                write!(self.out, "(anon_closure_arg_expr type='{}' ArgNo={})", ty, index)
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let op_name = match op.map(|op| &ctx.expr(op).kind) {
                    None => "=",
                    Some(ExprKind::DeclRef { decl, .. }) => self.decl_name(*decl),
                    Some(ExprKind::OverloadSetRef { decls, .. }) => self.first_decl_name(decls),
                    Some(_) => "***UNKNOWN***",
                };
                writeln!(self.out, "(binary_expr '{}' type='{}'", op_name, ty)?;
                self.print_rec(*lhs)?;
                self.out.write_char('\n')?;
                self.print_rec(*rhs)?;
                self.out.write_char(')')
            }
        }
    }

    fn visit_decl(&mut self, id: DeclId) -> fmt::Result {
        let ctx = self.ctx;
        let decl = ctx.decl(id);
        self.pad(self.indent)?;
        match &decl.kind {
            DeclKind::Var { ty, init } => {
                write!(self.out, "(var_decl '{}' type='{}'", decl.name, TyLabel(ty.as_ref()))?;
                if let Some(init) = init {
                    self.out.write_char('\n')?;
                    self.print_rec(*init)?;
                }
                self.out.write_char(')')
            }
            DeclKind::TypeAlias { ty } => {
                write!(self.out, "(type_alias_decl '{}' type='{}')", decl.name, ty)
            }
        }
    }
}
