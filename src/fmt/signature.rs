//! Pretty printer for type signatures
//!
//! Prints a `TypeExpr` in source syntax with the fewest parentheses that
//! preserve its structure. Optional parameters have lost their label during
//! parsing and print with the placeholder label `_`.

use std::fmt::{self, Display};

use crate::types::TypeExpr;

/// Syntactic context a subexpression is printed in, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Type,
    Domain,
    Product,
    Atom,
}

struct Formatter {
    buffer: String,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn finish(self) -> String {
        self.buffer
    }

    fn write_type(&mut self, ty: &TypeExpr, ctx: Prec) {
        match ty {
            TypeExpr::Var(name) => {
                self.write_str("'");
                self.write_str(name);
            }
            TypeExpr::Ident(name) => self.write_str(name),
            TypeExpr::Arrow(domain, codomain) => self.grouped(ctx > Prec::Type, |fmt| {
                fmt.write_type(domain, Prec::Domain);
                fmt.write_str(" -> ");
                fmt.write_type(codomain, Prec::Type);
            }),
            TypeExpr::OptionalParameter(inner) => self.grouped(ctx > Prec::Domain, |fmt| {
                fmt.write_str("?_:");
                fmt.write_type(inner, Prec::Product);
            }),
            TypeExpr::Product(left, right) => self.grouped(ctx > Prec::Product, |fmt| {
                fmt.write_type(left, Prec::Product);
                fmt.write_str(" * ");
                fmt.write_type(right, Prec::Atom);
            }),
            TypeExpr::TypeList(elements) => {
                self.write_str("(");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.write_str(", ");
                    }
                    self.write_type(element, Prec::Type);
                }
                self.write_str(")");
            }
            TypeExpr::TypeApp(args, name) => {
                self.write_type(args, Prec::Atom);
                self.write_str(" ");
                self.write_str(name);
            }
        }
    }

    fn grouped(&mut self, parens: bool, body: impl FnOnce(&mut Self)) {
        if parens {
            self.write_str("(");
        }
        body(self);
        if parens {
            self.write_str(")");
        }
    }
}

/// Render `ty` in signature syntax.
pub fn format_type(ty: &TypeExpr) -> String {
    let mut formatter = Formatter::new();
    formatter.write_type(ty, Prec::Type);
    formatter.finish()
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_type(self))
    }
}
