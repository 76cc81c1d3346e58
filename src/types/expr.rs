use std::collections::HashSet;

/// Name of the unit type, the identity element of products and the
/// neutral domain of arrows.
pub const UNIT: &str = "unit";

/// A type signature as written in the documentation.
///
/// `Product` and `Arrow` are binary; longer chains are nested by the parser
/// (`*` to the left, `->` to the right).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// Type variable, stored without its leading quote.
    Var(String),
    /// Concrete named type without arguments, e.g. `int` or `Buffer.t`.
    Ident(String),
    Product(Box<TypeExpr>, Box<TypeExpr>),
    Arrow(Box<TypeExpr>, Box<TypeExpr>),
    /// Comma separated arguments of a multi-parameter constructor.
    TypeList(Vec<TypeExpr>),
    /// Constructor `name` applied to a single argument or a `TypeList`.
    TypeApp(Box<TypeExpr>, String),
    OptionalParameter(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn var(name: impl Into<String>) -> Self {
        TypeExpr::Var(name.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn unit() -> Self {
        TypeExpr::Ident(UNIT.to_string())
    }

    pub fn product(left: TypeExpr, right: TypeExpr) -> Self {
        TypeExpr::Product(Box::new(left), Box::new(right))
    }

    pub fn arrow(domain: TypeExpr, codomain: TypeExpr) -> Self {
        TypeExpr::Arrow(Box::new(domain), Box::new(codomain))
    }

    pub fn app(args: TypeExpr, name: impl Into<String>) -> Self {
        TypeExpr::TypeApp(Box::new(args), name.into())
    }

    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::OptionalParameter(Box::new(inner))
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, TypeExpr::Ident(name) if name == UNIT)
    }

    /// Distinct type variables in order of first occurrence.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut vars = Vec::new();
        self.collect_variables(&mut seen, &mut vars);
        vars
    }

    fn collect_variables<'a>(&'a self, seen: &mut HashSet<&'a str>, vars: &mut Vec<&'a str>) {
        match self {
            TypeExpr::Var(name) => {
                if seen.insert(name.as_str()) {
                    vars.push(name.as_str());
                }
            }
            TypeExpr::Ident(_) => {}
            TypeExpr::Product(left, right) | TypeExpr::Arrow(left, right) => {
                left.collect_variables(seen, vars);
                right.collect_variables(seen, vars);
            }
            TypeExpr::TypeList(elements) => {
                for element in elements {
                    element.collect_variables(seen, vars);
                }
            }
            TypeExpr::TypeApp(args, _) => args.collect_variables(seen, vars),
            TypeExpr::OptionalParameter(inner) => inner.collect_variables(seen, vars),
        }
    }

    /// Number of optional parameters, not counting optionals nested inside
    /// another optional parameter.
    pub fn optional_count(&self) -> usize {
        match self {
            TypeExpr::OptionalParameter(_) => 1,
            TypeExpr::Var(_) | TypeExpr::Ident(_) => 0,
            TypeExpr::Product(left, right) | TypeExpr::Arrow(left, right) => {
                left.optional_count() + right.optional_count()
            }
            TypeExpr::TypeList(elements) => elements.iter().map(TypeExpr::optional_count).sum(),
            TypeExpr::TypeApp(args, _) => args.optional_count(),
        }
    }
}
