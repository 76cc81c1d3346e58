//! # Canonicalizer
//!
//! Rewrites a signature into its normal form: a set of independent arrow
//! coordinates, each a flat list of parameters ending in a return type.
//!
//! ## Rewrite Rules
//!
//! ```text
//! unit -> t          ⇒  t
//! (a * b) -> c       ⇒  a -> (b -> c)
//! a -> (b * c)       ⇒  (a -> b) * (a -> c)
//! unit * t           ⇒  t
//! t * unit           ⇒  t
//! ```
//!
//! Rules fire only at arrow and product nodes reached through the
//! arrow/product spine. Type applications, type lists and optional
//! parameters are opaque. After rewriting, the tree is split along its
//! top-level products into coordinates, and each coordinate along its
//! arrows.
//!
//! ## Example
//!
//! ```text
//! int * string -> bool * char
//!   ⇒ (int -> string -> bool) * (int -> string -> char)
//!   ⇒ [int, string, bool] & [int, string, char]
//! ```

use super::expr::TypeExpr;

/// One curried slot of a normal form: parameters followed by the return
/// type. Parameter order is not significant for equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate(pub Vec<TypeExpr>);

impl Coordinate {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elements(&self) -> &[TypeExpr] {
        &self.0
    }

    pub fn return_type(&self) -> Option<&TypeExpr> {
        self.0.last()
    }

    pub fn parameters(&self) -> &[TypeExpr] {
        match self.0.split_last() {
            Some((_, params)) => params,
            None => &[],
        }
    }
}

/// Unordered collection of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalForm(pub Vec<Coordinate>);

impl NormalForm {
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute the normal form of `ty`.
pub fn normalize(ty: &TypeExpr) -> NormalForm {
    let rewritten = rewrite_top(ty);
    let mut products = Vec::new();
    flatten_products(rewritten, &mut products);

    let coordinates = products
        .into_iter()
        .map(|slot| {
            let mut elements = Vec::new();
            flatten_arrows(slot, &mut elements);
            Coordinate(elements)
        })
        .collect();
    NormalForm(coordinates)
}

/// Rewrite the children of arrow and product nodes first, then the node.
fn rewrite_top(ty: &TypeExpr) -> TypeExpr {
    match ty {
        TypeExpr::Arrow(domain, codomain) => {
            rewrite_inner(TypeExpr::arrow(rewrite_top(domain), rewrite_top(codomain)))
        }
        TypeExpr::Product(left, right) => {
            rewrite_inner(TypeExpr::product(rewrite_top(left), rewrite_top(right)))
        }
        _ => ty.clone(),
    }
}

/// Apply the rewrite rules at the root of a tree whose children are
/// already in rewritten form.
fn rewrite_inner(ty: TypeExpr) -> TypeExpr {
    match ty {
        TypeExpr::Arrow(domain, codomain) => {
            if domain.is_unit() {
                return *codomain;
            }
            match (*domain, *codomain) {
                (TypeExpr::Product(first, rest), codomain) => {
                    let tail = rewrite_inner(TypeExpr::Arrow(rest, Box::new(codomain)));
                    rewrite_inner(TypeExpr::Arrow(first, Box::new(tail)))
                }
                (domain, TypeExpr::Product(left, right)) => {
                    let left = rewrite_inner(TypeExpr::Arrow(Box::new(domain.clone()), left));
                    let right = rewrite_inner(TypeExpr::Arrow(Box::new(domain), right));
                    rewrite_inner(TypeExpr::product(left, right))
                }
                (domain, codomain) => TypeExpr::arrow(domain, codomain),
            }
        }
        TypeExpr::Product(left, right) => {
            if left.is_unit() {
                *right
            } else if right.is_unit() {
                *left
            } else {
                TypeExpr::Product(left, right)
            }
        }
        other => other,
    }
}

fn flatten_products(ty: TypeExpr, out: &mut Vec<TypeExpr>) {
    match ty {
        TypeExpr::Product(left, right) => {
            flatten_products(*left, out);
            flatten_products(*right, out);
        }
        other => out.push(other),
    }
}

fn flatten_arrows(ty: TypeExpr, out: &mut Vec<TypeExpr>) {
    match ty {
        TypeExpr::Arrow(domain, codomain) => {
            flatten_arrows(*domain, out);
            flatten_arrows(*codomain, out);
        }
        other => out.push(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeExpr {
        TypeExpr::ident("int")
    }

    fn string() -> TypeExpr {
        TypeExpr::ident("string")
    }

    fn bool() -> TypeExpr {
        TypeExpr::ident("bool")
    }

    #[test]
    fn test_atom_is_single_coordinate() {
        assert_eq!(normalize(&int()), NormalForm(vec![Coordinate(vec![int()])]));
    }

    #[test]
    fn test_curried_arrow_flattens() {
        let ty = TypeExpr::arrow(int(), TypeExpr::arrow(string(), bool()));
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![Coordinate(vec![int(), string(), bool()])])
        );
    }

    #[test]
    fn test_tupled_domain_is_curried() {
        let ty = TypeExpr::arrow(TypeExpr::product(int(), string()), bool());
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![Coordinate(vec![int(), string(), bool()])])
        );
    }

    #[test]
    fn test_tuple_return_distributes() {
        let ty = TypeExpr::arrow(int(), TypeExpr::product(string(), bool()));
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![
                Coordinate(vec![int(), string()]),
                Coordinate(vec![int(), bool()]),
            ])
        );
    }

    #[test]
    fn test_unit_domain_eliminated() {
        let ty = TypeExpr::arrow(TypeExpr::unit(), int());
        assert_eq!(normalize(&ty), normalize(&int()));
    }

    #[test]
    fn test_unit_in_product_eliminated() {
        let left = TypeExpr::product(TypeExpr::unit(), int());
        let right = TypeExpr::product(int(), TypeExpr::unit());
        assert_eq!(normalize(&left), normalize(&int()));
        assert_eq!(normalize(&right), normalize(&int()));
    }

    #[test]
    fn test_unit_inside_tupled_domain() {
        // (int * unit) -> bool
        let ty = TypeExpr::arrow(TypeExpr::product(int(), TypeExpr::unit()), bool());
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![Coordinate(vec![int(), bool()])])
        );
    }

    #[test]
    fn test_unit_return_kept() {
        let ty = TypeExpr::arrow(int(), TypeExpr::unit());
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![Coordinate(vec![int(), TypeExpr::unit()])])
        );
    }

    #[test]
    fn test_function_parameter_is_rewritten() {
        // ((int * string) -> bool) -> unit
        let param = TypeExpr::arrow(TypeExpr::product(int(), string()), bool());
        let ty = TypeExpr::arrow(param, TypeExpr::unit());
        let expected_param = TypeExpr::arrow(int(), TypeExpr::arrow(string(), bool()));
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![Coordinate(vec![expected_param, TypeExpr::unit()])])
        );
    }

    #[test]
    fn test_type_application_is_opaque() {
        let arg = TypeExpr::product(int(), TypeExpr::unit());
        let ty = TypeExpr::app(arg.clone(), "list");
        assert_eq!(
            normalize(&ty),
            NormalForm(vec![Coordinate(vec![TypeExpr::app(arg, "list")])])
        );
    }

    #[test]
    fn test_coordinate_accessors() {
        let coordinate = Coordinate(vec![int(), string(), bool()]);
        assert_eq!(coordinate.return_type(), Some(&bool()));
        assert_eq!(coordinate.parameters(), &[int(), string()]);
        assert!(Coordinate(vec![]).parameters().is_empty());
    }
}
