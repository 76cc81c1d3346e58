//! # Optional-Parameter Expander
//!
//! A signature with `k` optional parameters stands for `2^k` concrete
//! signatures, one per choice of which optionals are passed. Optionals are
//! numbered in pre-order, left to right; in combination `n` the optional
//! with index `i` is present iff bit `i` of `n` is set.
//!
//! ```text
//! ?step:int -> ?stop:int -> int -> int list
//!   n = 0b00   int -> int list
//!   n = 0b01   int -> int -> int list
//!   n = 0b10   int -> int -> int list
//!   n = 0b11   int -> int -> int -> int list
//! ```

use tracing::warn;

use super::expr::TypeExpr;
use super::normalize::{NormalForm, normalize};

/// Optionals beyond this index are always treated as present, keeping the
/// enumeration to at most `2^MAX_OPTIONAL_PARAMETERS` signatures.
pub const MAX_OPTIONAL_PARAMETERS: usize = 12;

/// The `n`-th concrete signature of `ty`.
///
/// Present optionals are replaced by their inner type, absent ones are
/// dropped from the enclosing node, which then collapses to its remaining
/// child.
pub fn nth_signature(ty: &TypeExpr, n: u64) -> TypeExpr {
    let mut next = 0;
    select(ty, n, &mut next).unwrap_or_else(TypeExpr::unit)
}

fn select(ty: &TypeExpr, n: u64, next: &mut usize) -> Option<TypeExpr> {
    match ty {
        TypeExpr::OptionalParameter(inner) => {
            let index = *next;
            *next += 1;
            let present = index >= MAX_OPTIONAL_PARAMETERS || n & (1u64 << index) != 0;
            present.then(|| (**inner).clone())
        }
        TypeExpr::Var(_) | TypeExpr::Ident(_) => Some(ty.clone()),
        TypeExpr::Product(left, right) => {
            let left = select(left, n, next);
            let right = select(right, n, next);
            join(left, right, TypeExpr::product)
        }
        TypeExpr::Arrow(left, right) => {
            let left = select(left, n, next);
            let right = select(right, n, next);
            join(left, right, TypeExpr::arrow)
        }
        TypeExpr::TypeList(elements) => {
            let mut kept: Vec<TypeExpr> =
                elements.iter().filter_map(|e| select(e, n, next)).collect();
            match kept.len() {
                0 => None,
                1 => kept.pop(),
                _ => Some(TypeExpr::TypeList(kept)),
            }
        }
        TypeExpr::TypeApp(args, name) => match select(args, n, next) {
            Some(args) => Some(TypeExpr::app(args, name.clone())),
            None => Some(TypeExpr::Ident(name.clone())),
        },
    }
}

fn join(
    left: Option<TypeExpr>,
    right: Option<TypeExpr>,
    build: fn(TypeExpr, TypeExpr) -> TypeExpr,
) -> Option<TypeExpr> {
    match (left, right) {
        (Some(left), Some(right)) => Some(build(left, right)),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// Every concrete signature of `ty`; just `ty` itself when it has no
/// optional parameters.
pub fn expand(ty: &TypeExpr) -> Vec<TypeExpr> {
    let count = ty.optional_count();
    if count == 0 {
        return vec![ty.clone()];
    }
    if count > MAX_OPTIONAL_PARAMETERS {
        warn!(
            count,
            limit = MAX_OPTIONAL_PARAMETERS,
            "too many optional parameters, trailing ones are always included"
        );
    }
    let combinations = 1u64 << count.min(MAX_OPTIONAL_PARAMETERS);
    (0..combinations).map(|n| nth_signature(ty, n)).collect()
}

/// Normal forms of every concrete signature of `ty`.
pub fn expand_normal_forms(ty: &TypeExpr) -> Vec<NormalForm> {
    expand(ty).iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeExpr {
        TypeExpr::ident("int")
    }

    fn opt_int() -> TypeExpr {
        TypeExpr::optional(int())
    }

    #[test]
    fn test_no_optionals_expands_to_itself() {
        let ty = TypeExpr::arrow(int(), int());
        assert_eq!(expand(&ty), vec![ty]);
    }

    #[test]
    fn test_single_optional() {
        let ty = TypeExpr::arrow(opt_int(), TypeExpr::ident("bool"));
        assert_eq!(
            expand(&ty),
            vec![
                TypeExpr::ident("bool"),
                TypeExpr::arrow(int(), TypeExpr::ident("bool")),
            ]
        );
    }

    #[test]
    fn test_bit_order_follows_traversal() {
        let ty = TypeExpr::arrow(
            TypeExpr::optional(TypeExpr::ident("a")),
            TypeExpr::arrow(TypeExpr::optional(TypeExpr::ident("b")), int()),
        );
        assert_eq!(
            nth_signature(&ty, 0b01),
            TypeExpr::arrow(TypeExpr::ident("a"), int())
        );
        assert_eq!(
            nth_signature(&ty, 0b10),
            TypeExpr::arrow(TypeExpr::ident("b"), int())
        );
    }

    #[test]
    fn test_two_optionals_four_signatures() {
        let ty = TypeExpr::arrow(opt_int(), TypeExpr::arrow(opt_int(), int()));
        assert_eq!(expand(&ty).len(), 4);
        assert_eq!(expand_normal_forms(&ty).len(), 4);
    }

    #[test]
    fn test_type_list_collapses() {
        let ty = TypeExpr::app(
            TypeExpr::TypeList(vec![TypeExpr::var("a"), opt_int()]),
            "t",
        );
        assert_eq!(nth_signature(&ty, 0), TypeExpr::app(TypeExpr::var("a"), "t"));
        assert_eq!(
            nth_signature(&ty, 1),
            TypeExpr::app(TypeExpr::TypeList(vec![TypeExpr::var("a"), int()]), "t")
        );
    }

    #[test]
    fn test_application_without_arguments_becomes_ident() {
        let ty = TypeExpr::app(opt_int(), "option");
        assert_eq!(nth_signature(&ty, 0), TypeExpr::ident("option"));
    }

    #[test]
    fn test_nested_optional_kept_when_outer_present() {
        let ty = TypeExpr::arrow(TypeExpr::optional(opt_int()), int());
        assert_eq!(expand(&ty).len(), 2);
        assert_eq!(nth_signature(&ty, 1), TypeExpr::arrow(opt_int(), int()));
    }

    #[test]
    fn test_optional_count_is_capped() {
        let mut ty = int();
        for _ in 0..(MAX_OPTIONAL_PARAMETERS + 2) {
            ty = TypeExpr::arrow(opt_int(), ty);
        }
        assert_eq!(expand(&ty).len(), 1 << MAX_OPTIONAL_PARAMETERS);
    }
}
