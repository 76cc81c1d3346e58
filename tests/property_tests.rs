//! Property tests for normalization and equivalence using proptest.
//!
//! Invariants that must hold for any signature:
//!
//! 1. Every normal form is equivalent to itself
//! 2. Consistently renaming type variables preserves equivalence
//! 3. Tupled and curried parameters are interchangeable
//! 4. Swapping two leading parameters preserves equivalence
//! 5. Printing and re-parsing a type gives the same type
//! 6. Manifest expansion is idempotent for acyclic manifests

use std::collections::HashMap;

use proptest::prelude::*;
use sigdex::parser::parse_type;
use sigdex::types::{ManifestRegistry, Substitution, TypeExpr, equivalent, expand, normalize};

// ---------------------------------------------------------------------------
// Strategies for generating types
// ---------------------------------------------------------------------------

const VAR_POOL: &[&str] = &["a", "b", "c"];
const IDENT_POOL: &[&str] = &["int", "string", "bool", "unit", "point", "Map.t"];
const CONSTRUCTOR_POOL: &[&str] = &["list", "option", "array", "pair"];

fn arb_leaf() -> impl Strategy<Value = TypeExpr> {
    prop_oneof![
        prop::sample::select(VAR_POOL).prop_map(|v| TypeExpr::var(v)),
        prop::sample::select(IDENT_POOL).prop_map(|n| TypeExpr::ident(n)),
    ]
}

fn arb_type() -> impl Strategy<Value = TypeExpr> {
    arb_leaf().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| TypeExpr::product(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(d, c)| TypeExpr::arrow(d, c)),
            (inner.clone(), prop::sample::select(CONSTRUCTOR_POOL))
                .prop_map(|(args, name)| TypeExpr::app(args, name)),
            (inner.clone(), inner).prop_map(|(k, v)| {
                TypeExpr::app(TypeExpr::TypeList(vec![k, v]), "Hashtbl.t")
            }),
        ]
    })
}

fn renaming(ty: &TypeExpr) -> Substitution {
    let map: HashMap<String, TypeExpr> = ty
        .variables()
        .into_iter()
        .map(|v| (v.to_string(), TypeExpr::var(format!("renamed_{v}"))))
        .collect();
    Substitution(map)
}

fn registry() -> ManifestRegistry {
    let mut registry = ManifestRegistry::new();
    registry.register_manifest("point", "point", "int * int");
    registry.register_manifest("pair", "'a pair", "'a * 'a option");
    registry
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn equivalence_is_reflexive(ty in arb_type()) {
        let form = normalize(&ty);
        prop_assert!(equivalent(&form, &form));
    }

    #[test]
    fn equivalence_is_invariant_under_renaming(ty in arb_type()) {
        let renamed = renaming(&ty).apply(&ty);
        prop_assert!(equivalent(&normalize(&ty), &normalize(&renamed)));
        prop_assert!(equivalent(&normalize(&renamed), &normalize(&ty)));
    }

    #[test]
    fn tupled_and_curried_parameters_agree(a in arb_type(), b in arb_type(), c in arb_type()) {
        let tupled = TypeExpr::arrow(TypeExpr::product(a.clone(), b.clone()), c.clone());
        let curried = TypeExpr::arrow(a, TypeExpr::arrow(b, c));
        prop_assert!(equivalent(&normalize(&tupled), &normalize(&curried)));
    }

    #[test]
    fn leading_parameters_commute(a in arb_type(), b in arb_type(), c in arb_type()) {
        let ab = TypeExpr::arrow(a.clone(), TypeExpr::arrow(b.clone(), c.clone()));
        let ba = TypeExpr::arrow(b, TypeExpr::arrow(a, c));
        prop_assert!(equivalent(&normalize(&ab), &normalize(&ba)));
    }

    #[test]
    fn printed_types_parse_back(ty in arb_type()) {
        let printed = ty.to_string();
        prop_assert_eq!(parse_type(&printed).ok(), Some(ty));
    }

    #[test]
    fn manifest_expansion_is_idempotent(ty in arb_type()) {
        let registry = registry();
        let once = registry.expand_manifests(&ty);
        prop_assert_eq!(registry.expand_manifests(&once), once);
    }

    #[test]
    fn optional_expansion_doubles_per_parameter(count in 0usize..6) {
        let mut ty = TypeExpr::ident("unit");
        for _ in 0..count {
            ty = TypeExpr::arrow(TypeExpr::optional(TypeExpr::ident("int")), ty);
        }
        prop_assert_eq!(expand(&ty).len(), 1 << count);
    }
}
