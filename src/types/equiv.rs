//! # Equivalence Tester
//!
//! Decides whether two normal forms describe the same signature. Coordinate
//! order and parameter order are irrelevant, and type variables may be
//! renamed as long as the renaming stays one-to-one.
//!
//! ## Search
//!
//! The search pairs each coordinate of the left form with an unused
//! coordinate of the right form, which amounts to trying every permutation
//! of the right coordinates while pruning as soon as a prefix fails. Inside
//! a coordinate the return types are compared first; only if they agree are
//! the parameters permuted the same way.
//!
//! A single [`VariableSubstitution`] is threaded through one whole attempt.
//! Every branch works on its own copy, so a [`BindingConflict`] simply
//! abandons that branch.
//!
//! ```text
//! 'a -> 'b -> 'a      vs      'y -> 'x -> 'x
//!   return:  'a ~ 'x                   {a ↦ x}
//!   params:  ['a, 'b] ~ ['y, 'x]
//!     'a ~ 'y   conflict (a ↦ x)       backtrack
//!     'a ~ 'x,  'b ~ 'y                {a ↦ x, b ↦ y}   match
//! ```
//!
//! The search is factorial in the number of coordinates and parameters. A
//! step budget bounds the work spent on a single comparison.

use std::cell::Cell;

use tracing::warn;

use crate::config::SearchConfig;

use super::error::BindingConflict;
use super::expr::TypeExpr;
use super::normalize::{Coordinate, NormalForm};
use super::subst::VariableSubstitution;

/// Structural equality of two elements up to the variable renaming in
/// `subst`, which is extended as variables are paired.
///
/// Returns `Ok(false)` on a shape or name mismatch and `Err` when a
/// variable pairing contradicts an earlier one.
pub fn element_equal(
    subst: &mut VariableSubstitution,
    e1: &TypeExpr,
    e2: &TypeExpr,
) -> Result<bool, BindingConflict> {
    match (e1, e2) {
        (TypeExpr::Var(v1), TypeExpr::Var(v2)) => {
            subst.bind(v1, v2)?;
            Ok(true)
        }
        (TypeExpr::Ident(n1), TypeExpr::Ident(n2)) => Ok(n1 == n2),
        (TypeExpr::Product(l1, r1), TypeExpr::Product(l2, r2))
        | (TypeExpr::Arrow(l1, r1), TypeExpr::Arrow(l2, r2)) => {
            Ok(element_equal(subst, l1, l2)? && element_equal(subst, r1, r2)?)
        }
        (TypeExpr::TypeList(xs), TypeExpr::TypeList(ys)) => {
            if xs.len() != ys.len() {
                return Ok(false);
            }
            for (x, y) in xs.iter().zip(ys) {
                if !element_equal(subst, x, y)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (TypeExpr::TypeApp(a1, n1), TypeExpr::TypeApp(a2, n2)) => {
            Ok(n1 == n2 && element_equal(subst, a1, a2)?)
        }
        (TypeExpr::OptionalParameter(i1), TypeExpr::OptionalParameter(i2)) => {
            element_equal(subst, i1, i2)
        }
        _ => Ok(false),
    }
}

fn elements_match(subst: &mut VariableSubstitution, e1: &TypeExpr, e2: &TypeExpr) -> bool {
    matches!(element_equal(subst, e1, e2), Ok(true))
}

/// Equivalence decision procedure with a per-comparison step budget.
#[derive(Debug, Clone, Copy)]
pub struct EquivalenceTester {
    budget: usize,
}

impl Default for EquivalenceTester {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl EquivalenceTester {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            budget: config.permutation_budget,
        }
    }

    /// Whether `x` and `y` denote the same signature.
    pub fn equivalent(&self, x: &NormalForm, y: &NormalForm) -> bool {
        if x.len() != y.len() {
            return false;
        }
        let search = Search::new(self.budget);
        let mut used = vec![false; y.len()];
        let found = search.forms(x.coordinates(), y.coordinates(), &mut used, &VariableSubstitution::new());
        if !found && search.exhausted() {
            warn!(
                budget = self.budget,
                "permutation budget exhausted, treating signatures as different"
            );
        }
        found
    }

    /// Whether two coordinates match under some renaming, starting from an
    /// empty substitution.
    pub fn coordinate_equivalent(&self, c1: &Coordinate, c2: &Coordinate) -> bool {
        let search = Search::new(self.budget);
        search.coordinate(c1, c2, &VariableSubstitution::new(), &mut |_| true)
    }
}

/// Equivalence under the default budget.
pub fn equivalent(x: &NormalForm, y: &NormalForm) -> bool {
    EquivalenceTester::default().equivalent(x, y)
}

/// Coordinate equivalence under the default budget.
pub fn coordinate_equivalent(c1: &Coordinate, c2: &Coordinate) -> bool {
    EquivalenceTester::default().coordinate_equivalent(c1, c2)
}

type Continuation<'k> = dyn FnMut(&VariableSubstitution) -> bool + 'k;

/// State of one comparison: the remaining step budget.
struct Search {
    remaining: Cell<usize>,
}

impl Search {
    fn new(budget: usize) -> Self {
        Self {
            remaining: Cell::new(budget),
        }
    }

    fn step(&self) -> bool {
        match self.remaining.get() {
            0 => false,
            left => {
                self.remaining.set(left - 1);
                true
            }
        }
    }

    fn exhausted(&self) -> bool {
        self.remaining.get() == 0
    }

    /// Pair `xs[0]` with every unused coordinate of `ys`, then recurse on
    /// the remaining coordinates with the extended substitution.
    fn forms(
        &self,
        xs: &[Coordinate],
        ys: &[Coordinate],
        used: &mut [bool],
        subst: &VariableSubstitution,
    ) -> bool {
        let Some((first, rest)) = xs.split_first() else {
            return true;
        };
        for j in 0..ys.len() {
            if used[j] {
                continue;
            }
            if !self.step() {
                return false;
            }
            used[j] = true;
            let found = self.coordinate(first, &ys[j], subst, &mut |extended| {
                self.forms(rest, ys, used, extended)
            });
            used[j] = false;
            if found {
                return true;
            }
        }
        false
    }

    /// Match `c1` against `c2` and hand every consistent extension of
    /// `subst` to `k` until it accepts one.
    fn coordinate(
        &self,
        c1: &Coordinate,
        c2: &Coordinate,
        subst: &VariableSubstitution,
        k: &mut Continuation<'_>,
    ) -> bool {
        if c1.len() != c2.len() {
            return false;
        }
        match (c1.elements().split_last(), c2.elements().split_last()) {
            (Some((r1, p1)), Some((r2, p2))) => {
                let mut anchored = subst.clone();
                if !elements_match(&mut anchored, r1, r2) {
                    return false;
                }
                let mut used = vec![false; p2.len()];
                self.parameters(p1, p2, &mut used, &anchored, k)
            }
            _ => k(subst),
        }
    }

    fn parameters(
        &self,
        p1: &[TypeExpr],
        p2: &[TypeExpr],
        used: &mut [bool],
        subst: &VariableSubstitution,
        k: &mut Continuation<'_>,
    ) -> bool {
        let Some((first, rest)) = p1.split_first() else {
            return k(subst);
        };
        for j in 0..p2.len() {
            if used[j] {
                continue;
            }
            if !self.step() {
                return false;
            }
            let mut branch = subst.clone();
            if !elements_match(&mut branch, first, &p2[j]) {
                continue;
            }
            used[j] = true;
            let found = self.parameters(rest, p2, used, &branch, k);
            used[j] = false;
            if found {
                return true;
            }
        }
        false
    }
}
