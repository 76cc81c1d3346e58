use std::collections::HashMap;

use super::error::BindingConflict;
use super::expr::TypeExpr;

/// Mapping from type variable names to type expressions, used to
/// instantiate the formal parameters of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution(pub HashMap<String, TypeExpr>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(HashMap::new())
    }

    pub fn get(&self, var: &str) -> Option<&TypeExpr> {
        self.0.get(var)
    }

    pub fn apply(&self, ty: &TypeExpr) -> TypeExpr {
        match ty {
            TypeExpr::Var(v) => self.0.get(v).cloned().unwrap_or_else(|| ty.clone()),
            TypeExpr::Ident(_) => ty.clone(),
            TypeExpr::Product(left, right) => TypeExpr::product(self.apply(left), self.apply(right)),
            TypeExpr::Arrow(left, right) => TypeExpr::arrow(self.apply(left), self.apply(right)),
            TypeExpr::TypeList(elements) => {
                TypeExpr::TypeList(elements.iter().map(|e| self.apply(e)).collect())
            }
            TypeExpr::TypeApp(args, name) => TypeExpr::app(self.apply(args), name.clone()),
            TypeExpr::OptionalParameter(inner) => TypeExpr::optional(self.apply(inner)),
        }
    }

    pub fn insert(&mut self, var: impl Into<String>, ty: TypeExpr) {
        self.0.insert(var.into(), ty);
    }
}

/// One-to-one renaming between the type variables of two signatures.
///
/// Both directions are kept so that injectivity can be checked without
/// scanning the whole mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableSubstitution {
    forward: HashMap<String, String>,
    backward: HashMap<String, String>,
}

impl VariableSubstitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &str) -> Option<&str> {
        self.forward.get(var).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Record `v1 ↦ v2`.
    ///
    /// Fails if `v1` already maps elsewhere or another variable already maps
    /// to `v2`. Rebinding an existing pair is a no-op.
    pub fn bind(&mut self, v1: &str, v2: &str) -> Result<(), BindingConflict> {
        match self.forward.get(v1) {
            Some(bound) if bound != v2 => {
                return Err(BindingConflict {
                    var: v1.to_string(),
                    target: v2.to_string(),
                    existing_var: v1.to_string(),
                    existing_target: bound.clone(),
                });
            }
            _ => {}
        }
        match self.backward.get(v2) {
            Some(owner) if owner != v1 => {
                return Err(BindingConflict {
                    var: v1.to_string(),
                    target: v2.to_string(),
                    existing_var: owner.clone(),
                    existing_target: v2.to_string(),
                });
            }
            _ => {}
        }
        self.forward.insert(v1.to_string(), v2.to_string());
        self.backward.insert(v2.to_string(), v1.to_string());
        Ok(())
    }
}
