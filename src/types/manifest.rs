//! # Manifest Expander
//!
//! Manifests are the type abbreviations of a library (`type 'a t = 'a * int`).
//! Expanding them lets a query written against the abbreviation's right-hand
//! side find declarations written with its name, and the other way round.
//!
//! ## Unfolding
//!
//! ```text
//! registry:   ('a, 'b) pair = 'a * 'b
//!             counter       = int ref
//!
//! (string, counter) pair -> unit
//!   ⇒ string * int ref -> unit
//! ```
//!
//! Arguments of an application are expanded first, then bound to the
//! formal parameters on top of the substitution already in effect, and the
//! manifest body is expanded under that extended substitution. A manifest
//! is never unfolded inside its own expansion, so a cyclic definition is
//! left as its literal name instead of looping.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::parser::parse_type;

use super::error::SyntaxError;
use super::expr::TypeExpr;
use super::subst::Substitution;

/// A recorded type abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    /// Formal parameters, without their leading quote.
    pub formals: Vec<String>,
    pub body: TypeExpr,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, formals: Vec<String>, body: TypeExpr) -> Self {
        Self {
            name: name.into(),
            formals,
            body,
        }
    }

    /// Build an entry from its declaration (`('a, 'b) t`, `'a t` or `t`)
    /// and its definition text.
    pub fn parse(name: &str, declaration: &str, definition: &str) -> Result<Self, SyntaxError> {
        let formals = match parse_type(declaration)? {
            TypeExpr::Ident(_) => Vec::new(),
            TypeExpr::TypeApp(args, _) => match *args {
                TypeExpr::Var(v) => vec![v],
                TypeExpr::TypeList(elements) => elements
                    .into_iter()
                    .map(|e| match e {
                        TypeExpr::Var(v) => Ok(v),
                        _ => Err(SyntaxError::InvalidManifest(declaration.to_string())),
                    })
                    .collect::<Result<_, _>>()?,
                _ => return Err(SyntaxError::InvalidManifest(declaration.to_string())),
            },
            _ => return Err(SyntaxError::InvalidManifest(declaration.to_string())),
        };
        let body = parse_type(definition)?;
        Ok(Self::new(name, formals, body))
    }

    pub fn arity(&self) -> usize {
        self.formals.len()
    }
}

/// All manifests known to a catalog, keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct ManifestRegistry {
    entries: HashMap<String, ManifestEntry>,
}

impl ManifestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and record a manifest. Unparseable manifests are dropped and
    /// the type keeps matching only by its name.
    ///
    /// Returns whether the manifest was recorded.
    pub fn register_manifest(&mut self, name: &str, declaration: &str, definition: &str) -> bool {
        match ManifestEntry::parse(name, declaration, definition) {
            Ok(entry) => {
                self.insert(entry);
                true
            }
            Err(err) => {
                debug!(name, %err, "dropping manifest");
                false
            }
        }
    }

    pub fn insert(&mut self, entry: ManifestEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unfold every manifest reference in `ty`.
    pub fn expand_manifests(&self, ty: &TypeExpr) -> TypeExpr {
        let mut expander = Expander {
            registry: self,
            active: Vec::new(),
        };
        expander.expand(ty, &Substitution::empty())
    }
}

struct Expander<'r> {
    registry: &'r ManifestRegistry,
    /// Manifests currently being unfolded.
    active: Vec<&'r str>,
}

impl<'r> Expander<'r> {
    fn lookup(&self, name: &str) -> Option<&'r ManifestEntry> {
        let entry = self.registry.get(name)?;
        if self.active.contains(&entry.name.as_str()) {
            trace!(name, "cyclic manifest reference left unexpanded");
            return None;
        }
        Some(entry)
    }

    fn unfold(&mut self, entry: &'r ManifestEntry, subst: &Substitution) -> TypeExpr {
        self.active.push(&entry.name);
        let expanded = self.expand(&entry.body, subst);
        self.active.pop();
        expanded
    }

    fn expand(&mut self, ty: &TypeExpr, subst: &Substitution) -> TypeExpr {
        match ty {
            TypeExpr::Var(v) => subst.get(v).cloned().unwrap_or_else(|| ty.clone()),
            TypeExpr::Ident(name) => match self.lookup(name) {
                Some(entry) if entry.arity() == 0 => self.unfold(entry, subst),
                _ => ty.clone(),
            },
            TypeExpr::TypeApp(args, name) => {
                let args = self.expand(args, subst);
                let actuals = match &args {
                    TypeExpr::TypeList(elements) => elements.clone(),
                    single => vec![single.clone()],
                };
                match self.lookup(name) {
                    Some(entry) if entry.arity() == actuals.len() => {
                        let mut inner = subst.clone();
                        for (formal, actual) in entry.formals.iter().zip(actuals) {
                            inner.insert(formal.clone(), actual);
                        }
                        self.unfold(entry, &inner)
                    }
                    _ => TypeExpr::app(args, name.clone()),
                }
            }
            TypeExpr::Product(left, right) => {
                TypeExpr::product(self.expand(left, subst), self.expand(right, subst))
            }
            TypeExpr::Arrow(left, right) => {
                TypeExpr::arrow(self.expand(left, subst), self.expand(right, subst))
            }
            TypeExpr::TypeList(elements) => {
                TypeExpr::TypeList(elements.iter().map(|e| self.expand(e, subst)).collect())
            }
            TypeExpr::OptionalParameter(inner) => TypeExpr::optional(self.expand(inner, subst)),
        }
    }
}
