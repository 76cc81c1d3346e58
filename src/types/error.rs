//! # Engine Error Definitions
//!
//! Two kinds of failure exist inside the type engine:
//!
//! - Signature or manifest text that cannot be lexed or parsed (`SyntaxError`)
//! - A variable binding that would break the one-to-one renaming between
//!   two signatures (`BindingConflict`)
//!
//! Neither escapes the search operations. A `SyntaxError` degrades the
//! affected declaration to textual comparison and a `BindingConflict` only
//! aborts the permutation currently being tried.

use thiserror::Error;

use crate::parser::ParseError;

/// Signature text that does not describe a type expression.
#[derive(Debug, Clone, Error)]
pub enum SyntaxError {
    /// The text contains characters no token accepts (e.g. the `...`
    /// variadic marker).
    #[error("lexing failed: {0}")]
    Lex(String),

    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A manifest declaration whose parameters are not type variables.
    #[error("invalid manifest declaration '{0}': parameters must be type variables")]
    InvalidManifest(String),
}

/// Binding `var` to `target` would make the variable renaming
/// non-injective in one direction or the other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot bind '{var} to '{target}: conflicts with '{existing_var} -> '{existing_target}")]
pub struct BindingConflict {
    /// Left-hand variable being bound
    pub var: String,
    /// Right-hand variable it was supposed to map to
    pub target: String,
    /// The binding already recorded that shares one side with the new one
    pub existing_var: String,
    pub existing_target: String,
}
