//! Type signatures and the machinery that compares them.
//!
//! A signature is parsed into a [`TypeExpr`], optionally unfolded through a
//! [`ManifestRegistry`], expanded over its optional parameters, rewritten to
//! [`NormalForm`]s by [`normalize`], and finally compared with an
//! [`EquivalenceTester`]. [`TypeRecord`] bundles these steps for one
//! declaration.

pub mod equiv;
pub mod error;
pub mod expr;
pub mod manifest;
pub mod normalize;
pub mod optional;
pub mod record;
pub mod subst;

pub use equiv::{EquivalenceTester, coordinate_equivalent, element_equal, equivalent};
pub use error::{BindingConflict, SyntaxError};
pub use expr::TypeExpr;
pub use manifest::{ManifestEntry, ManifestRegistry};
pub use normalize::{Coordinate, NormalForm, normalize};
pub use optional::{expand, expand_normal_forms};
pub use record::TypeRecord;
pub use subst::{Substitution, VariableSubstitution};
