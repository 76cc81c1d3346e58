//! Formatting for signatures
//!
//! This module provides `Display` for type expressions (in source syntax)
//! and for their normal forms.

mod normal;
pub mod signature;

pub use signature::format_type;
