//! # sigdex - Type-Aware Search over API Documentation
//!
//! sigdex answers queries against the catalog of a library written in an
//! ML-style language. Besides looking declarations up by name, pattern or
//! documentation words, it finds every declaration whose type signature is
//! *the same function* as the one asked for, even when it is written
//! differently.
//!
//! ## Architecture Overview
//!
//! 1. **Lexer** (`lexer`) - Tokenizes signature text using the `lachs` library
//! 2. **Parser** (`parser`) - Builds a `TypeExpr` from tokens using combinator-based recursive descent
//! 3. **Manifest Expander** (`types::manifest`) - Unfolds type abbreviations
//! 4. **Optional-Parameter Expander** (`types::optional`) - Enumerates which optional parameters are passed
//! 5. **Canonicalizer** (`types::normalize`) - Rewrites a type into its normal form
//! 6. **Equivalence Tester** (`types::equiv`) - Compares normal forms up to reordering and renaming
//! 7. **Catalog** (`catalog`) - Owns the declarations and indices and runs the queries
//!
//! ## Pipeline Flow
//!
//! ```text
//! Signature (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → TypeExpr
//!     ↓
//! [Manifest Expander] → TypeExpr (manifest pass only)
//!     ↓
//! [Optional-Parameter Expander] → Vec<TypeExpr>
//!     ↓
//! [Canonicalizer] → Vec<NormalForm>
//!     ↓
//! [Equivalence Tester] → bool, per catalog declaration
//! ```
//!
//! ## What Counts as the Same Signature
//!
//! - Curried and tupled parameters: `int -> string -> bool` and `int * string -> bool`
//! - Parameter order: `string -> int -> bool`
//! - Tuple results: `int -> string * bool` and `(int -> string) * (int -> bool)`
//! - `unit` parameters and tuple components are ignored
//! - Type variables may be renamed consistently: `'a -> 'a` and `'b -> 'b`
//! - Optional parameters may be passed or not
//! - In the manifest pass, type abbreviations are unfolded first
//!
//! Signatures that do not parse (for instance variadic ones written with
//! `...`) only match the identical text, spaces aside.
//!
//! ## Module Structure
//!
//! - [`catalog`] - Declarations, indices and the five search operations
//! - [`config`] - Search tunables
//! - [`fmt`] - Pretty-printing of types and normal forms
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Parsing using combinator-based grammar
//! - [`types`] - Type expressions, normalization, equivalence, expansion
//!
//! ## Getting Started
//!
//! ```
//! use sigdex::catalog::{Catalog, DeclarationEntry, DeclarationKind, SearchMode};
//!
//! let catalog = Catalog::builder()
//!     .declaration(DeclarationEntry::new(
//!         "map",
//!         "List.map",
//!         DeclarationKind::Value,
//!         "('a -> 'b) -> 'a list -> 'b list",
//!     ))
//!     .build();
//!
//! let results = catalog
//!     .search(SearchMode::Type, "'x list -> ('x -> 'y) -> 'y list")
//!     .unwrap();
//! assert_eq!(results[0].full_name, "List.map");
//! ```

pub mod catalog;
pub mod config;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod types;
