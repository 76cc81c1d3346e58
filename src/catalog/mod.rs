//! # Catalog
//!
//! The searchable collection of a library's declarations. A catalog is
//! assembled with a [`CatalogBuilder`] (or loaded from JSON), after which it
//! is immutable and answers the five query kinds of [`SearchMode`].
//!
//! Every query returns declarations sorted by fully-qualified name; equal
//! names keep their insertion order.
//!
//! ```text
//! {
//!   "config":       { "permutation_budget": 100000 },
//!   "manifests":    [ { "name": "t", "declaration": "'a t", "definition": "'a list" } ],
//!   "declarations": [ { "short_name": "map", "full_name": "List.map",
//!                       "kind": "value", "type": "('a -> 'b) -> 'a list -> 'b list",
//!                       "words": ["MAP", "LIST"] } ]
//! }
//! ```

mod declaration;
mod error;
mod index;

use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SearchConfig;
use crate::types::{EquivalenceTester, ManifestRegistry, TypeRecord};

pub use declaration::{Declaration, DeclarationEntry, DeclarationKind};
pub use error::CatalogError;
pub use index::{NameIndex, WordIndex};

/// The kind of query to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Name,
    Regexp,
    Type,
    TypeManifest,
    FullText,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SearchMode::Name),
            "regexp" => Ok(SearchMode::Regexp),
            "type" => Ok(SearchMode::Type),
            "type-manifest" => Ok(SearchMode::TypeManifest),
            "text" => Ok(SearchMode::FullText),
            other => Err(format!("unknown search mode '{other}'")),
        }
    }
}

/// A manifest as it appears in a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSource {
    pub name: String,
    /// Left-hand side, e.g. `('a, 'b) t`.
    pub declaration: String,
    /// Right-hand side, e.g. `'a * 'b list`.
    pub definition: String,
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub config: SearchConfig,
    #[serde(default)]
    pub manifests: Vec<ManifestSource>,
    #[serde(default)]
    pub declarations: Vec<DeclarationEntry>,
}

/// Collects manifests and declarations for a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    config: SearchConfig,
    manifests: ManifestRegistry,
    entries: Vec<DeclarationEntry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a type abbreviation. Manifests that do not parse are
    /// ignored.
    pub fn manifest(mut self, name: &str, declaration: &str, definition: &str) -> Self {
        self.manifests.register_manifest(name, declaration, definition);
        self
    }

    pub fn declaration(mut self, entry: DeclarationEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Analyse every signature against the complete manifest set and build
    /// the lookup tables.
    pub fn build(self) -> Catalog {
        let mut names = NameIndex::default();
        let mut words = WordIndex::default();
        let mut declarations = Vec::with_capacity(self.entries.len());

        for (id, entry) in self.entries.into_iter().enumerate() {
            names.insert(&entry.short_name, &entry.full_name, id);
            for word in &entry.words {
                words.insert(word, id);
            }
            declarations.push(Declaration {
                signature: TypeRecord::new(entry.signature, &self.manifests),
                short_name: entry.short_name,
                full_name: entry.full_name,
                kind: entry.kind,
                reference: entry.reference,
                documentation: entry.documentation,
            });
        }

        debug!(
            declarations = declarations.len(),
            manifests = self.manifests.len(),
            words = words.len(),
            unparsed = declarations.iter().filter(|d| !d.signature.is_parsed()).count(),
            "catalog built"
        );

        Catalog {
            tester: EquivalenceTester::new(&self.config),
            config: self.config,
            manifests: self.manifests,
            declarations,
            names,
            words,
        }
    }
}

/// An indexed, read-only set of declarations.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: SearchConfig,
    tester: EquivalenceTester,
    manifests: ManifestRegistry,
    declarations: Vec<Declaration>,
    names: NameIndex,
    words: WordIndex,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn from_document(document: CatalogDocument) -> Self {
        let mut builder = CatalogBuilder::new().config(document.config);
        for manifest in &document.manifests {
            builder = builder.manifest(&manifest.name, &manifest.declaration, &manifest.definition);
        }
        for entry in document.declarations {
            builder = builder.declaration(entry);
        }
        builder.build()
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        Ok(Self::from_document(document))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn manifests(&self) -> &ManifestRegistry {
        &self.manifests
    }

    /// All declarations in insertion order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Run `query` in the given mode. An empty query matches nothing.
    pub fn search(&self, mode: SearchMode, query: &str) -> Result<Vec<&Declaration>, CatalogError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let results = match mode {
            SearchMode::Name => self.search_by_name(query),
            SearchMode::Regexp => self.search_by_regexp(query)?,
            SearchMode::Type => self.search_by_type(query),
            SearchMode::TypeManifest => self.search_by_type_manifest(query),
            SearchMode::FullText => self.search_by_full_text(query),
        };
        debug!(?mode, query, results = results.len(), "search finished");
        Ok(results)
    }

    /// Declarations whose short or fully-qualified name is exactly `query`.
    pub fn search_by_name(&self, query: &str) -> Vec<&Declaration> {
        self.collect(self.names.get(query).to_vec())
    }

    /// Declarations whose short or fully-qualified name matches the whole
    /// of the regular expression `query`.
    pub fn search_by_regexp(&self, query: &str) -> Result<Vec<&Declaration>, CatalogError> {
        let pattern = Regex::new(&format!("^(?:{query})$")).map_err(|source| {
            CatalogError::InvalidPattern {
                pattern: query.to_string(),
                source,
            }
        })?;
        Ok(self.filter(|d| pattern.is_match(&d.short_name) || pattern.is_match(&d.full_name)))
    }

    /// Declarations whose signature is equivalent to `query`.
    pub fn search_by_type(&self, query: &str) -> Vec<&Declaration> {
        let query = TypeRecord::new(query, &self.manifests);
        self.filter(|d| query.same_type(&d.signature, &self.tester))
    }

    /// Like [`Catalog::search_by_type`], with manifests unfolded on both
    /// sides.
    pub fn search_by_type_manifest(&self, query: &str) -> Vec<&Declaration> {
        let query = TypeRecord::new(query, &self.manifests);
        self.filter(|d| query.same_type_manifest(&d.signature, &self.tester))
    }

    /// Declarations indexed under every whitespace-separated word of
    /// `query`, compared case-insensitively.
    pub fn search_by_full_text(&self, query: &str) -> Vec<&Declaration> {
        self.collect(self.words.intersect(query.split_whitespace()))
    }

    fn filter(&self, predicate: impl Fn(&Declaration) -> bool) -> Vec<&Declaration> {
        let ids = self
            .declarations
            .iter()
            .enumerate()
            .filter(|(_, d)| predicate(d))
            .map(|(id, _)| id)
            .collect();
        self.collect(ids)
    }

    fn collect(&self, mut ids: Vec<usize>) -> Vec<&Declaration> {
        ids.sort_by(|a, b| {
            self.declarations[*a]
                .full_name
                .cmp(&self.declarations[*b].full_name)
        });
        ids.into_iter().map(|id| &self.declarations[id]).collect()
    }
}
