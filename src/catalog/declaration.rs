use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TypeRecord;

/// What a documented element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "exception")]
    Exception,
    #[serde(rename = "module")]
    Module,
    #[serde(rename = "module type")]
    ModuleType,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "class type")]
    ClassType,
    #[serde(rename = "method")]
    Method,
    #[serde(rename = "field")]
    Field,
    #[serde(rename = "constructor")]
    Constructor,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Value => "value",
            DeclarationKind::Type => "type",
            DeclarationKind::Exception => "exception",
            DeclarationKind::Module => "module",
            DeclarationKind::ModuleType => "module type",
            DeclarationKind::Class => "class",
            DeclarationKind::ClassType => "class type",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
            DeclarationKind::Constructor => "constructor",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration as handed to the catalog builder, before its signature
/// has been analysed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationEntry {
    pub short_name: String,
    pub full_name: String,
    pub kind: DeclarationKind,
    #[serde(rename = "type", default)]
    pub signature: String,
    /// Address of the documentation page or anchor.
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub documentation: String,
    /// Words the declaration is found by in full-text search.
    #[serde(default)]
    pub words: Vec<String>,
}

impl DeclarationEntry {
    pub fn new(
        short_name: impl Into<String>,
        full_name: impl Into<String>,
        kind: DeclarationKind,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            full_name: full_name.into(),
            kind,
            signature: signature.into(),
            reference: String::new(),
            documentation: String::new(),
            words: Vec::new(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }
}

/// A catalogued declaration with its analysed signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub short_name: String,
    pub full_name: String,
    pub kind: DeclarationKind,
    pub signature: TypeRecord,
    pub reference: String,
    pub documentation: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signature.text.is_empty() {
            write!(f, "{}", self.full_name)
        } else {
            write!(f, "{} : {}", self.full_name, self.signature.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_json() {
        let kind: DeclarationKind = serde_json::from_str("\"module type\"").unwrap();
        assert_eq!(kind, DeclarationKind::ModuleType);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"module type\"");
        assert_eq!(kind.to_string(), "module type");
    }

    #[test]
    fn test_entry_defaults() {
        let entry: DeclarationEntry = serde_json::from_str(
            r#"{ "short_name": "List", "full_name": "List", "kind": "module" }"#,
        )
        .unwrap();
        assert!(entry.signature.is_empty());
        assert!(entry.words.is_empty());
    }
}
