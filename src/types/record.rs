use tracing::trace;

use crate::parser::parse_type;

use super::equiv::EquivalenceTester;
use super::manifest::ManifestRegistry;
use super::normalize::NormalForm;
use super::optional::expand_normal_forms;

/// Marker for a variadic signature, which the signature grammar cannot
/// express.
const VARIADIC_MARKER: &str = "...";

/// The comparable representations of one signature, built once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub text: String,
    /// Normal forms of every optional-parameter combination.
    pub normal_forms: Option<Vec<NormalForm>>,
    /// Same, after unfolding manifests.
    pub manifest_normal_forms: Option<Vec<NormalForm>>,
}

impl TypeRecord {
    pub fn new(text: impl Into<String>, registry: &ManifestRegistry) -> Self {
        let text = text.into();
        if text.contains(VARIADIC_MARKER) {
            return Self::unparsed(text);
        }
        let ty = match parse_type(&text) {
            Ok(ty) => ty,
            Err(err) => {
                trace!(%text, %err, "signature kept as text");
                return Self::unparsed(text);
            }
        };
        let expanded = registry.expand_manifests(&ty);
        Self {
            normal_forms: Some(expand_normal_forms(&ty)),
            manifest_normal_forms: Some(expand_normal_forms(&expanded)),
            text,
        }
    }

    fn unparsed(text: String) -> Self {
        Self {
            text,
            normal_forms: None,
            manifest_normal_forms: None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.normal_forms.is_some()
    }

    /// Whether both records denote the same signature, ignoring manifests.
    pub fn same_type(&self, other: &TypeRecord, tester: &EquivalenceTester) -> bool {
        match (&self.normal_forms, &other.normal_forms) {
            (Some(xs), Some(ys)) => any_equivalent(xs, ys, tester),
            _ => self.same_text(other),
        }
    }

    /// Whether both records denote the same signature once manifests are
    /// unfolded.
    pub fn same_type_manifest(&self, other: &TypeRecord, tester: &EquivalenceTester) -> bool {
        match (&self.manifest_normal_forms, &other.manifest_normal_forms) {
            (Some(xs), Some(ys)) => any_equivalent(xs, ys, tester),
            _ => self.same_text(other),
        }
    }

    /// Text equality with spaces removed.
    pub fn same_text(&self, other: &TypeRecord) -> bool {
        strip_spaces(&self.text) == strip_spaces(&other.text)
    }
}

fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

fn any_equivalent(xs: &[NormalForm], ys: &[NormalForm], tester: &EquivalenceTester) -> bool {
    xs.iter()
        .any(|x| ys.iter().any(|y| tester.equivalent(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> TypeRecord {
        TypeRecord::new(text, &ManifestRegistry::new())
    }

    #[test]
    fn test_variadic_marker_is_unparsed() {
        let r = record("a -> ... -> b");
        assert!(!r.is_parsed());
        assert!(r.manifest_normal_forms.is_none());
    }

    #[test]
    fn test_parse_failure_is_unparsed() {
        assert!(!record("int ->").is_parsed());
    }

    #[test]
    fn test_optionals_produce_all_forms() {
        let r = record("?step:int -> int -> int list");
        assert_eq!(r.normal_forms.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_text_fallback_strips_spaces_only() {
        let tester = EquivalenceTester::default();
        assert!(record("a->...->b").same_type(&record("a -> ... -> b"), &tester));
        assert!(!record("a->...->b").same_type(&record("a\t->...->b"), &tester));
        assert!(!record("a->...->b").same_type(&record("a -> b"), &tester));
    }

    #[test]
    fn test_same_type_up_to_currying() {
        let tester = EquivalenceTester::default();
        assert!(record("int * string -> bool").same_type(&record("string -> int -> bool"), &tester));
    }

    #[test]
    fn test_manifest_pass_unfolds_aliases() {
        let mut registry = ManifestRegistry::new();
        registry.register_manifest("point", "point", "int * int");
        let tester = EquivalenceTester::default();

        let alias = TypeRecord::new("point -> int", &registry);
        let tuple = TypeRecord::new("int * int -> int", &registry);
        assert!(!alias.same_type(&tuple, &tester));
        assert!(alias.same_type_manifest(&tuple, &tester));
    }
}
