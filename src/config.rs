use serde::{Deserialize, Serialize};

/// Default number of pairing attempts allowed for one equivalence check.
pub const DEFAULT_PERMUTATION_BUDGET: usize = 1_000_000;

/// Tunables of the type search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on coordinate and parameter pairings tried while
    /// comparing two signatures. An exhausted budget counts as a mismatch.
    pub permutation_budget: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            permutation_budget: DEFAULT_PERMUTATION_BUDGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_budget_override() {
        let config: SearchConfig =
            serde_json::from_str(r#"{ "permutation_budget": 42 }"#).unwrap();
        assert_eq!(config.permutation_budget, 42);
    }
}
