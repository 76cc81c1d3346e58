//! Lookup tables from names and documentation words to declarations.
//!
//! Both indices store positions into the catalog's declaration list, in
//! insertion order.

use std::collections::HashMap;

/// Exact-name lookup. A declaration is reachable by its short name and, when
/// different, by its fully-qualified name.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl NameIndex {
    pub fn insert(&mut self, short_name: &str, full_name: &str, id: usize) {
        self.add(short_name, id);
        if full_name != short_name {
            self.add(full_name, id);
        }
    }

    fn add(&mut self, name: &str, id: usize) {
        self.buckets.entry(name.to_string()).or_default().push(id);
    }

    pub fn get(&self, name: &str) -> &[usize] {
        self.buckets.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Case-insensitive word lookup for full-text search.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl WordIndex {
    pub fn insert(&mut self, word: &str, id: usize) {
        let bucket = self.buckets.entry(word.to_uppercase()).or_default();
        if bucket.last() != Some(&id) {
            bucket.push(id);
        }
    }

    pub fn get(&self, word: &str) -> &[usize] {
        self.buckets
            .get(&word.to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Declarations indexed under every one of `words`, in the order of the
    /// first word's bucket.
    pub fn intersect<'q>(&self, words: impl IntoIterator<Item = &'q str>) -> Vec<usize> {
        let mut words = words.into_iter();
        let Some(first) = words.next() else {
            return Vec::new();
        };
        let mut result = self.get(first).to_vec();
        for word in words {
            let bucket = self.get(word);
            result.retain(|id| bucket.contains(id));
        }
        result
    }
}
