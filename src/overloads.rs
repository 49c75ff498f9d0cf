// Copyright (C) Brian G. Milnes 2025

//! Overload disambiguation
//!
//! Methods are told apart only by (name, parameter count). Each repeated
//! occurrence of the same key within one document gets the next 1-based
//! index, which becomes the `[n]` predicate in the emitted XPath.

pub mod overloads {
    use std::collections::HashMap;

    /// Disambiguation unit: method name plus arity as counted by the extractor
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct MethodKey {
        pub name: String,
        pub arity: usize,
    }

    impl MethodKey {
        pub fn new(name: &str, arity: usize) -> Self {
            MethodKey {
                name: name.to_string(),
                arity,
            }
        }
    }

    /// Per-document occurrence counts, one instance per document
    #[derive(Debug, Default)]
    pub struct OverloadCounter {
        counts: HashMap<MethodKey, usize>,
    }

    impl OverloadCounter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Record one occurrence of `key` and return its 1-based overload index
        pub fn next_index(&mut self, key: MethodKey) -> usize {
            let count = self.counts.entry(key).or_insert(0);
            *count += 1;
            *count
        }

        /// Occurrences seen so far for `key` (0 if never seen)
        pub fn count(&self, key: &MethodKey) -> usize {
            self.counts.get(key).copied().unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool {
            self.counts.is_empty()
        }
    }
}
