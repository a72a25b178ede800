//! The rule-set registry.
//!
//! Every suffix's rule-set is composed and compiled once, when the registry
//! is built, and is read-only afterwards. Supporting a new registry means
//! registering one more [`SuffixRules`] table; nothing already registered
//! changes.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use super::ruleset::{FieldSpec, RuleSet, SuffixRules};
use super::suffixes;
use crate::error::{QuillError, Result};

/// Process-wide registry holding the generic table and the built-in catalogue.
pub static REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| {
    Arc::new(
        RegistryBuilder::new()
            .with_catalogue()
            .build()
            .expect("Invalid built-in WHOIS rule catalogue"),
    )
});

/// Read-only table of composed rule-sets keyed by suffix.
#[derive(Debug)]
pub struct Registry {
    generic: Arc<RuleSet>,
    by_suffix: HashMap<String, Arc<RuleSet>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The rule-set used when no suffix table matches.
    pub fn generic(&self) -> &RuleSet {
        &self.generic
    }

    /// The rule-set registered for exactly this suffix key, if any.
    pub fn get(&self, suffix: &str) -> Option<&RuleSet> {
        self.by_suffix.get(suffix).map(Arc::as_ref)
    }

    pub(crate) fn lookup(&self, suffix: &str) -> Option<(&str, &RuleSet)> {
        self.by_suffix
            .get_key_value(suffix)
            .map(|(key, set)| (key.as_str(), set.as_ref()))
    }

    /// All registered suffix keys, sorted.
    pub fn suffixes(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_suffix.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Collects suffix tables and composes them into a [`Registry`].
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    base: &'static [FieldSpec],
    tables: Vec<&'static SuffixRules>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Starts from the generic base table with no suffix tables.
    pub fn new() -> Self {
        Self {
            base: suffixes::GENERIC,
            tables: Vec::new(),
        }
    }

    /// Replaces the generic base table.
    pub fn with_base(mut self, base: &'static [FieldSpec]) -> Self {
        self.base = base;
        self
    }

    pub fn with_suffix(mut self, table: &'static SuffixRules) -> Self {
        self.tables.push(table);
        self
    }

    /// Adds every built-in suffix table.
    pub fn with_catalogue(mut self) -> Self {
        self.tables.extend_from_slice(suffixes::CATALOGUE);
        self
    }

    /// Composes every table with the base and indexes it by suffix key.
    ///
    /// Fails on a pattern that does not compile or a suffix key claimed
    /// by two tables.
    pub fn build(self) -> Result<Registry> {
        let generic = Arc::new(RuleSet::compose(self.base, None)?);
        let mut by_suffix = HashMap::new();

        for table in &self.tables {
            let composed = Arc::new(RuleSet::compose(self.base, Some(*table))?);
            for suffix in table.suffixes {
                let key = suffix.trim_start_matches('.').to_lowercase();
                if by_suffix.insert(key.clone(), Arc::clone(&composed)).is_some() {
                    return Err(QuillError::DuplicateSuffix(key));
                }
            }
        }

        debug!(
            tables = self.tables.len(),
            suffixes = by_suffix.len(),
            "Built WHOIS rule registry"
        );

        Ok(Registry { generic, by_suffix })
    }
}
