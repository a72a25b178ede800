//! Rule tables and their composition.
//!
//! A registry's conventions are described by a generic base table plus a
//! [`SuffixRules`] delta. Composing the two yields a [`RuleSet`]: the base
//! fields in base order, each either kept, replaced or extended by the
//! delta, followed by any fields only the delta knows about.

use super::rules::{Rule, RuleSpec};
use crate::error::Result;

/// A canonical field and the rules feeding it, in the base table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [RuleSpec],
}

impl FieldSpec {
    pub const fn new(name: &'static str, rules: &'static [RuleSpec]) -> Self {
        Self { name, rules }
    }
}

/// How a delta entry combines with the base rules for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// Drop the base rules and use these instead.
    Replace,
    /// Run these after the base rules.
    Extend,
}

/// One entry of a suffix delta table.
#[derive(Debug, Clone, Copy)]
pub struct FieldDelta {
    pub name: &'static str,
    pub merge: Merge,
    pub rules: &'static [RuleSpec],
}

impl FieldDelta {
    pub const fn replace(name: &'static str, rules: &'static [RuleSpec]) -> Self {
        Self {
            name,
            merge: Merge::Replace,
            rules,
        }
    }

    pub const fn extend(name: &'static str, rules: &'static [RuleSpec]) -> Self {
        Self {
            name,
            merge: Merge::Extend,
            rules,
        }
    }
}

/// Delta table for the suffixes served by one registry.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRules {
    /// Human-readable registry name, used in logs.
    pub registry: &'static str,
    /// Suffix keys this table is selected for, without leading dot.
    pub suffixes: &'static [&'static str],
    pub fields: &'static [FieldDelta],
}

/// Compiled rules feeding one field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// An ordered, compiled mapping from field name to rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    registry: &'static str,
    fields: Vec<FieldRules>,
}

impl RuleSet {
    /// Composes the base table with an optional delta and compiles the result.
    ///
    /// The outcome depends only on the two tables, never on the order in
    /// which rule-sets are built.
    pub fn compose(base: &[FieldSpec], delta: Option<&SuffixRules>) -> Result<Self> {
        let mut specs: Vec<(&'static str, Vec<RuleSpec>)> = base
            .iter()
            .map(|field| (field.name, field.rules.to_vec()))
            .collect();

        if let Some(delta) = delta {
            for entry in delta.fields {
                match specs.iter_mut().find(|(name, _)| *name == entry.name) {
                    Some((_, rules)) => match entry.merge {
                        Merge::Replace => *rules = entry.rules.to_vec(),
                        Merge::Extend => rules.extend_from_slice(entry.rules),
                    },
                    None => specs.push((entry.name, entry.rules.to_vec())),
                }
            }
        }

        let fields = specs
            .into_iter()
            .map(|(name, rules)| {
                let rules = rules
                    .iter()
                    .map(|spec| spec.compile(name))
                    .collect::<Result<Vec<_>>>()?;
                Ok(FieldRules { name, rules })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            registry: delta.map_or("generic", |d| d.registry),
            fields,
        })
    }

    /// Name of the registry whose delta was applied, or `"generic"`.
    pub fn registry(&self) -> &'static str {
        self.registry
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}
