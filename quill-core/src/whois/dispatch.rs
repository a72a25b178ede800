//! Suffix dispatch: picking the rule-set for a domain name.
//!
//! Candidates run from the most specific suffix (every label after the
//! first) down to the final label, so compound keys such as `co.uk` or
//! `org.il` win over the bare top-level key. When nothing matches, the
//! generic rule-set applies; dispatch never fails.

use tracing::debug;

use super::registry::Registry;
use super::ruleset::RuleSet;

/// Outcome of dispatching one domain name.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// The matched suffix key, `None` for the generic fallback.
    pub suffix: Option<&'a str>,
    pub rules: &'a RuleSet,
}

/// Lower-cases the name and drops surrounding whitespace and a trailing root dot.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}

/// Candidate suffix keys for an already normalized name, most specific first.
///
/// `python.org.il` yields `org.il` then `il`. A single-label name yields nothing.
pub fn suffix_candidates(domain: &str) -> impl Iterator<Item = &str> {
    domain
        .match_indices('.')
        .map(move |(i, _)| &domain[i + 1..])
        .filter(|suffix| !suffix.is_empty())
}

impl Registry {
    /// Selects the most specific registered rule-set for `domain`.
    pub fn resolve(&self, domain: &str) -> Resolved<'_> {
        let domain = normalize_domain(domain);

        for candidate in suffix_candidates(&domain) {
            if let Some((suffix, rules)) = self.lookup(candidate) {
                debug!(domain = %domain, suffix = suffix, registry = rules.registry(), "Selected suffix rules");
                return Resolved {
                    suffix: Some(suffix),
                    rules,
                };
            }
        }

        debug!(domain = %domain, "No suffix rules, using generic");
        Resolved {
            suffix: None,
            rules: self.generic(),
        }
    }
}
