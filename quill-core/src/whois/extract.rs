//! Extraction engine: applies a composed rule-set to decoded text.

use tracing::trace;

use super::record::{FieldValue, Scalar};
use super::ruleset::RuleSet;

/// Runs every field's rules over `text` and collapses each match set.
///
/// Returns one entry per field of the rule-set, in rule-set order. Fields
/// with no surviving match are [`FieldValue::Absent`]; a dropped value
/// (blank capture, unparseable date) only affects its own field.
pub fn extract(text: &str, rules: &RuleSet) -> Vec<(String, FieldValue)> {
    rules
        .fields()
        .iter()
        .map(|field| {
            let matches: Vec<Scalar> = field
                .rules()
                .iter()
                .flat_map(|rule| rule.scan(text))
                .collect();

            trace!(field = field.name(), matches = matches.len(), "Scanned field");

            (field.name().to_string(), FieldValue::collapse(matches))
        })
        .collect()
}
