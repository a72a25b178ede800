//! Extraction rules: a text pattern bound to a canonical field.
//!
//! [`RuleSpec`] is the declarative, `const`-constructible form used by the
//! suffix tables. [`Rule`] is its compiled counterpart held by a composed
//! [`RuleSet`](super::ruleset::RuleSet).

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::date;
use super::record::Scalar;
use crate::error::{QuillError, Result};

/// Post-processing applied to every captured value.
///
/// All variants trim surrounding whitespace first. A value that ends up
/// empty is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    Trim,
    Lowercase,
    /// Undoes the `user AT example.org` obfuscation some registries use.
    Email,
    /// First whitespace-separated token, lower-cased, without a trailing root dot.
    Hostname,
    /// Routes the value through the date normalizer; unparseable values are dropped.
    Date,
}

impl Transform {
    /// Applies the transform to one raw capture.
    pub fn apply(self, raw: &str) -> Option<Scalar> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        let text = match self {
            Transform::Trim => value.to_string(),
            Transform::Lowercase => value.to_lowercase(),
            Transform::Email => deobfuscate_email(value),
            Transform::Hostname => value
                .split_whitespace()
                .next()?
                .trim_end_matches('.')
                .to_lowercase(),
            Transform::Date => return parse_date(value).map(Scalar::DateTime),
        };
        Some(Scalar::Text(text))
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let parsed = date::normalize(value);
    if parsed.is_none() {
        debug!(fragment = value, "Dropping unparseable date");
    }
    parsed
}

fn deobfuscate_email(value: &str) -> String {
    value.replace(" AT ", "@").replace(" at ", "@")
}

/// How many matches of one rule reach the field's match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// Every match in the document contributes.
    #[default]
    CollectAll,
    /// Only the first match in the document contributes, if any.
    ScalarOrAbsent,
}

/// Declarative rule as written in the suffix tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub transform: Transform,
    pub cardinality: Cardinality,
    /// The capture is a block of lines, each non-blank line being one value.
    pub block: bool,
}

impl RuleSpec {
    /// A text rule collecting every match.
    pub const fn text(pattern: &'static str) -> Self {
        Self {
            pattern,
            transform: Transform::Trim,
            cardinality: Cardinality::CollectAll,
            block: false,
        }
    }

    /// A date rule collecting every match that normalizes.
    pub const fn date(pattern: &'static str) -> Self {
        Self::text(pattern).transform(Transform::Date)
    }

    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub const fn first_only(mut self) -> Self {
        self.cardinality = Cardinality::ScalarOrAbsent;
        self
    }

    /// Treats each line of the capture as a separate value.
    pub const fn block(mut self) -> Self {
        self.block = true;
        self
    }

    /// Compiles the pattern case-insensitively with `^`/`$` matching at line bounds.
    pub fn compile(&self, field: &str) -> Result<Rule> {
        let pattern = RegexBuilder::new(self.pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|source| QuillError::InvalidPattern {
                field: field.to_string(),
                source,
            })?;

        Ok(Rule {
            pattern,
            transform: self.transform,
            cardinality: self.cardinality,
            block: self.block,
        })
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    transform: Transform,
    cardinality: Cardinality,
    block: bool,
}

impl Rule {
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Scans the whole text and returns the transformed values in document order.
    ///
    /// Every participating capture group contributes, in group order. A
    /// pattern without groups contributes the whole match. Block rules
    /// split each capture into lines first.
    pub fn scan(&self, text: &str) -> Vec<Scalar> {
        let mut values = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let raws: Vec<&str> = if caps.len() > 1 {
                caps.iter().skip(1).flatten().map(|m| m.as_str()).collect()
            } else {
                caps.get(0).map(|m| m.as_str()).into_iter().collect()
            };

            for raw in raws {
                if self.block {
                    values.extend(raw.lines().filter_map(|line| self.transform.apply(line)));
                } else {
                    values.extend(self.transform.apply(raw));
                }
            }

            if self.cardinality == Cardinality::ScalarOrAbsent && !values.is_empty() {
                break;
            }
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(spec: RuleSpec) -> Rule {
        spec.compile("test").unwrap()
    }

    #[test]
    fn test_email_deobfuscation() {
        assert_eq!(
            Transform::Email.apply("  hostmaster AT arik.baratz.org "),
            Some(Scalar::Text("hostmaster@arik.baratz.org".to_string()))
        );
        assert_eq!(
            Transform::Email.apply("plain@example.org"),
            Some(Scalar::Text("plain@example.org".to_string()))
        );
    }

    #[test]
    fn test_transforms_drop_empty() {
        assert_eq!(Transform::Trim.apply("   "), None);
        assert_eq!(Transform::Date.apply(""), None);
        assert_eq!(Transform::Date.apply("sometime soon"), None);
    }

    #[test]
    fn test_hostname_and_lowercase() {
        assert_eq!(
            Transform::Hostname.apply("NS1.Example.de. 192.0.2.1"),
            Some(Scalar::Text("ns1.example.de".to_string()))
        );
        assert_eq!(
            Transform::Lowercase.apply("NS1.EXAMPLE.COM"),
            Some(Scalar::Text("ns1.example.com".to_string()))
        );
    }

    #[test]
    fn test_scan_collects_all_in_document_order() {
        let rule = compile(RuleSpec::text(r"Name Server:[ \t]*(.+)"));
        let text = "Name Server: b.example\nname server: a.example\nName Server: b.example\n";
        assert_eq!(
            rule.scan(text),
            vec![
                Scalar::Text("b.example".to_string()),
                Scalar::Text("a.example".to_string()),
                Scalar::Text("b.example".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_first_only() {
        let rule = compile(RuleSpec::text(r"Name:[ \t]*(.+)").first_only());
        assert_eq!(
            rule.scan("Name: first\nName: second\n"),
            vec![Scalar::Text("first".to_string())]
        );
    }

    #[test]
    fn test_scan_block_splits_lines() {
        let rule = compile(
            RuleSpec::text(r"Name servers:[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block(),
        );
        let text = "Name servers:\n    ns1.example.co.uk\n    NS2.example.co.uk 192.0.2.2\n\nDNSSEC: no\n";
        assert_eq!(
            rule.scan(text),
            vec![
                Scalar::Text("ns1.example.co.uk".to_string()),
                Scalar::Text("ns2.example.co.uk".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_without_groups_uses_whole_match() {
        let rule = compile(RuleSpec::text(r"[\w.-]+@[\w.-]+\.\w{2,4}"));
        assert_eq!(
            rule.scan("contact abuse@example.com or noc@example.net today"),
            vec![
                Scalar::Text("abuse@example.com".to_string()),
                Scalar::Text("noc@example.net".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_drops_blank_capture() {
        let rule = compile(RuleSpec::text(r"Registrar:[ \t]*(.+)"));
        assert!(rule.scan("Registrar:   \n    Name: Webnames.ca Inc.\n").is_empty());
    }

    #[test]
    fn test_invalid_pattern_reports_field() {
        let err = RuleSpec::text(r"(unclosed").compile("registrar").unwrap_err();
        assert!(matches!(err, QuillError::InvalidPattern { ref field, .. } if field == "registrar"));
    }
}
