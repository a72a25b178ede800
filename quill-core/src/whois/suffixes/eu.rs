//! EURid (.eu): indented sections, no registration dates published.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static EU: SuffixRules = SuffixRules {
    registry: "EURid",
    suffixes: &["eu"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(
                r"^Registrar:[ \t]*\r?\n(?:[ \t]+[^\r\n]+\r?\n){0,4}?[ \t]+Name:[ \t]*(.+)",
            )],
        ),
        FieldDelta::replace(
            "referral_url",
            &[RuleSpec::text(
                r"^Registrar:[ \t]*\r?\n(?:[ \t]+[^\r\n]+\r?\n){0,4}?[ \t]+Website:[ \t]*(.+)",
            )],
        ),
        FieldDelta::replace(
            "tech_org",
            &[RuleSpec::text(
                r"^Technical:[ \t]*\r?\n(?:[ \t]+[^\r\n]+\r?\n){0,4}?[ \t]+Organisation:[ \t]*(.+)",
            )],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Name servers:[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block()],
        ),
    ],
};
