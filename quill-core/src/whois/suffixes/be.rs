//! DNS Belgium (.be): tab-separated values and indented sections.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static BE: SuffixRules = SuffixRules {
    registry: "DNS Belgium",
    suffixes: &["be"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^Status:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^Registered:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^Registrar:[ \t]*\r?\n[ \t]+Name:[ \t]*(.+)")],
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
                r"^Registrar Technical Contacts:[ \t]*\r?\n(?:[ \t]+[^\r\n]+\r?\n){0,4}?[ \t]+Organisation:[ \t]*(.+)",
            )],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Nameservers:[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block()],
        ),
    ],
};
