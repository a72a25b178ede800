//! CIRA (.ca): indented contact blocks with `Name:` lines and a bare
//! `Name servers:` list.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static CA: SuffixRules = SuffixRules {
    registry: "CIRA",
    suffixes: &["ca"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"Domain name:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "registrant_name",
            &[
                RuleSpec::text(r"Registrar:\s*Name:[ \t]*(.+)"),
                RuleSpec::text(r"Registrant:\s*Name:[ \t]*(.+)"),
                RuleSpec::text(r"Administrative contact:\s*Name:[ \t]*(.+)"),
                RuleSpec::text(r"Technical contact:\s*Name:[ \t]*(.+)"),
            ],
        ),
        FieldDelta::replace("emails", &[RuleSpec::text(r"Email:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"Updated date:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"Creation date:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"Expiry date:[ \t]*(.+)")]),
        FieldDelta::extend(
            "name_servers",
            &[RuleSpec::text(r"Name servers:[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block()],
        ),
        FieldDelta::replace(
            "registrant_number",
            &[RuleSpec::text(r"Registrar:\s*Name:[^\n]*\n\s*Number:[ \t]*(.+)")],
        ),
        FieldDelta::replace("domain_status", &[RuleSpec::text(r"Domain status:[ \t]*(.+)")]),
        FieldDelta::replace("phone", &[RuleSpec::text(r"Phone:[ \t]*(.+)")]),
        FieldDelta::replace("fax", &[RuleSpec::text(r"Fax:[ \t]*(.+)")]),
    ],
};
