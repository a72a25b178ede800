//! Nominet (.uk): labels on their own line with the value indented below.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static UK: SuffixRules = SuffixRules {
    registry: "Nominet",
    suffixes: &["uk", "co.uk", "org.uk", "me.uk", "ltd.uk", "plc.uk", "net.uk", "sch.uk"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"Domain name:\s*(\S+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"Registrant:\s*(.+)")]),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"Registrar:\s*(.+?)(?:\s*\[Tag = [^\]]*\])?[ \t]*\r?$")],
        ),
        FieldDelta::replace(
            "creation_date",
            &[
                RuleSpec::date(r"Registered on:\s*(.+)"),
                RuleSpec::date(r"Registration date:\s*(.+)"),
            ],
        ),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"Expiry date:\s*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"Last updated:\s*(.+)")]),
        FieldDelta::replace("status", &[RuleSpec::text(r"Registration status:\s*(.+)")]),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"DNSSEC:\s*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"Name servers:[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block()],
        ),
    ],
};
