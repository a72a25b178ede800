//! SIDN (.nl): registrar and name servers on indented lines below their label.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static NL: SuffixRules = SuffixRules {
    registry: "SIDN",
    suffixes: &["nl"],
    fields: &[
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^Registrar:[ \t]*\r?\n[ \t]+(.+)")],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Domain nameservers:[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block()],
        ),
        FieldDelta::replace(
            "maintained_by",
            &[RuleSpec::text(r"^Record maintained by:[ \t]*(.+)")],
        ),
    ],
};
