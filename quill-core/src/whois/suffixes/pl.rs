//! NASK (.pl): dotted dates and a name server list whose continuation
//! lines are indented under the first entry.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static PL: SuffixRules = SuffixRules {
    registry: "NASK",
    suffixes: &["pl", "com.pl", "net.pl", "org.pl"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^DOMAIN NAME:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nameservers:[ \t]*([^\r\n]+\r?\n(?:[ \t]+\S[^\r\n]*\r?\n?)*)")
                .transform(Transform::Hostname)
                .block()],
        ),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^created:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^last modified:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^renewal date:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^REGISTRAR:[ \t]*\r?\n[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "registrant_type",
            &[RuleSpec::text(r"^registrant type:[ \t]*(.+)")],
        ),
    ],
};
