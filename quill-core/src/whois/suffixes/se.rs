//! Internetstiftelsen (.se, .nu).

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static SE: SuffixRules = SuffixRules {
    registry: "Internetstiftelsen",
    suffixes: &["se", "nu"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^holder:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^created:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^modified:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^expires:[ \t]*(.+)")]),
        FieldDelta::replace("transfer_date", &[RuleSpec::date(r"^transferred:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nserver:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"^dnssec:[ \t]*(.+)")]),
        FieldDelta::replace("status", &[RuleSpec::text(r"^status:[ \t]*(.+)")]),
        FieldDelta::replace("domain_state", &[RuleSpec::text(r"^state:[ \t]*(.+)")]),
        FieldDelta::replace("registry_lock", &[RuleSpec::text(r"^registry-lock:[ \t]*(.+)")]),
        FieldDelta::replace("registrar", &[RuleSpec::text(r"^registrar:[ \t]*(.+)")]),
    ],
};
