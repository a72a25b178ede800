//! TCI (.ru, .su, .рф): RIPE-style keys with `paid-till` and `free-date`.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static RU: SuffixRules = SuffixRules {
    registry: "TCI",
    suffixes: &["ru", "su", "xn--p1ai"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nserver:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^state:[ \t]*(.+)")]),
        FieldDelta::replace("org", &[RuleSpec::text(r"^org:[ \t]*(.+)")]),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^person:[ \t]*(.+)")]),
        FieldDelta::replace("registrar", &[RuleSpec::text(r"^registrar:[ \t]*(.+)")]),
        FieldDelta::replace("admin_contact", &[RuleSpec::text(r"^admin-contact:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^created:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^paid-till:[ \t]*(.+)")]),
        FieldDelta::replace("free_date", &[RuleSpec::date(r"^free-date:[ \t]*(.+)")]),
    ],
};
