//! Traficom (.fi): labels padded to a fixed width with dots.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static FI: SuffixRules = SuffixRules {
    registry: "Traficom",
    suffixes: &["fi"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^domain\.*:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^status\.*:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^created\.*:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^modified\.*:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^expires\.*:[ \t]*(.+)")]),
        FieldDelta::replace("available_date", &[RuleSpec::date(r"^available\.*:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nserver\.*:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"^dnssec\.*:[ \t]*(.+)")]),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^name\.*:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrant_number",
            &[RuleSpec::text(r"^register number\.*:[ \t]*(.+)")],
        ),
        FieldDelta::replace("address", &[RuleSpec::text(r"^address\.*:[ \t]*(.+)")]),
        FieldDelta::replace("zipcode", &[RuleSpec::text(r"^postal\.*:[ \t]*(.+)")]),
        FieldDelta::replace("city", &[RuleSpec::text(r"^city\.*:[ \t]*(.+)")]),
        FieldDelta::replace("country", &[RuleSpec::text(r"^country\.*:[ \t]*(.+)")]),
        FieldDelta::replace("phone", &[RuleSpec::text(r"^phone\.*:[ \t]*(.+)")]),
        FieldDelta::replace("registrar", &[RuleSpec::text(r"^registrar\.*:[ \t]*(.+)")]),
        FieldDelta::replace("referral_url", &[RuleSpec::text(r"^www\.*:[ \t]*(.+)")]),
    ],
};
