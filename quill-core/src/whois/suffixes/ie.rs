//! IEDR (.ie): RIPE-style objects with `registration:`/`renewal:` dates.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static IE: SuffixRules = SuffixRules {
    registry: "IEDR",
    suffixes: &["ie"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^[ \t]*domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("description", &[RuleSpec::text(r"descr:[ \t]*(.+)")]),
        FieldDelta::replace("source", &[RuleSpec::text(r"source:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"registration:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"renewal:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"nserver:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"ren-status:[ \t]*(.+)")]),
        FieldDelta::replace("admin_id", &[RuleSpec::text(r"admin-c:[ \t]*(.+)")]),
        FieldDelta::replace("tech_id", &[RuleSpec::text(r"tech-c:[ \t]*(.+)")]),
        FieldDelta::replace("holder_type", &[RuleSpec::text(r"holder-type:[ \t]*(.+)")]),
        FieldDelta::replace("locked", &[RuleSpec::text(r"locked:[ \t]*(.+)")]),
    ],
};
