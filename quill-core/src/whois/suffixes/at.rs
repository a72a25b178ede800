//! nic.at (.at): the registrant's contact object is printed first.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static AT: SuffixRules = SuffixRules {
    registry: "nic.at",
    suffixes: &["at", "co.at", "or.at"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^registrar:[ \t]*(.+?)(?:[ \t]*\([^)]*\))?[ \t]*\r?$")],
        ),
        FieldDelta::replace("registrant_id", &[RuleSpec::text(r"^registrant:[ \t]*(.+)")]),
        FieldDelta::replace("tech_id", &[RuleSpec::text(r"^tech-c:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nserver:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace(
            "updated_date",
            &[RuleSpec::date(r"^changed:[ \t]*(.+)").first_only()],
        ),
        FieldDelta::replace(
            "registrant_name",
            &[RuleSpec::text(r"^personname:[ \t]*(.+)").first_only()],
        ),
        FieldDelta::replace("org", &[RuleSpec::text(r"^organization:[ \t]*(.+)").first_only()]),
        FieldDelta::replace(
            "address",
            &[RuleSpec::text(r"^street address:[ \t]*(.+)").first_only()],
        ),
        FieldDelta::replace("zipcode", &[RuleSpec::text(r"^postal code:[ \t]*(.+)").first_only()]),
        FieldDelta::replace("city", &[RuleSpec::text(r"^city:[ \t]*(.+)").first_only()]),
        FieldDelta::replace("country", &[RuleSpec::text(r"^country:[ \t]*(.+)").first_only()]),
    ],
};
