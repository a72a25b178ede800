//! ISOC-IL (.il): RIPE-style `key: value` objects, obfuscated e-mail
//! addresses and day-first validity dates.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static IL: SuffixRules = SuffixRules {
    registry: "ISOC-IL",
    suffixes: &[
        "il", "co.il", "org.il", "net.il", "ac.il", "gov.il", "muni.il", "idf.il", "k12.il",
    ],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^[ \t]*domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"validity:[ \t]*(.+)")]),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"person:[ \t]*(.+)")]),
        FieldDelta::replace("address", &[RuleSpec::text(r"^[ \t]*address:[ \t]*(.+)")]),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"DNSSEC:[ \t]*(.+)")]),
        FieldDelta::replace("status", &[RuleSpec::text(r"^[ \t]*status:[ \t]*(.+)")]),
        FieldDelta::replace("phone", &[RuleSpec::text(r"phone:[ \t]*(.+)")]),
        FieldDelta::replace("fax", &[RuleSpec::text(r"fax-no:[ \t]*(.+)")]),
        FieldDelta::replace(
            "emails",
            &[RuleSpec::text(r"e-mail:[ \t]*(.+)").transform(Transform::Email)],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"nserver:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("registrar", &[RuleSpec::text(r"registrar name:[ \t]*(.+)")]),
        FieldDelta::replace("referral_url", &[RuleSpec::text(r"registrar info:[ \t]*(.+)")]),
        FieldDelta::replace("admin_id", &[RuleSpec::text(r"admin-c:[ \t]*(.+)")]),
        FieldDelta::replace("tech_id", &[RuleSpec::text(r"tech-c:[ \t]*(.+)")]),
        FieldDelta::replace("zone_id", &[RuleSpec::text(r"zone-c:[ \t]*(.+)")]),
        FieldDelta::replace("description", &[RuleSpec::text(r"descr:[ \t]*(.+)")]),
    ],
};
