//! AFNIC (.fr and the overseas suffixes it runs): RIPE-style objects where
//! every contact object repeats `registrar:` and `status`-like keys.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static FR: SuffixRules = SuffixRules {
    registry: "AFNIC",
    suffixes: &["fr", "re", "pm", "tf", "wf", "yt"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^status:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^registrar:[ \t]*(.+)").first_only()],
        ),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^created:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^last-update:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nserver:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace("holder_id", &[RuleSpec::text(r"^holder-c:[ \t]*(.+)")]),
        FieldDelta::replace("admin_id", &[RuleSpec::text(r"^admin-c:[ \t]*(.+)")]),
        FieldDelta::replace("tech_id", &[RuleSpec::text(r"^tech-c:[ \t]*(.+)")]),
    ],
};
