//! Norid (.no): dot-padded labels; only handles are published.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static NO: SuffixRules = SuffixRules {
    registry: "Norid",
    suffixes: &["no"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain Name\.*:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("domain_id", &[RuleSpec::text(r"^NORID Handle\.*:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrar_handle",
            &[RuleSpec::text(r"^Registrar Handle\.*:[ \t]*(.+)")],
        ),
        FieldDelta::replace("tech_id", &[RuleSpec::text(r"^Tech-c Handle\.*:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_server_handles",
            &[RuleSpec::text(r"^Name Server Handle\.*:[ \t]*(.+)")],
        ),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^Created:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^Last updated:[ \t]*(.+)")]),
    ],
};
