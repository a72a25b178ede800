//! Registro .it: unindented header fields followed by titled contact
//! sections whose lines are indented.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static IT: SuffixRules = SuffixRules {
    registry: "Registro .it",
    suffixes: &["it"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^Status:[ \t]*(.+)")]),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"^Signed:[ \t]*(.+)")]),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^Created:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^Last Update:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^Expire Date:[ \t]*(.+)")]),
        FieldDelta::replace(
            "org",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Organization:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "address",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Address:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "admin_name",
            &[RuleSpec::text(
                r"^Admin Contact[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Name:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "admin_org",
            &[RuleSpec::text(
                r"^Admin Contact[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Organization:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "tech_name",
            &[RuleSpec::text(
                r"^Technical Contacts[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Name:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "tech_org",
            &[RuleSpec::text(
                r"^Technical Contacts[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Organization:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(
                r"^Registrar[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?[ \t]+Organization:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Nameservers[ \t]*\r?\n((?:[ \t]+\S[^\r\n]*\r?\n?)+)")
                .transform(Transform::Hostname)
                .block()],
        ),
    ],
};
