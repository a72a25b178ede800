//! Punktum dk (.dk): plain labels plus `Registrant` and `Nameservers`
//! sections whose lines are unprefixed.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static DK: SuffixRules = SuffixRules {
    registry: "Punktum dk",
    suffixes: &["dk"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("creation_date", &[RuleSpec::date(r"^Registered:[ \t]*(.+)")]),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^Expires:[ \t]*(.+)")]),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"^DNSSEC:[ \t]*(.+)")]),
        FieldDelta::replace("status", &[RuleSpec::text(r"^Status:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Hostname:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace(
            "registrant_handle",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Handle:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "registrant_name",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Name:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "registrant_address",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Address:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "registrant_zipcode",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Postalcode:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "registrant_city",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?City:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "registrant_country",
            &[RuleSpec::text(
                r"^Registrant[ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Country:[ \t]*(.+)",
            )
            .first_only()],
        ),
    ],
};
