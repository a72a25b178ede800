//! Generic rules for ICANN-style responses (thick gTLD registries, registrar
//! WHOIS and the many ccTLDs that copied the format).
//!
//! Every suffix table is applied on top of this one.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::FieldSpec;

pub static GENERIC: &[FieldSpec] = &[
    FieldSpec::new(
        "domain_name",
        &[RuleSpec::text(r"Domain Name:[ \t]*(.+)").transform(Transform::Lowercase)],
    ),
    FieldSpec::new(
        "registrar",
        &[
            RuleSpec::text(r"Registrar:[ \t]*(.+)"),
            RuleSpec::text(r"Registrar Name:[ \t]*(.+)"),
        ],
    ),
    FieldSpec::new(
        "whois_server",
        &[RuleSpec::text(r"Whois Server:[ \t]*(.+)").transform(Transform::Lowercase)],
    ),
    FieldSpec::new(
        "referral_url",
        &[
            RuleSpec::text(r"Referral URL:[ \t]*(.+)"),
            RuleSpec::text(r"Registrar URL:[ \t]*(.+)"),
        ],
    ),
    FieldSpec::new(
        "updated_date",
        &[
            RuleSpec::date(r"Updated Date:[ \t]*(.+)"),
            RuleSpec::date(r"Last Updated On:[ \t]*(.+)"),
        ],
    ),
    FieldSpec::new(
        "creation_date",
        &[
            RuleSpec::date(r"Creation Date:[ \t]*(.+)"),
            RuleSpec::date(r"Created On:[ \t]*(.+)"),
            RuleSpec::date(r"^[ \t]*Registration Date:[ \t]*(.+)"),
        ],
    ),
    FieldSpec::new(
        "expiration_date",
        &[
            RuleSpec::date(r"Expir\w+ Date:[ \t]*(.+)"),
            RuleSpec::date(r"Expires On:[ \t]*(.+)"),
        ],
    ),
    FieldSpec::new(
        "name_servers",
        &[
            RuleSpec::text(r"Name Server:[ \t]*(.+)").transform(Transform::Lowercase),
            RuleSpec::text(r"^[ \t]*Nameserver:[ \t]*(.+)").transform(Transform::Lowercase),
        ],
    ),
    FieldSpec::new("status", &[RuleSpec::text(r"Status:[ \t]*(.+)")]),
    FieldSpec::new("emails", &[RuleSpec::text(r"[\w.-]+@[\w.-]+\.\w{2,4}")]),
    FieldSpec::new(
        "dnssec",
        &[
            RuleSpec::text(r"dnssec:[ \t]*(\S+)"),
            RuleSpec::text(r"DNSSEC Status:[ \t]*(\S+)"),
        ],
    ),
    FieldSpec::new("registrant_name", &[RuleSpec::text(r"Registrant Name:[ \t]*(.+)")]),
    FieldSpec::new("org", &[RuleSpec::text(r"Registrant\s*Organization:[ \t]*(.+)")]),
    FieldSpec::new("address", &[RuleSpec::text(r"Registrant Street:[ \t]*(.+)")]),
    FieldSpec::new("city", &[RuleSpec::text(r"Registrant City:[ \t]*(.+)")]),
    FieldSpec::new("state", &[RuleSpec::text(r"Registrant State/Province:[ \t]*(.+)")]),
    FieldSpec::new("zipcode", &[RuleSpec::text(r"Registrant Postal Code:[ \t]*(.+)")]),
    FieldSpec::new("country", &[RuleSpec::text(r"Registrant Country:[ \t]*(.+)")]),
];
