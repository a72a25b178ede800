//! JPRS (.jp): bracketed labels, optionally prefixed with a letter index.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static JP: SuffixRules = SuffixRules {
    registry: "JPRS",
    suffixes: &["jp", "co.jp", "ne.jp", "or.jp", "ac.jp", "go.jp", "ad.jp", "ed.jp", "gr.jp", "lg.jp"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"\[Domain Name\][ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "registrant_name",
            &[
                RuleSpec::text(r"\[Registrant\][ \t]*(.+)"),
                RuleSpec::text(r"\[Organization\][ \t]*(.+)"),
            ],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"\[Name Server\][ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace(
            "creation_date",
            &[
                RuleSpec::date(r"\[Created on\][ \t]*(.+)"),
                RuleSpec::date(r"\[Registered Date\][ \t]*(.+)"),
            ],
        ),
        FieldDelta::replace(
            "expiration_date",
            &[
                RuleSpec::date(r"\[Expires on\][ \t]*(.+)"),
                RuleSpec::date(r"\[State\][ \t]*\S+[ \t]*\((\d{4}/\d{2}/\d{2})\)"),
            ],
        ),
        FieldDelta::replace(
            "updated_date",
            &[RuleSpec::date(r"\[Last Update(?:d)?\][ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "status",
            &[
                RuleSpec::text(r"\[Status\][ \t]*(.+)"),
                RuleSpec::text(r"\[State\][ \t]*(\S+)"),
            ],
        ),
    ],
};
