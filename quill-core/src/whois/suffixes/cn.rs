//! CNNIC (.cn): ICANN-like labels with its own date keys.

use crate::whois::rules::RuleSpec;
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static CN: SuffixRules = SuffixRules {
    registry: "CNNIC",
    suffixes: &["cn", "com.cn", "net.cn", "org.cn", "gov.cn", "ac.cn"],
    fields: &[
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^Registrant:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^Sponsoring Registrar:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "creation_date",
            &[RuleSpec::date(r"^Registration Time:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "expiration_date",
            &[RuleSpec::date(r"^Expiration Time:[ \t]*(.+)")],
        ),
        FieldDelta::replace("roid", &[RuleSpec::text(r"^ROID:[ \t]*(.+)")]),
    ],
};
