//! DENIC (.de): flat labels plus bracketed contact sections.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static DE: SuffixRules = SuffixRules {
    registry: "DENIC",
    suffixes: &["de"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Nserver:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^Status:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^Changed:[ \t]*(.+)")]),
        FieldDelta::replace("dnssec", &[RuleSpec::text(r"^Dnskey:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrant_name",
            &[RuleSpec::text(r"^\[Holder\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Name:[ \t]*(.+)")
                .first_only()],
        ),
        FieldDelta::replace(
            "org",
            &[RuleSpec::text(
                r"^\[Holder\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Organisation:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "address",
            &[RuleSpec::text(r"^\[Holder\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Address:[ \t]*(.+)")
                .first_only()],
        ),
        FieldDelta::replace(
            "zipcode",
            &[RuleSpec::text(
                r"^\[Holder\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?PostalCode:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "city",
            &[RuleSpec::text(r"^\[Holder\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?City:[ \t]*(.+)")
                .first_only()],
        ),
        FieldDelta::replace(
            "country",
            &[RuleSpec::text(
                r"^\[Holder\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?CountryCode:[ \t]*(.+)",
            )
            .first_only()],
        ),
        FieldDelta::replace(
            "tech_name",
            &[RuleSpec::text(r"^\[Tech-C\][ \t]*\r?\n(?:[^\r\n]+\r?\n){0,8}?Name:[ \t]*(.+)")
                .first_only()],
        ),
    ],
};

#[cfg(test)]
mod tests {
    const SAMPLE: &str = r#"
Domain: example.de
Nserver: ns1.example.de 192.0.2.1
Nserver: ns2.example.de
Status: connect
Changed: 2023-01-15T10:30:00+01:00

[Holder]
Type: PERSON
Name: Max Mustermann
Address: Musterstraße 1
PostalCode: 12345
City: Musterstadt
CountryCode: DE

[Tech-C]
Type: PERSON
Name: Technical Contact
"#;

    #[test]
    fn test_denic_basic() {
        let record = crate::load("example.de", SAMPLE).unwrap();

        assert_eq!(record.suffix(), Some("de"));
        assert_eq!(record.get("domain_name").as_text(), Some("example.de"));
        assert_eq!(record.get("status").as_text(), Some("connect"));

        let servers: Vec<String> = record
            .get("name_servers")
            .values()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(servers, vec!["ns1.example.de", "ns2.example.de"]);
    }

    #[test]
    fn test_denic_changed_offset_applied() {
        let record = crate::load("example.de", SAMPLE).unwrap();
        assert_eq!(
            record.get("updated_date").as_scalar().unwrap().to_string(),
            "2023-01-15 09:30:00"
        );
    }

    #[test]
    fn test_denic_sections_do_not_bleed() {
        let record = crate::load("example.de", SAMPLE).unwrap();

        assert_eq!(record.get("registrant_name").as_text(), Some("Max Mustermann"));
        assert_eq!(record.get("tech_name").as_text(), Some("Technical Contact"));
        assert_eq!(record.get("address").as_text(), Some("Musterstraße 1"));
        assert_eq!(record.get("zipcode").as_text(), Some("12345"));
        assert_eq!(record.get("city").as_text(), Some("Musterstadt"));
        assert_eq!(record.get("country").as_text(), Some("DE"));
        assert!(record.get("org").is_absent());
    }
}
