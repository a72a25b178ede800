//! DNS.PT (.pt): `Owner` and `Admin` prefixed contact lines, name servers
//! followed by address annotations.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static PT: SuffixRules = SuffixRules {
    registry: "DNS.PT",
    suffixes: &["pt", "com.pt", "org.pt"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("status", &[RuleSpec::text(r"^Domain Status:[ \t]*(.+)")]),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^Owner Name:[ \t]*(.+)")]),
        FieldDelta::replace("address", &[RuleSpec::text(r"^Owner Address:[ \t]*(.+)")]),
        FieldDelta::replace("city", &[RuleSpec::text(r"^Owner Locality:[ \t]*(.+)")]),
        FieldDelta::replace("zipcode", &[RuleSpec::text(r"^Owner ZipCode:[ \t]*(.+)")]),
        FieldDelta::replace("country", &[RuleSpec::text(r"^Owner Country Code:[ \t]*(.+)")]),
        FieldDelta::replace("admin_name", &[RuleSpec::text(r"^Admin Name:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^Name Server:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
    ],
};

#[cfg(test)]
mod tests {
    const SAMPLE: &str = "\
Domain: tap.pt\r
Domain Status: Registered\r
Creation Date: 14/01/1997 00:00:00\r
Expiration Date: 20/07/2025 23:59:42\r
Owner Name: Transportes Aereos Portugueses SA\r
Owner Address: Aeroporto de Lisboa Edificio 19\r
Owner Locality: Lisboa\r
Owner ZipCode: 1704-801\r
Owner Locality ZipCode: Lisboa\r
Owner Country Code: PT\r
Owner Email: dnsadmin@tap.pt\r
Admin Name: Eurodns S.A.\r
Admin Locality: Leudelange\r
Admin Country Code: LU\r
Admin Email: dnspt@admin.eurodns.com\r
Name Server: ns1-04.azure-dns.com | IPv4:  and IPv6: \r
Name Server: ns4-04.azure-dns.info | IPv4:  and IPv6: \r
Name Server: ns2-04.azure-dns.net | IPv4:  and IPv6: \r
Name Server: ns3-04.azure-dns.org | IPv4:  and IPv6: \r
";

    #[test]
    fn test_parse_dns_pt_response() {
        let record = crate::load("tap.pt", SAMPLE).unwrap();

        assert_eq!(record.get("domain_name").as_text(), Some("tap.pt"));
        assert_eq!(record.get("status").as_text(), Some("Registered"));
        assert_eq!(
            record.get("registrant_name").as_text(),
            Some("Transportes Aereos Portugueses SA")
        );
        assert_eq!(record.get("zipcode").as_text(), Some("1704-801"));
        assert_eq!(record.get("country").as_text(), Some("PT"));
        assert_eq!(record.get("admin_name").as_text(), Some("Eurodns S.A."));
        assert_eq!(record.get("emails").len(), 2);
        assert_eq!(
            record.get("name_servers").values()[1].to_string(),
            "ns4-04.azure-dns.info"
        );
    }

    #[test]
    fn test_day_first_slash_dates() {
        let record = crate::load("tap.pt", SAMPLE).unwrap();

        assert_eq!(
            record.get("creation_date").as_scalar().unwrap().to_string(),
            "1997-01-14 00:00:00"
        );
        assert_eq!(
            record.get("expiration_date").as_scalar().unwrap().to_string(),
            "2025-07-20 23:59:42"
        );
    }
}
