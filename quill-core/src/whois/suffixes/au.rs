//! auDA (.au): ICANN-style output with registrant eligibility details.

use crate::whois::rules::RuleSpec;
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static AU: SuffixRules = SuffixRules {
    registry: "auDA",
    suffixes: &["au", "com.au", "net.au", "org.au", "edu.au", "gov.au", "asn.au", "id.au"],
    fields: &[
        FieldDelta::replace("registrar", &[RuleSpec::text(r"^Registrar Name:[ \t]*(.+)")]),
        FieldDelta::replace("updated_date", &[RuleSpec::date(r"^Last Modified:[ \t]*(.+)")]),
        FieldDelta::replace("org", &[RuleSpec::text(r"^Registrant:[ \t]*(.+)")]),
        FieldDelta::replace(
            "registrant_name",
            &[RuleSpec::text(r"^Registrant Contact Name:[ \t]*(.+)")],
        ),
        FieldDelta::replace("registrant_id", &[RuleSpec::text(r"^Registrant ID:[ \t]*(.+)")]),
        FieldDelta::replace("tech_name", &[RuleSpec::text(r"^Tech Contact Name:[ \t]*(.+)")]),
        FieldDelta::replace(
            "eligibility_type",
            &[RuleSpec::text(r"^Eligibility Type:[ \t]*(.+)")],
        ),
    ],
};

#[cfg(test)]
mod tests {
    const SAMPLE: &str = "\
Domain Name: news.com.au\r
Registry Domain ID: 6b5aaf82756343e5aa9842f050d38f81-AU\r
Registrar WHOIS Server: whois.auda.org.au\r
Registrar URL: https://www.cscdigitalbrand.services\r
Last Modified: 2024-07-06T05:05:35Z\r
Registrar Name: Corporation Service Company (Aust) Pty Ltd\r
Registrar Abuse Contact Email: domainabuse@cscglobal.com\r
Registrar Abuse Contact Phone: +1.8887802723\r
Reseller Name: \r
Status: clientDeleteProhibited https://identitydigital.au/get-au/whois-status-codes#clientDeleteProhibited\r
Status: serverDeleteProhibited https://identitydigital.au/get-au/whois-status-codes#serverDeleteProhibited\r
Status Reason: Registry Lock\r
Registrant Contact ID: 6015c5ca7b144237a037ba9d357db8cc-AU\r
Registrant Contact Name: Domain Admin\r
Tech Contact ID: 9ecb3a55266f4718b5385d77ca604e2c-AU\r
Tech Contact Name: News Limited  Domain Manager\r
Name Server: asia1.akam.net\r
Name Server: ns1-24.akam.net\r
DNSSEC: unsigned\r
Registrant: News Life Media Pty Ltd\r
Registrant ID: ABN 57088923906\r
Eligibility Type: Company\r
>>> Last update of WHOIS database: 2025-03-06T13:40:50Z <<<\r
";

    #[test]
    fn test_parse_auda_response() {
        let record = crate::load("news.com.au", SAMPLE).unwrap();

        assert_eq!(record.suffix(), Some("com.au"));
        assert_eq!(record.get("domain_name").as_text(), Some("news.com.au"));
        assert_eq!(
            record.get("registrar").as_text(),
            Some("Corporation Service Company (Aust) Pty Ltd")
        );
        assert_eq!(record.get("whois_server").as_text(), Some("whois.auda.org.au"));
        assert_eq!(record.get("org").as_text(), Some("News Life Media Pty Ltd"));
        assert_eq!(record.get("registrant_name").as_text(), Some("Domain Admin"));
        assert_eq!(record.get("registrant_id").as_text(), Some("ABN 57088923906"));
        assert_eq!(record.get("eligibility_type").as_text(), Some("Company"));
        assert_eq!(record.get("status").len(), 2);
        assert_eq!(record.get("name_servers").len(), 2);
        assert_eq!(
            record.get("updated_date").as_scalar().unwrap().to_string(),
            "2024-07-06 05:05:35"
        );
    }
}
