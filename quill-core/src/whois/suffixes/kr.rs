//! KISA (.kr): a Korean section followed by an English one, labels padded
//! with spaces before the colon.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static KR: SuffixRules = SuffixRules {
    registry: "KISA",
    suffixes: &[
        "kr", "co.kr", "ne.kr", "or.kr", "re.kr", "pe.kr", "go.kr", "mil.kr", "ac.kr", "hs.kr",
        "ms.kr", "es.kr", "sc.kr", "kg.kr",
    ],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^Domain Name[ \t]*:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^Registrant[ \t]*:[ \t]*(.+)")]),
        FieldDelta::replace(
            "address",
            &[RuleSpec::text(r"^Registrant Address[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "zipcode",
            &[RuleSpec::text(r"^Registrant Zip Code[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "admin_name",
            &[RuleSpec::text(r"^Administrative Contact\(AC\)[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace("admin_email", &[RuleSpec::text(r"^AC E-Mail[ \t]*:[ \t]*(.+)")]),
        FieldDelta::replace(
            "admin_phone",
            &[RuleSpec::text(r"^AC Phone Number[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "creation_date",
            &[RuleSpec::date(r"^Registered Date[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "updated_date",
            &[RuleSpec::date(r"^Last Updated Date[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "expiration_date",
            &[RuleSpec::date(r"^Expiration Date[ \t]*:[ \t]*(.+)")],
        ),
        FieldDelta::replace(
            "registrar",
            &[RuleSpec::text(r"^Authorized Agency[ \t]*:[ \t]*(.+)")],
        ),
        // Both sections print a DNSSEC line; only the English value is ASCII
        FieldDelta::replace(
            "dnssec",
            &[RuleSpec::text(r"^DNSSEC[ \t]*:[ \t]*([A-Za-z][^\r\n]*)")],
        ),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^[ \t]+Host Name[ \t]*:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
    ],
};

#[cfg(test)]
mod tests {
    const SAMPLE: &str = "\
query : yu.ac.kr\r
\r
\r
# KOREAN(UTF8)\r
\r
도메인이름                  : yu.ac.kr\r
등록인                      : 영남대학교\r
등록일                      : 1999. 07. 15.\r
사용 종료일                 : 2032. 07. 15.\r
DNSSEC                      : 미서명\r
\r
1차 네임서버 정보\r
   호스트이름               : ns.yu.ac.kr\r
   IP 주소                  : 165.229.11.5\r
\r
\r
# ENGLISH\r
\r
Domain Name                 : yu.ac.kr\r
Registrant                  : YEUNGNAM UNIVERSITY\r
Registrant Address          : YEUNGNAM UNIVERSITY, DAEDONG, KYUNGSAN, KYUNGPOOK, \r
Registrant Zip Code         : 712749\r
Administrative Contact(AC)  : KIM BYUNG SOO\r
AC E-Mail                   : bskim@yeungnam.ac.kr\r
AC Phone Number             : 053-810-3663\r
Registered Date             : 1999. 07. 15.\r
Last Updated Date           : 2003. 10. 15.\r
Expiration Date             : 2032. 07. 15.\r
Publishes                   : Y\r
Authorized Agency           : Inames Co., Ltd.(http://www.inames.co.kr)\r
DNSSEC                      : unsigned\r
\r
Primary Name Server\r
   Host Name                : ns.yu.ac.kr\r
   IP Address               : 165.229.11.5\r
\r
Secondary Name Server\r
   Host Name                : ns3.yu.ac.kr\r
   IP Address               : 165.229.11.8\r
\r
\r
- KISA/KRNIC WHOIS Service -\r
";

    #[test]
    fn test_parse_kisa_english_section() {
        let record = crate::load("yu.ac.kr", SAMPLE).unwrap();

        assert_eq!(record.suffix(), Some("ac.kr"));
        assert_eq!(record.get("domain_name").as_text(), Some("yu.ac.kr"));
        assert_eq!(record.get("registrant_name").as_text(), Some("YEUNGNAM UNIVERSITY"));
        assert_eq!(record.get("admin_name").as_text(), Some("KIM BYUNG SOO"));
        assert_eq!(record.get("emails").as_text(), Some("bskim@yeungnam.ac.kr"));
        assert_eq!(record.get("dnssec").as_text(), Some("unsigned"));
        assert_eq!(
            record.get("registrar").as_text(),
            Some("Inames Co., Ltd.(http://www.inames.co.kr)")
        );
        assert_eq!(record.get("name_servers").len(), 2);
    }

    #[test]
    fn test_korean_spaced_dates() {
        let record = crate::load("yu.ac.kr", SAMPLE).unwrap();

        assert_eq!(
            record.get("creation_date").as_scalar().unwrap().to_string(),
            "1999-07-15 00:00:00"
        );
        assert_eq!(
            record.get("updated_date").as_scalar().unwrap().to_string(),
            "2003-10-15 00:00:00"
        );
        assert_eq!(
            record.get("expiration_date").as_scalar().unwrap().to_string(),
            "2032-07-15 00:00:00"
        );
    }
}
