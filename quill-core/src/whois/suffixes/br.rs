//! Registro.br (.br): compact `YYYYMMDD` dates, optionally followed by a
//! ticket number, repeated in every contact object.

use crate::whois::rules::{RuleSpec, Transform};
use crate::whois::ruleset::{FieldDelta, SuffixRules};

pub static BR: SuffixRules = SuffixRules {
    registry: "Registro.br",
    suffixes: &["br", "com.br", "net.br", "org.br", "gov.br", "edu.br"],
    fields: &[
        FieldDelta::replace(
            "domain_name",
            &[RuleSpec::text(r"^domain:[ \t]*(.+)").transform(Transform::Lowercase)],
        ),
        FieldDelta::replace("registrant_name", &[RuleSpec::text(r"^owner:[ \t]*(.+)")]),
        FieldDelta::replace("owner_id", &[RuleSpec::text(r"^owner-c:[ \t]*(.+)")]),
        FieldDelta::replace("tech_id", &[RuleSpec::text(r"^tech-c:[ \t]*(.+)")]),
        FieldDelta::replace(
            "name_servers",
            &[RuleSpec::text(r"^nserver:[ \t]*(.+)").transform(Transform::Hostname)],
        ),
        FieldDelta::replace(
            "creation_date",
            &[RuleSpec::date(r"^created:[ \t]*(\d{8})").first_only()],
        ),
        FieldDelta::replace(
            "updated_date",
            &[RuleSpec::date(r"^changed:[ \t]*(\d{8})").first_only()],
        ),
        FieldDelta::replace("expiration_date", &[RuleSpec::date(r"^expires:[ \t]*(\d{8})")]),
        FieldDelta::replace("status", &[RuleSpec::text(r"^status:[ \t]*(.+)")]),
        FieldDelta::replace("contact_name", &[RuleSpec::text(r"^person:[ \t]*(.+)")]),
    ],
};

#[cfg(test)]
mod tests {
    const SAMPLE: &str = "\
% Copyright (c) Nic.br - Use of this data is governed by the Use and\r
% Privacy Policy at https://registro.br/upp . Distribution,\r
% 2025-03-08T06:35:54-03:00 - 82.57.203.60\r
\r
domain:      www.gov.br\r
owner:       Ministerio do Planejamento, Orcamento e Gestao\r
owner-c:     CGSTM2\r
tech-c:      GSISE\r
nserver:     bsa1.serpro.gov.br\r
nsstat:      20250308 AA\r
nslastaa:    20250308\r
nserver:     bsa2.serpro.gov.br\r
nsstat:      20250308 AA\r
nserver:     spo1.serpro.gov.br\r
nserver:     spo2.serpro.gov.br\r
saci:        yes\r
created:     20170829 #17394568\r
changed:     20211030\r
expires:     20250927\r
status:      published\r
\r
nic-hdl-br:  CGSTM2\r
person:      COORDENAÇÃO GERAL DE SERVIÇOS DE TI - MP\r
created:     20140122\r
changed:     20240207\r
\r
nic-hdl-br:  GSISE\r
person:      Gestão do Serviço Internet  SERPRO\r
created:     20190814\r
changed:     20200511\r
\r
% Security and mail abuse issues should also be addressed to cert.br,\r
% respectivelly to cert@cert.br and mail-abuse@cert.br\r
";

    #[test]
    fn test_parse_registro_br_response() {
        let record = crate::load("www.gov.br", SAMPLE).unwrap();

        assert_eq!(record.suffix(), Some("gov.br"));
        assert_eq!(record.get("domain_name").as_text(), Some("www.gov.br"));
        assert_eq!(
            record.get("registrant_name").as_text(),
            Some("Ministerio do Planejamento, Orcamento e Gestao")
        );
        assert_eq!(record.get("status").as_text(), Some("published"));
        assert_eq!(record.get("name_servers").len(), 4);
        assert_eq!(record.get("contact_name").len(), 2);
    }

    #[test]
    fn test_contact_dates_ignored() {
        let record = crate::load("www.gov.br", SAMPLE).unwrap();

        assert_eq!(
            record.get("creation_date").as_scalar().unwrap().to_string(),
            "2017-08-29 00:00:00"
        );
        assert_eq!(
            record.get("updated_date").as_scalar().unwrap().to_string(),
            "2021-10-30 00:00:00"
        );
        assert_eq!(
            record.get("expiration_date").as_scalar().unwrap().to_string(),
            "2025-09-27 00:00:00"
        );
    }
}
