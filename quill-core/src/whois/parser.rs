use std::sync::Arc;

use tracing::{debug, instrument};

use super::decode::{decode, truncate};
use super::dispatch::normalize_domain;
use super::extract::extract;
use super::record::Record;
use super::registry::{Registry, REGISTRY};
use crate::error::{QuillError, Result};

const DEFAULT_MAX_RESPONSE_SIZE: usize = 1024 * 1024; // 1MB

/// Decoding and size limits applied before extraction.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Decode non-UTF-8 input as Latin-1 instead of failing
    pub latin1_fallback: bool,
    /// Longer responses are truncated to this many bytes
    pub max_response_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            latin1_fallback: true,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }
}

impl ParserConfig {
    pub fn with_latin1_fallback(mut self, enabled: bool) -> Self {
        self.latin1_fallback = enabled;
        self
    }

    pub fn with_max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = bytes;
        self
    }
}

/// Turns raw WHOIS responses into [`Record`]s.
///
/// Holds no per-call state; one parser can be shared across threads.
#[derive(Debug, Clone)]
pub struct WhoisParser {
    registry: Arc<Registry>,
    config: ParserConfig,
}

impl Default for WhoisParser {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoisParser {
    /// A parser backed by the built-in registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::clone(&REGISTRY),
            config: ParserConfig::default(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parses the response `raw` returned for `domain`.
    ///
    /// Only undecodable or empty input is an error. Unknown suffixes use the
    /// generic rules and fields that do not match are absent.
    #[instrument(skip(self, raw), fields(domain = %domain))]
    pub fn parse(&self, domain: &str, raw: impl AsRef<[u8]>) -> Result<Record> {
        let text = decode(raw.as_ref(), self.config.latin1_fallback)?;
        let text = truncate(&text, self.config.max_response_size);
        if text.trim().is_empty() {
            return Err(QuillError::EmptyResponse);
        }

        let resolved = self.registry.resolve(domain);
        let fields = extract(text, resolved.rules);

        let record = Record::new(
            normalize_domain(domain),
            resolved.suffix.map(str::to_string),
            fields,
        );

        debug!(
            registry = resolved.rules.registry(),
            fields = record.len(),
            "Parsed WHOIS response"
        );

        Ok(record)
    }
}

/// Parses `raw` for `domain` with the built-in registry and default config.
pub fn load(domain: &str, raw: impl AsRef<[u8]>) -> Result<Record> {
    WhoisParser::new().parse(domain, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whois::record::{FieldValue, Scalar};
    use crate::whois::ruleset::{FieldDelta, SuffixRules};
    use crate::whois::rules::RuleSpec;

    const COM_SAMPLE: &str = r#"
        Status: ok
        Updated Date: 2017-03-31T07:36:34Z
        Creation Date: 2013-02-21T19:24:57Z
        Registry Expiry Date: 2018-02-21T19:24:57Z

        >>> Last update of whois database: Sun, 31 Aug 2008 00:18:23 UTC <<<
        "#;

    static TEST_TLD: SuffixRules = SuffixRules {
        registry: "Test Registry",
        suffixes: &["test"],
        fields: &[FieldDelta::replace(
            "holder",
            &[RuleSpec::text(r"^holder:[ \t]*(.+)")],
        )],
    };

    fn date(value: &FieldValue) -> String {
        value.as_datetime().unwrap().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_com_expiration() {
        let record = load("urlowl.com", COM_SAMPLE.as_bytes()).unwrap();
        assert_eq!(record.suffix(), None);
        assert_eq!(date(record.get("expiration_date")), "2018-02-21");
        assert_eq!(date(record.get("creation_date")), "2013-02-21");
        assert_eq!(date(record.get("updated_date")), "2017-03-31");
        assert_eq!(record.get("status").as_text(), Some("ok"));
        assert!(record.get("registrar").is_absent());
    }

    #[test]
    fn test_load_accepts_str_and_bytes() {
        let from_str = load("urlowl.com", COM_SAMPLE).unwrap();
        let from_bytes = load("urlowl.com", COM_SAMPLE.as_bytes().to_vec()).unwrap();
        assert_eq!(from_str, from_bytes);
    }

    #[test]
    fn test_load_is_deterministic() {
        let a = load("urlowl.com", COM_SAMPLE).unwrap();
        let b = load("urlowl.com", COM_SAMPLE).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_response_is_error() {
        assert!(matches!(load("example.com", ""), Err(QuillError::EmptyResponse)));
    }

    #[test]
    fn test_strict_decoding() {
        let raw = b"Registrar: Caf\xe9 Domains\n";

        let record = load("example.com", raw).unwrap();
        assert_eq!(record.get("registrar").as_text(), Some("Café Domains"));

        let strict = WhoisParser::new()
            .with_config(ParserConfig::default().with_latin1_fallback(false));
        assert!(matches!(
            strict.parse("example.com", raw),
            Err(QuillError::Undecodable(_))
        ));
    }

    #[test]
    fn test_response_truncated_to_limit() {
        let text = "Registrar: First\nRegistrar: Second\n";
        let parser = WhoisParser::new()
            .with_config(ParserConfig::default().with_max_response_size(17));
        let record = parser.parse("example.com", text).unwrap();
        assert_eq!(record.get("registrar").as_text(), Some("First"));
    }

    #[test]
    fn test_blank_prefix_within_limit_is_empty() {
        let text = format!("{}Registrar: Hidden\n", " ".repeat(32));
        let parser = WhoisParser::new()
            .with_config(ParserConfig::default().with_max_response_size(16));
        assert!(matches!(
            parser.parse("example.com", text),
            Err(QuillError::EmptyResponse)
        ));
    }

    #[test]
    fn test_custom_registry_extension() {
        let registry = Registry::builder()
            .with_catalogue()
            .with_suffix(&TEST_TLD)
            .build()
            .unwrap();
        let parser = WhoisParser::new().with_registry(Arc::new(registry));

        let record = parser
            .parse("example.test", "holder: Jane Doe\nCreation Date: 2020-01-02\n")
            .unwrap();
        assert_eq!(record.suffix(), Some("test"));
        assert_eq!(record.get("holder").as_text(), Some("Jane Doe"));
        assert_eq!(date(record.get("creation_date")), "2020-01-02");

        // Built-in tables are untouched by the addition
        let ca = parser.parse("example.ca", "Domain name: example.ca\n").unwrap();
        assert_eq!(ca.suffix(), Some("ca"));
        assert_eq!(ca.get("domain_name").as_text(), Some("example.ca"));
    }

    #[test]
    fn test_record_domain_normalized() {
        let record = load("URLOWL.com.", COM_SAMPLE).unwrap();
        assert_eq!(record.domain(), "urlowl.com");
        assert!(!record.contains_key("domain_name"));
        assert_eq!(
            record.get("status"),
            &FieldValue::Scalar(Scalar::Text("ok".to_string()))
        );
    }

    #[test]
    fn test_concurrent_loads_share_registry() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WhoisParser>();
        assert_send_sync::<Registry>();

        let parser = WhoisParser::new();
        let expected = parser.parse("urlowl.com", COM_SAMPLE).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| parser.parse("urlowl.com", COM_SAMPLE).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
