mod date;
mod decode;
mod dispatch;
mod extract;
mod parser;
mod record;
mod registry;
mod rules;
mod ruleset;
mod suffixes;

pub use date::normalize as normalize_date;
pub use dispatch::{normalize_domain, suffix_candidates, Resolved};
pub use extract::extract;
pub use parser::{load, ParserConfig, WhoisParser};
pub use record::{FieldValue, Record, Scalar, DATETIME_FORMAT};
pub use registry::{Registry, RegistryBuilder, REGISTRY};
pub use rules::{Cardinality, Rule, RuleSpec, Transform};
pub use ruleset::{FieldDelta, FieldRules, FieldSpec, Merge, RuleSet, SuffixRules};
pub use suffixes::{CATALOGUE, GENERIC};
