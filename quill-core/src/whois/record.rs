//! The structured result of parsing one WHOIS response.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Canonical string form of date-time values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single normalized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    DateTime(DateTime<Utc>),
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::DateTime(_) => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Scalar::Text(_) => None,
            Scalar::DateTime(dt) => Some(*dt),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::DateTime(_) => serializer.collect_str(self),
        }
    }
}

/// Value of one field after collapsing its matches.
///
/// Zero distinct matches give `Absent`, one gives `Scalar`, more give a
/// `List` of the distinct values in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Absent,
    Scalar(Scalar),
    List(Vec<Scalar>),
}

static ABSENT: FieldValue = FieldValue::Absent;

impl FieldValue {
    /// Collapses a match set: duplicates are removed keeping first occurrence.
    pub fn collapse(matches: Vec<Scalar>) -> Self {
        let mut distinct: Vec<Scalar> = Vec::with_capacity(matches.len());
        for value in matches {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }

        match distinct.len() {
            0 => FieldValue::Absent,
            1 => FieldValue::Scalar(distinct.remove(0)),
            _ => FieldValue::List(distinct),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_text)
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.as_scalar().and_then(Scalar::as_datetime)
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// All values regardless of shape: none, one, or many.
    pub fn values(&self) -> &[Scalar] {
        match self {
            FieldValue::Absent => &[],
            FieldValue::Scalar(value) => std::slice::from_ref(value),
            FieldValue::List(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_absent()
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Absent => serializer.serialize_none(),
            FieldValue::Scalar(value) => value.serialize(serializer),
            FieldValue::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

/// Read-only mapping from canonical field name to value.
///
/// Every field of the rule-set that produced the record is held, in
/// rule-set order; fields that matched nothing are `Absent` and are left
/// out of [`keys`](Record::keys) and [`iter`](Record::iter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    domain: String,
    suffix: Option<String>,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub(crate) fn new(
        domain: String,
        suffix: Option<String>,
        fields: Vec<(String, FieldValue)>,
    ) -> Self {
        Self {
            domain,
            suffix,
            fields,
        }
    }

    /// The domain name the response was parsed for.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Suffix key of the rule table used, `None` when the generic table applied.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Looks up a field; unknown and unmatched fields are `Absent`.
    pub fn get(&self, key: &str) -> &FieldValue {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
            .unwrap_or(&ABSENT)
    }

    /// Looks up a field, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a FieldValue) -> &'a FieldValue {
        match self.get(key) {
            FieldValue::Absent => default,
            value => value,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        !self.get(key).is_absent()
    }

    /// Names of the fields that carry a value.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Present fields with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_absent())
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
