use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::coerce::to_number;

/// One claimed attribute of an identity (an email, a handle, a key).
///
/// Numeric fields that older writers emitted loosely (`conf`, `ref`, `dist`
/// and the legacy `pos`/`neg`/`neut` aggregates) are kept as raw JSON and
/// coerced by the normalizer. A field set to `null` is present, unlike a
/// missing one. Unknown fields survive a serialize round trip in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Attribute type tag (e.g. "email", "bitcoin", "url", "keyID").
    pub name: String,
    /// Attribute value. Numbers and booleans are stringified.
    #[serde(default, deserialize_with = "loose_string")]
    pub val: String,
    /// Confidence / supporting evidence.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub conf: Option<Value>,
    /// Reference / contradicting evidence.
    #[serde(
        default,
        rename = "ref",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub refs: Option<Value>,
    /// Trust-graph hop distance of the endorser chain.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub dist: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub pos: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub neg: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub neut: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A field that appears in the input, `null` included.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl AttributeRecord {
    /// Create an attribute with evidence scores and no distance.
    pub fn new(name: impl Into<String>, val: impl Into<String>, conf: f64, refs: f64) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
            conf: Some(Value::from(conf)),
            refs: Some(Value::from(refs)),
            dist: None,
            pos: None,
            neg: None,
            neut: None,
            extra: Map::new(),
        }
    }

    /// Attach a trust distance.
    pub fn with_dist(mut self, dist: impl Into<Value>) -> Self {
        self.dist = Some(dist.into());
        self
    }

    /// Supporting evidence as a number; NaN when missing or non-numeric.
    pub fn conf_score(&self) -> f64 {
        self.conf.as_ref().map_or(f64::NAN, to_number)
    }

    /// Contradicting evidence as a number; NaN when missing or non-numeric.
    pub fn ref_score(&self) -> f64 {
        self.refs.as_ref().map_or(f64::NAN, to_number)
    }
}

/// The raw identity record as exchanged with an index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    #[serde(default)]
    pub attrs: Vec<AttributeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_positive: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_negative: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_neutral: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_positive: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_negative: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_neutral: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_distance: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityRecord {
    /// Create a record from attributes alone.
    pub fn from_attrs(attrs: Vec<AttributeRecord>) -> Self {
        Self {
            attrs,
            ..Default::default()
        }
    }
}

/// Received-endorsement aggregates carried on the first attribute by the
/// old index format.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCounts {
    pub pos: Value,
    pub neg: Value,
    pub neut: Value,
}

/// An input record tagged by serialization format.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    /// Old index format: aggregates live on `attrs[0]`.
    Legacy {
        record: IdentityRecord,
        counts: LegacyCounts,
    },
    /// Current format: aggregates live on the record itself.
    Current(IdentityRecord),
}

impl SourceRecord {
    /// Tag a record. It is legacy when its first attribute carries all of
    /// `pos`, `neg` and `neut`.
    pub fn classify(record: IdentityRecord) -> Self {
        let counts = record.attrs.first().and_then(|first| {
            Some(LegacyCounts {
                pos: first.pos.clone()?,
                neg: first.neg.clone()?,
                neut: first.neut.clone()?,
            })
        });
        match counts {
            Some(counts) => Self::Legacy { record, counts },
            None => Self::Current(record),
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy { .. })
    }

    /// Bring a record into the current format. Legacy aggregates replace
    /// the received counters; everything else is untouched.
    pub fn migrate(self) -> IdentityRecord {
        match self {
            Self::Legacy { mut record, counts } => {
                tracing::debug!("migrating legacy aggregate counts");
                record.received_positive = Some(counts.pos);
                record.received_negative = Some(counts.neg);
                record.received_neutral = Some(counts.neut);
                record
            }
            Self::Current(record) => record,
        }
    }
}
