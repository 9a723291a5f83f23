use serde::Serialize;
use std::collections::BTreeMap;

use identifi_core::coerce::{coerce_counter, distance_hops, initial_trust_distance, parse_distance};
use identifi_core::{
    AttributeRecord, AttributeUi, IdentityRecord, SourceRecord, UniqueTypeClassifier, UniqueTypes,
};

use crate::error::IdentityError;

/// Attribute type preferred as link target whenever a verified one exists.
pub const KEY_ID: &str = "keyID";

/// Attribute types copied into the [`Profile`].
pub const PROFILE_KEYS: [&str; 6] = [
    "name",
    "nickname",
    "email",
    "url",
    "coverPhoto",
    "profilePhoto",
];

/// An attribute paired with its presentation metadata.
///
/// `ui` is `None` for types the catalogue does not know.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedAttribute {
    #[serde(flatten)]
    pub record: AttributeRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<AttributeUi>,
}

impl EnrichedAttribute {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn val(&self) -> &str {
        &self.record.val
    }

    pub fn link(&self) -> Option<&str> {
        self.ui.as_ref().and_then(|ui| ui.link.as_deref())
    }
}

/// Endorsement counters after parse-or-zero coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    pub received_positive: i64,
    pub received_negative: i64,
    pub received_neutral: i64,
    pub sent_positive: i64,
    pub sent_negative: i64,
    pub sent_neutral: i64,
}

impl Counters {
    fn from_record(record: &IdentityRecord) -> Self {
        Self {
            received_positive: coerce_counter(record.received_positive.as_ref()),
            received_negative: coerce_counter(record.received_negative.as_ref()),
            received_neutral: coerce_counter(record.received_neutral.as_ref()),
            sent_positive: coerce_counter(record.sent_positive.as_ref()),
            sent_negative: coerce_counter(record.sent_negative.as_ref()),
            sent_neutral: coerce_counter(record.sent_neutral.as_ref()),
        }
    }
}

/// Entry of the most-verified index: position in the attribute list and
/// its `conf - ref` score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedEntry {
    pub index: usize,
    pub verification_score: f64,
}

/// Flat profile filled from the most-verified values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

impl Profile {
    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "name" => Some(&mut self.name),
            "nickname" => Some(&mut self.nickname),
            "email" => Some(&mut self.email),
            "url" => Some(&mut self.url),
            "coverPhoto" => Some(&mut self.cover_photo),
            "profilePhoto" => Some(&mut self.profile_photo),
            _ => None,
        }
    }

    /// Value for one of [`PROFILE_KEYS`].
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "nickname" => &self.nickname,
            "email" => &self.email,
            "url" => &self.url,
            "coverPhoto" => &self.cover_photo,
            "profilePhoto" => &self.profile_photo,
            _ => return None,
        };
        value.as_deref()
    }
}

/// A normalized identity.
///
/// All derived state is computed once in the constructor from the raw
/// record; nothing changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    raw: IdentityRecord,
    attributes: Vec<EnrichedAttribute>,
    counters: Counters,
    trust_distance: u32,
    most_verified: BTreeMap<String, VerifiedEntry>,
    link_target: Option<usize>,
    profile: Profile,
}

impl Identity {
    /// Normalize a record using the default unique-type list.
    pub fn new(record: IdentityRecord) -> Self {
        Self::with_classifier(record, &UniqueTypes::default())
    }

    /// Normalize a record in a single pass over its attributes.
    pub fn with_classifier(record: IdentityRecord, classifier: &dyn UniqueTypeClassifier) -> Self {
        let raw = record.clone();
        let record = SourceRecord::classify(record).migrate();

        let counters = Counters::from_record(&record);
        let mut threshold = initial_trust_distance(record.trust_distance.as_ref());
        let mut link_target: Option<usize> = None;
        let mut most_verified: BTreeMap<String, VerifiedEntry> = BTreeMap::new();
        let mut attributes = Vec::with_capacity(record.attrs.len());

        for (index, attr) in record.attrs.into_iter().enumerate() {
            let unique = classifier.is_unique_type(&attr.name);
            if link_target.is_none() && unique {
                link_target = Some(index);
            }
            if let Some(distance) = attr.dist.as_ref().and_then(parse_distance) {
                if distance.value < threshold {
                    threshold = f64::from(distance.hops);
                    if unique {
                        tracing::trace!(
                            index,
                            name = %attr.name,
                            hops = distance.hops,
                            "closer link target"
                        );
                        link_target = Some(index);
                    }
                }
            }

            let ui = AttributeUi::describe(&attr.name, &attr.val);

            let (conf, refs) = (attr.conf_score(), attr.ref_score());
            if conf * 2.0 > refs * 3.0 {
                let score = conf - refs;
                let replace = most_verified
                    .get(&attr.name)
                    .map_or(true, |existing| score > existing.verification_score);
                if replace {
                    most_verified.insert(
                        attr.name.clone(),
                        VerifiedEntry {
                            index,
                            verification_score: score,
                        },
                    );
                }
            }

            attributes.push(EnrichedAttribute { record: attr, ui });
        }

        let trust_distance = distance_hops(threshold);

        if let Some(key) = most_verified.get(KEY_ID) {
            let already_key = link_target.is_some_and(|i| attributes[i].record.name == KEY_ID);
            if !already_key {
                link_target = Some(key.index);
            }
        }
        if link_target.is_none() {
            tracing::warn!("identity has no unique-type attribute to link to");
        }

        let mut profile = Profile::default();
        for (name, entry) in &most_verified {
            if let Some(slot) = profile.slot(name) {
                *slot = Some(attributes[entry.index].record.val.clone());
            }
        }

        tracing::debug!(
            attributes = attributes.len(),
            verified_types = most_verified.len(),
            trust_distance,
            "normalized identity"
        );

        Self {
            raw,
            attributes,
            counters,
            trust_distance,
            most_verified,
            link_target,
            profile,
        }
    }

    /// Parse a serialized record and normalize it.
    pub fn deserialize(text: &str) -> Result<Self, IdentityError> {
        Self::deserialize_with(text, &UniqueTypes::default())
    }

    pub fn deserialize_with(
        text: &str,
        classifier: &dyn UniqueTypeClassifier,
    ) -> Result<Self, IdentityError> {
        let record: IdentityRecord = serde_json::from_str(text)?;
        Ok(Self::with_classifier(record, classifier))
    }

    /// JSON of the raw record this identity was built from.
    pub fn serialize(&self) -> Result<String, IdentityError> {
        Ok(serde_json::to_string(&self.raw)?)
    }

    /// Most verified value of an attribute type.
    pub fn verified(&self, attribute_type: &str) -> Option<&str> {
        self.most_verified_attribute(attribute_type)
            .map(EnrichedAttribute::val)
    }

    pub fn most_verified_attribute(&self, attribute_type: &str) -> Option<&EnrichedAttribute> {
        self.most_verified
            .get(attribute_type)
            .map(|entry| &self.attributes[entry.index])
    }

    pub fn verification_score(&self, attribute_type: &str) -> Option<f64> {
        self.most_verified
            .get(attribute_type)
            .map(|entry| entry.verification_score)
    }

    pub fn most_verified(&self) -> &BTreeMap<String, VerifiedEntry> {
        &self.most_verified
    }

    /// Attribute chosen to canonically identify this identity, if any
    /// unique-type attribute exists.
    pub fn link_target(&self) -> Option<&EnrichedAttribute> {
        self.link_target.map(|i| &self.attributes[i])
    }

    /// `type:value` of the link target.
    pub fn canonical_id(&self) -> Option<String> {
        self.link_target()
            .map(|a| format!("{}:{}", a.record.name, a.record.val))
    }

    pub fn attributes(&self) -> &[EnrichedAttribute] {
        &self.attributes
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn trust_distance(&self) -> u32 {
        self.trust_distance
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn raw(&self) -> &IdentityRecord {
        &self.raw
    }

    /// Derived state in a serializable shape.
    pub fn summary(&self) -> IdentitySummary<'_> {
        IdentitySummary {
            link_target: self.link_target(),
            trust_distance: self.trust_distance,
            counters: &self.counters,
            profile: &self.profile,
            most_verified: self
                .most_verified
                .iter()
                .map(|(name, entry)| (name.as_str(), self.attributes[entry.index].val()))
                .collect(),
            attributes: &self.attributes,
        }
    }
}

/// Serializable view over an identity's derived state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySummary<'a> {
    pub link_target: Option<&'a EnrichedAttribute>,
    pub trust_distance: u32,
    pub counters: &'a Counters,
    pub profile: &'a Profile,
    pub most_verified: BTreeMap<&'a str, &'a str>,
    pub attributes: &'a [EnrichedAttribute],
}
