//! Integration test: raw JSON records through normalization, the query
//! accessors and the serialize round trip.

use identifi_core::{IdentityRecord, SourceRecord, UniqueTypes, UNKNOWN_TRUST_DISTANCE};
use identifi_identity::Identity;
use identifi_integration_tests::{alice, anonymous, legacy_bob};

fn normalize(value: serde_json::Value) -> Identity {
    let record: IdentityRecord = serde_json::from_value(value).unwrap();
    Identity::new(record)
}

// =========================================================================
// Most-verified selection and profile
// =========================================================================

#[test]
fn test_alice_profile() {
    let id = normalize(alice());
    let profile = id.profile();
    assert_eq!(profile.name.as_deref(), Some("Alice Liddell"));
    assert_eq!(profile.nickname.as_deref(), Some("alice"));
    // The old address scores higher but fails the 3:2 threshold.
    assert_eq!(profile.email.as_deref(), Some("alice@example.org"));
    // Twitter (score 4) beats GitHub (score 2).
    assert_eq!(profile.url.as_deref(), Some("https://twitter.com/alice"));
    assert!(profile.cover_photo.is_none());
}

#[test]
fn test_alice_verified_accessor() {
    let id = normalize(alice());
    assert_eq!(id.verified("keyID"), Some("pQ7xKa"));
    assert_eq!(id.verified("bitcoin"), Some("1AliceXyz"));
    assert_eq!(id.verification_score("keyID"), Some(7.0));
    assert_eq!(id.verified("nonexistentType"), None);
}

#[test]
fn test_alice_link_target_and_distance() {
    let id = normalize(alice());
    // The nickname at "1" sets the distance, so the key at 2 is not closer;
    // the verified key still overrides the email picked first.
    assert_eq!(id.trust_distance(), 1);
    assert_eq!(id.canonical_id().as_deref(), Some("keyID:pQ7xKa"));
}

#[test]
fn test_alice_counters() {
    let id = normalize(alice());
    let c = id.counters();
    assert_eq!(c.received_positive, 12);
    assert_eq!(c.received_negative, 2);
    assert_eq!(c.received_neutral, 1);
    assert_eq!(c.sent_positive, 4);
    assert_eq!(c.sent_negative, 0);
    assert_eq!(c.sent_neutral, 0);
}

#[test]
fn test_alice_enrichment() {
    let id = normalize(alice());
    let twitter = &id.attributes()[4];
    let ui = twitter.ui.as_ref().unwrap();
    assert_eq!(ui.icon_style.as_deref(), Some("fa fa-twitter"));
    assert_eq!(ui.link_name.as_deref(), Some("alice"));
    assert!(ui.quick_contact);

    let github = &id.attributes()[5];
    assert_eq!(github.ui.as_ref().unwrap().btn_style.as_deref(), Some("btn-github"));

    let bitcoin = &id.attributes()[7];
    assert_eq!(bitcoin.link(), Some("https://blockchain.info/address/1AliceXyz"));
}

// =========================================================================
// Legacy format and degenerate records
// =========================================================================

#[test]
fn test_legacy_record_migrates() {
    let record: IdentityRecord = serde_json::from_value(legacy_bob()).unwrap();
    assert!(SourceRecord::classify(record.clone()).is_legacy());

    let id = Identity::new(record);
    assert_eq!(id.counters().received_positive, 3);
    assert_eq!(id.counters().received_negative, 5);
    assert_eq!(id.counters().received_neutral, 0);
    assert_eq!(id.trust_distance(), 3);
    assert_eq!(id.canonical_id().as_deref(), Some("email:bob@example.org"));
}

#[test]
fn test_anonymous_record() {
    let id = normalize(anonymous());
    assert!(id.link_target().is_none());
    assert_eq!(id.trust_distance(), UNKNOWN_TRUST_DISTANCE);
    assert_eq!(id.profile().cover_photo.as_deref(), Some("/ipfs/QmGhost"));
}

#[test]
fn test_empty_record() {
    let id = normalize(serde_json::json!({"attrs": []}));
    assert!(id.attributes().is_empty());
    assert!(id.most_verified().is_empty());
    assert_eq!(id.trust_distance(), UNKNOWN_TRUST_DISTANCE);
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn test_roundtrip_reproduces_derived_state() {
    for fixture in [alice(), legacy_bob(), anonymous()] {
        let original = normalize(fixture);
        let restored = Identity::deserialize(&original.serialize().unwrap()).unwrap();
        assert_eq!(restored.profile(), original.profile());
        assert_eq!(restored.most_verified(), original.most_verified());
        assert_eq!(restored.link_target(), original.link_target());
        assert_eq!(restored.trust_distance(), original.trust_distance());
        assert_eq!(restored.counters(), original.counters());
    }
}

#[test]
fn test_serialized_form_is_the_raw_record() {
    let original = normalize(alice());
    let value: serde_json::Value = serde_json::from_str(&original.serialize().unwrap()).unwrap();
    assert_eq!(value["receivedNegative"], serde_json::json!("2"));
    assert!(value.get("trustDistance").is_none());
    assert!(value["attrs"][0].get("ui").is_none());
}

#[test]
fn test_classifier_changes_link_target() {
    let text = serde_json::to_string(&alice()).unwrap();
    let id = Identity::deserialize_with(&text, &UniqueTypes::new(["bitcoin"])).unwrap();
    // keyID is not unique here, but a verified keyID still takes over.
    assert_eq!(id.canonical_id().as_deref(), Some("keyID:pQ7xKa"));

    let id = Identity::deserialize_with(&text, &UniqueTypes::new(["url"])).unwrap();
    assert_eq!(id.canonical_id().as_deref(), Some("keyID:pQ7xKa"));
}
