//! Integration test: normalized identities rendered as identicons, cards
//! and search results.

use std::sync::Arc;

use identifi_core::{IdentifiConfig, IdentityRecord};
use identifi_identity::{Identity, MemoryIndex};
use identifi_integration_tests::{alice, anonymous, legacy_bob};
use identifi_render::{identicon, profile_card, styles, CardRenderer, IdenticonOptions, SearchWidget};

fn normalize(value: serde_json::Value) -> Identity {
    let record: IdentityRecord = serde_json::from_value(value).unwrap();
    Identity::new(record)
}

#[test]
fn test_card_for_alice() {
    let html = profile_card(&normalize(alice())).unwrap();
    assert!(html.contains(
        "<a href=\"https://identi.fi/#/identities/keyID/pQ7xKa\">Alice Liddell</a>"
    ));
    assert!(html.contains("+12</span>"));
    assert!(html.contains("-2</span>"));
    assert!(html.contains(">1st</span>"));
    assert!(html.contains("url: <a href=\"https://github.com/alice\">"));
    assert!(html.contains("email: <a href=\"mailto:alice@old.example\">"));
}

#[test]
fn test_card_for_anonymous() {
    let html = profile_card(&normalize(anonymous())).unwrap();
    assert!(html.contains("<span>ghost</span>"));
    assert!(html.contains(">99th</span>"));
}

#[test]
fn test_identicon_for_legacy_bob() {
    let html = identicon(&normalize(legacy_bob()), &IdenticonOptions::default()).unwrap();
    assert!(html.contains("box-shadow:0px 0px 2px 0px #BF0400"));
    assert!(html.contains("transform:rotate(-22.5deg)"));
    assert!(html.contains("background-color:#3C763D"));
    assert!(html.contains(">3rd</span>"));
}

#[test]
fn test_stylesheet_is_emitted_once() {
    let first = styles::setup();
    let second = styles::setup();
    assert!(second.is_none());
    if let Some(style) = first {
        assert!(style.contains("identifi-card"));
    }
}

#[tokio::test]
async fn test_search_widget_orders_by_trust_distance() {
    let index = MemoryIndex::new();
    for fixture in [anonymous(), legacy_bob(), alice()] {
        index.insert_record(serde_json::from_value(fixture).unwrap());
    }
    assert_eq!(index.len(), 3);

    let config = IdentifiConfig::default();
    let widget = SearchWidget::new(Arc::new(index), CardRenderer::new(&config.render));
    assert!(widget.on_keyup("").await.unwrap());

    let html = widget.mount();
    let alice = html.find("Alice Liddell").unwrap();
    let bob = html.find("bob@example.org").unwrap();
    let ghost = html.find("<span>ghost</span>").unwrap();
    assert!(alice < bob && bob < ghost);
}

#[tokio::test]
async fn test_search_widget_filters() {
    let index = MemoryIndex::new();
    for fixture in [anonymous(), legacy_bob(), alice()] {
        index.insert_record(serde_json::from_value(fixture).unwrap());
    }
    let widget = SearchWidget::new(Arc::new(index), CardRenderer::default());
    widget.on_keyup("BOBBY").await.unwrap();

    let html = widget.results_html();
    assert_eq!(html.matches("class=\"identifi-card\"").count(), 1);
    assert!(html.contains("bob@example.org"));
}
