//! Fixtures shared by the Identifi integration tests.

use serde_json::{json, Value};

/// A realistic record: social links, a key, a contested email and
/// distances in several encodings.
pub fn alice() -> Value {
    json!({
        "attrs": [
            {"name": "email", "val": "alice@example.org", "conf": 6, "ref": 1, "dist": 4},
            {"name": "email", "val": "alice@old.example", "conf": 9, "ref": 7},
            {"name": "name", "val": "Alice Liddell", "conf": 5, "ref": 0},
            {"name": "nickname", "val": "alice", "conf": 3, "ref": 0, "dist": "1"},
            {"name": "url", "val": "https://twitter.com/alice", "conf": 4, "ref": 0},
            {"name": "url", "val": "https://github.com/alice", "conf": 2, "ref": 0},
            {"name": "keyID", "val": "pQ7xKa", "conf": 8, "ref": 1, "dist": 2},
            {"name": "bitcoin", "val": "1AliceXyz", "conf": 1, "ref": 0}
        ],
        "receivedPositive": 12,
        "receivedNegative": "2",
        "receivedNeutral": 1.9,
        "sentPositive": 4
    })
}

/// The same kind of record in the old index format, with aggregates on
/// the first attribute.
pub fn legacy_bob() -> Value {
    json!({
        "attrs": [
            {"name": "email", "val": "bob@example.org", "conf": 2, "ref": 0,
             "pos": 3, "neg": 5, "neut": 0, "dist": 3},
            {"name": "nickname", "val": "bobby", "conf": 2, "ref": 0}
        ]
    })
}

/// A record with nothing that can identify it uniquely.
pub fn anonymous() -> Value {
    json!({
        "attrs": [
            {"name": "nickname", "val": "ghost", "conf": 1, "ref": 0},
            {"name": "coverPhoto", "val": "/ipfs/QmGhost", "conf": 1, "ref": 0}
        ]
    })
}
