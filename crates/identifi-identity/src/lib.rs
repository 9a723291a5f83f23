//! Identifi Identity Layer
//!
//! Turns raw identity records into normalized identities:
//! - per-attribute presentation metadata
//! - "most verified" value per attribute type
//! - canonical link target and resolved trust distance
//! - flat profile (name, nickname, email, url, photos)
//! - search collaborator trait with an in-memory index

pub mod error;
pub mod identity;
pub mod index;

pub use error::IdentityError;
pub use identity::{
    Counters, EnrichedAttribute, Identity, IdentitySummary, Profile, VerifiedEntry, KEY_ID,
    PROFILE_KEYS,
};
pub use index::{IdentityIndex, MemoryIndex};
