//! Identifi Core: record types, the attribute catalogue and the loose
//! numeric rules shared by the Identifi identity widgets.

pub mod attribute;
pub mod coerce;
pub mod config;
pub mod error;
pub mod record;

pub use attribute::{AttributeUi, UniqueTypeClassifier, UniqueTypes, UrlHost, UNIQUE_TYPES};
pub use coerce::{
    coerce_counter, distance_hops, initial_trust_distance, parse_distance, to_number, Distance,
};
pub use config::IdentifiConfig;
pub use error::CoreError;
pub use record::{AttributeRecord, IdentityRecord, LegacyCounts, SourceRecord};

/// Trust distance assumed when neither the record nor any attribute
/// provides one.
pub const UNKNOWN_TRUST_DISTANCE: u32 = 99;
