//! Identifi Rendering
//!
//! HTML/SVG string rendering for normalized identities:
//! - trust-weighted identicon with a deterministic avatar
//! - profile card
//! - one-time stylesheet setup
//! - search widget over an [`identifi_identity::IdentityIndex`]

pub mod card;
pub mod error;
pub mod identicon;
pub mod search;
pub mod styles;
pub mod text;

pub use card::{profile_card, CardRenderer};
pub use error::RenderError;
pub use identicon::{avatar_svg, identicon, IdenticonOptions, IdenticonStyle};
pub use search::SearchWidget;
pub use text::{escape_html, ordinal};
