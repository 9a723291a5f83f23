//! Attribute catalogue: which types uniquely identify an identity, and the
//! presentation metadata (icon, button, link) attached to each type.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Attribute types that identify an identity on their own.
pub const UNIQUE_TYPES: &[&str] = &[
    "email",
    "bitcoin",
    "bitcoin_address",
    "ip",
    "ipv6",
    "gpg_fingerprint",
    "gpg_keyid",
    "google_oauth2",
    "tel",
    "phone",
    "keyID",
    "url",
    "account",
    "uuid",
];

/// Decides whether an attribute type can serve as a canonical identifier.
pub trait UniqueTypeClassifier: Send + Sync {
    fn is_unique_type(&self, name: &str) -> bool;
}

/// Set-backed classifier, defaulting to [`UNIQUE_TYPES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueTypes {
    types: HashSet<String>,
}

impl UniqueTypes {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for UniqueTypes {
    fn default() -> Self {
        Self::new(UNIQUE_TYPES.iter().copied())
    }
}

impl UniqueTypeClassifier for UniqueTypes {
    fn is_unique_type(&self, name: &str) -> bool {
        self.types.contains(name)
    }
}

/// Presentation metadata for one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btn_style: Option<String>,
    /// Clickable target, if the attribute can be followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub quick_contact: bool,
    /// Short display name extracted from a social profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
}

impl AttributeUi {
    fn icon(icon_style: &str) -> Self {
        Self {
            icon_style: Some(icon_style.to_string()),
            ..Default::default()
        }
    }

    fn button(mut self, btn_style: &str) -> Self {
        self.btn_style = Some(btn_style.to_string());
        self
    }

    fn link(mut self, link: String) -> Self {
        self.link = Some(link);
        self
    }

    fn quick_contact(mut self) -> Self {
        self.quick_contact = true;
        self
    }

    /// Look up the metadata for an attribute type and value.
    ///
    /// Returns `None` for types with no catalogue entry.
    pub fn describe(name: &str, val: &str) -> Option<Self> {
        let ui = match name {
            "email" => Self::icon("glyphicon glyphicon-envelope")
                .button("btn-success")
                .link(format!("mailto:{}", val))
                .quick_contact(),
            "bitcoin" | "bitcoin_address" => Self::icon("fa fa-bitcoin")
                .button("btn-primary")
                .link(format!("https://blockchain.info/address/{}", val))
                .quick_contact(),
            "gpg_fingerprint" | "gpg_keyid" => Self::icon("fa fa-key")
                .button("btn-default")
                .link(format!("https://pgp.mit.edu/pks/lookup?op=get&search=0x{}", val)),
            "account" => Self::icon("fa fa-at"),
            "nickname" | "name" => Self::icon("glyphicon glyphicon-font"),
            "tel" | "phone" => Self::icon("glyphicon glyphicon-earphone")
                .button("btn-success")
                .link(format!("tel:{}", val))
                .quick_contact(),
            "keyID" => Self::icon("fa fa-key"),
            "url" => Self::describe_url(val),
            _ => return None,
        };
        Some(ui)
    }

    fn describe_url(val: &str) -> Self {
        match UrlHost::detect(val) {
            Some(host) => {
                let mut ui = Self::icon(host.icon_style())
                    .button(host.btn_style())
                    .link(val.to_string())
                    .quick_contact();
                ui.link_name = val.split(host.pattern()).nth(1).map(str::to_string);
                ui
            }
            None => Self::icon("glyphicon glyphicon-link")
                .button("btn-default")
                .link(val.to_string()),
        }
    }
}

/// Social hosts recognised inside `url` attributes, in match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlHost {
    Facebook,
    Twitter,
    GooglePlus,
    LinkedIn,
    GitHub,
}

impl UrlHost {
    pub const PRIORITY: [UrlHost; 5] = [
        UrlHost::Facebook,
        UrlHost::Twitter,
        UrlHost::GooglePlus,
        UrlHost::LinkedIn,
        UrlHost::GitHub,
    ];

    /// First host, in priority order, whose pattern occurs in `val`.
    pub fn detect(val: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|host| val.contains(host.pattern()))
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Self::Facebook => "facebook.com/",
            Self::Twitter => "twitter.com/",
            Self::GooglePlus => "plus.google.com/",
            Self::LinkedIn => "linkedin.com/",
            Self::GitHub => "github.com/",
        }
    }

    pub fn icon_style(self) -> &'static str {
        match self {
            Self::Facebook => "fa fa-facebook",
            Self::Twitter => "fa fa-twitter",
            Self::GooglePlus => "fa fa-google-plus",
            Self::LinkedIn => "fa fa-linkedin",
            Self::GitHub => "fa fa-github",
        }
    }

    pub fn btn_style(self) -> &'static str {
        match self {
            Self::Facebook => "btn-facebook",
            Self::Twitter => "btn-twitter",
            Self::GooglePlus => "btn-google-plus",
            Self::LinkedIn => "btn-linkedin",
            Self::GitHub => "btn-github",
        }
    }
}
