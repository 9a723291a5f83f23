use identifi_core::config::RenderConfig;
use identifi_identity::Identity;

use crate::error::RenderError;
use crate::identicon::{self, IdenticonOptions};
use crate::text::escape_html;

const IDENTICON_STYLE: &str = "order:1;flex-shrink:0;margin-right:15px";
const DETAILS_STYLE: &str = "padding:5px;order:2;flex-grow:1";

/// Renders profile cards with a fixed layout: identicon, title link,
/// received endorsements and every attribute that carries a link.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    profile_base_url: String,
    identicon: IdenticonOptions,
}

impl CardRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            profile_base_url: config.profile_base_url.trim_end_matches('/').to_string(),
            identicon: IdenticonOptions {
                size: config.card_identicon_size,
                border: config.default_border,
                show_distance: true,
            },
        }
    }

    /// Profile page URL of the identity's link target.
    pub fn profile_link(&self, identity: &Identity) -> Option<String> {
        identity.link_target().map(|target| {
            format!("{}/{}/{}", self.profile_base_url, target.name(), target.val())
        })
    }

    /// Card heading: the profile name, then the nickname, then the link
    /// target as `type:value`, then "anonymous". Empty values are skipped.
    pub fn title(identity: &Identity) -> String {
        let profile = identity.profile();
        let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.is_empty());
        non_empty(&profile.name)
            .or_else(|| non_empty(&profile.nickname))
            .or_else(|| identity.canonical_id())
            .unwrap_or_else(|| "anonymous".to_string())
    }

    pub fn render(&self, identity: &Identity) -> Result<String, RenderError> {
        let avatar = identicon::render(identity, &self.identicon, IDENTICON_STYLE)?;

        let title = escape_html(&Self::title(identity));
        let heading = match self.profile_link(identity) {
            Some(link) => format!("<a href=\"{}\">{}</a>", escape_html(&link), title),
            None => format!("<span>{}</span>", title),
        };

        let counters = identity.counters();
        let received = format!(
            "<small>Received: <span class=\"identifi-pos\">+{}</span> / <span class=\"identifi-neg\">-{}</span></small>",
            counters.received_positive, counters.received_negative
        );

        let mut links = String::new();
        for attr in identity.attributes() {
            if let Some(link) = attr.link() {
                links.push_str(&format!(
                    "{}: <a href=\"{}\">{}</a> ",
                    escape_html(attr.name()),
                    escape_html(link),
                    escape_html(attr.val())
                ));
            }
        }

        Ok(format!(
            "<div class=\"identifi-card\">{avatar}<div style=\"{details}\">{heading}<br>{received}<br><small>{links}</small></div></div>",
            avatar = avatar,
            details = DETAILS_STYLE,
            heading = heading,
            received = received,
            links = links,
        ))
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

/// Profile card with the default configuration.
pub fn profile_card(identity: &Identity) -> Result<String, RenderError> {
    CardRenderer::default().render(identity)
}
