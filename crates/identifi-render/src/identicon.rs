//! Trust identicon: a hash-derived avatar wrapped in a pie-chart aura whose
//! fill, rotation, glow and opacity follow the received endorsements.

use base64::Engine;

use identifi_identity::Identity;

use crate::error::RenderError;
use crate::text::ordinal;

const POSITIVE_COLOR: &str = "#3C763D";
const NEGATIVE_COLOR: &str = "#A94442";
const NEUTRAL_BACKGROUND: &str = "rgba(0,0,0,0.2)";
const POSITIVE_GLOW: &str = "#82FF84";
const NEGATIVE_GLOW: &str = "#BF0400";
const NO_GLOW: &str = "0px 0px 0px 0px #82FF84";

/// Distances at or beyond this are shown as a dash.
const MAX_SHOWN_DISTANCE: u32 = 1000;

const AVATAR_BACKGROUND: [u8; 3] = [240, 240, 240];
const AVATAR_MARGIN: f64 = 0.08;
const AVATAR_SATURATION: f64 = 0.7;
const AVATAR_LIGHTNESS: f64 = 0.5;

/// Rendering options for [`identicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdenticonOptions {
    /// Width and height in pixels.
    pub size: u32,
    /// Aura width in pixels.
    pub border: u32,
    /// Overlay the trust distance ordinal.
    pub show_distance: bool,
}

impl IdenticonOptions {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

impl Default for IdenticonOptions {
    fn default() -> Self {
        Self {
            size: 60,
            border: 4,
            show_distance: true,
        }
    }
}

/// Visual parameters of the aura, derived from endorsement counts alone.
#[derive(Debug, Clone, PartialEq)]
pub struct IdenticonStyle {
    pub background_color: String,
    pub background_image: String,
    /// CSS transform; empty when there are no endorsements.
    pub transform: String,
    pub box_shadow: String,
    pub opacity: f64,
}

impl IdenticonStyle {
    pub fn for_counts(positive: i64, negative: i64, border: u32) -> Self {
        let pos = positive as f64;
        let neg = negative as f64;
        let border = f64::from(border);
        let total = pos + neg;

        let box_shadow = if pos > neg * 20.0 {
            format!("0px 0px {}px 0px {}", border * pos / 50.0, POSITIVE_GLOW)
        } else if pos < neg * 3.0 {
            format!("0px 0px {}px 0px {}", border * neg / 10.0, NEGATIVE_GLOW)
        } else {
            NO_GLOW.to_string()
        };

        let (background_color, background_image, transform) = if total > 0.0 {
            // The dominant polarity is drawn as the gradient slice.
            let (share, slice, base, offset) = if pos > neg {
                (pos / total, POSITIVE_COLOR, NEGATIVE_COLOR, 0.0)
            } else {
                (neg / total, NEGATIVE_COLOR, POSITIVE_COLOR, 180.0)
            };
            let angle = share * 360.0;
            (
                base.to_string(),
                format!(
                    "linear-gradient({}deg, transparent 50%, {} 50%), linear-gradient(0deg, {} 50%, transparent 50%)",
                    angle, slice, slice
                ),
                format!("rotate({}deg)", (-angle - 180.0) / 2.0 + offset),
            )
        } else {
            (
                NEUTRAL_BACKGROUND.to_string(),
                "none".to_string(),
                String::new(),
            )
        };

        Self {
            background_color,
            background_image,
            transform,
            box_shadow,
            opacity: total / 10.0 * 0.5 + 0.35,
        }
    }

    /// Inline CSS for the pie element.
    pub fn css(&self, size: u32) -> String {
        let mut css = format!(
            "background-color:{};background-image:{};width:{}px;box-shadow:{};opacity:{};",
            self.background_color, self.background_image, size, self.box_shadow, self.opacity
        );
        if !self.transform.is_empty() {
            css.push_str(&format!("transform:{};", self.transform));
        }
        css
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r, g, b].map(|v| ((v + m) * 255.0).round() as u8)
}

fn rgba([r, g, b]: [u8; 3]) -> String {
    format!("rgba({},{},{},1)", r, g, b)
}

/// Deterministic 5x5 mirrored avatar keyed by `seed`.
///
/// The first 15 hex digits of the seed's BLAKE3 digest switch cells on or
/// off (columns 2, 1|3, 0|4); the last 7 pick the hue.
pub fn avatar_svg(seed: &str, size: u32) -> String {
    let digest = blake3::hash(seed.as_bytes()).to_hex();
    let digest = digest.as_str();

    let tail = &digest[digest.len() - 7..];
    let hue = f64::from(u32::from_str_radix(tail, 16).unwrap_or(0)) / f64::from(0x0fff_ffffu32);
    let foreground = rgba(hsl_to_rgb(hue, AVATAR_SATURATION, AVATAR_LIGHTNESS));

    let base_margin = (f64::from(size) * AVATAR_MARGIN).floor() as u32;
    let cell = size.saturating_sub(base_margin * 2) / 5;
    let margin = (size - cell * 5) / 2;

    let mut rects = String::new();
    for (i, digit) in digest.chars().take(15).enumerate() {
        if digit.to_digit(16).unwrap_or(0) % 2 == 1 {
            continue;
        }
        let i = i as u32;
        let columns: &[u32] = match i {
            0..=4 => &[2],
            5..=9 => &[1, 3],
            _ => &[0, 4],
        };
        let row = i % 5;
        for column in columns {
            rects.push_str(&format!(
                "<rect x='{}' y='{}' width='{}' height='{}'/>",
                column * cell + margin,
                row * cell + margin,
                cell,
                cell
            ));
        }
    }

    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' style='background-color:{bg};'>\
         <g style='fill:{fg}; stroke:{fg}; stroke-width:{stroke};'>{rects}</g></svg>",
        size = size,
        bg = rgba(AVATAR_BACKGROUND),
        fg = foreground,
        stroke = f64::from(size) * 0.005,
        rects = rects,
    )
}

/// Avatar as a `data:` URI for an `<img src>`.
pub fn avatar_data_uri(seed: &str, size: u32) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(avatar_svg(seed, size))
    )
}

/// Avatar seed of an identity: its serialized link target, or `null`.
pub fn avatar_seed(identity: &Identity) -> Result<String, RenderError> {
    Ok(serde_json::to_string(&identity.link_target())?)
}

/// Identicon markup for an identity.
pub fn identicon(identity: &Identity, options: &IdenticonOptions) -> Result<String, RenderError> {
    render(identity, options, "")
}

pub(crate) fn render(
    identity: &Identity,
    options: &IdenticonOptions,
    extra_style: &str,
) -> Result<String, RenderError> {
    let size = options.size;
    let counters = identity.counters();
    let style = IdenticonStyle::for_counts(
        counters.received_positive,
        counters.received_negative,
        options.border,
    );

    let distance = if options.show_distance {
        let label = if identity.trust_distance() < MAX_SHOWN_DISTANCE {
            ordinal(i64::from(identity.trust_distance()))
        } else {
            "\u{2013}".to_string()
        };
        let font_size = if size > 50 {
            format!("{}px", f64::from(size) / 4.0)
        } else {
            "10px".to_string()
        };
        format!(
            "<span class=\"identifi-distance\" style=\"font-size:{}\">{}</span>",
            font_size, label
        )
    } else {
        String::new()
    };

    let src = avatar_data_uri(&avatar_seed(identity)?, size);

    Ok(format!(
        "<div class=\"identifi-identicon\" style=\"width:{size}px;height:{size}px;{extra}\">\
         {distance}<div class=\"identifi-pie\" style=\"{pie}\"></div>\
         <img src=\"{src}\" alt=\"\" width=\"{size}\" style=\"border-width:{border}px\"></div>",
        size = size,
        extra = extra_style,
        distance = distance,
        pie = style.css(size),
        src = src,
        border = options.border,
    ))
}
