//! Stylesheet shared by the identicon and profile card markup.
//!
//! The page needs it once. [`setup`] hands it out on the first call in the
//! process and returns `None` on every later call.

use std::sync::atomic::{AtomicBool, Ordering};

/// `id` of the emitted `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "identifiStyle";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

pub const STYLESHEET: &str = r#"
.identifi-identicon * {
  box-sizing: border-box;
}

.identifi-identicon {
  vertical-align: middle;
  margin: auto;
  border-radius: 50%;
  text-align: center;
  display: inline-block;
  position: relative;
  max-width: 100%;
}

.identifi-distance {
  z-index: 2;
  position: absolute;
  left: 0%;
  top: 2px;
  width: 100%;
  text-align: right;
  color: #fff;
  text-shadow: 0 0 1px #000;
  font-size: 75%;
  line-height: 75%;
  font-weight: bold;
}

.identifi-pie {
  border-radius: 50%;
  position: absolute;
  top: 0;
  left: 0;
  box-shadow: 0px 0px 0px 0px #82FF84;
  padding-bottom: 100%;
  max-width: 100%;
  transition: all 0.2s ease-in-out;
}

.identifi-card {
  padding: 10px;
  background-color: #f7f7f7;
  color: #777;
  border: 1px solid #ddd;
  display: flex;
  flex-direction: row;
  overflow: hidden;
}

.identifi-card a {
  transition: color 150ms;
  text-decoration: none;
  color: #337ab7;
}

.identifi-card a:hover, .identifi-card a:active {
  text-decoration: underline;
  color: #23527c;
}

.identifi-pos {
  color: #3c763d;
}

.identifi-neg {
  color: #a94442;
}

.identifi-identicon img {
  position: absolute;
  top: 0;
  left: 0;
  max-width: 100%;
  border-radius: 50%;
  border-color: transparent;
  border-style: solid;
}
"#;

/// The complete `<style>` element.
pub fn style_element() -> String {
    format!("<style id=\"{}\">{}</style>", STYLE_ELEMENT_ID, STYLESHEET)
}

/// One-time stylesheet initialization.
///
/// Returns the `<style>` element on the first call and `None` afterwards.
pub fn setup() -> Option<String> {
    if INITIALIZED.swap(true, Ordering::AcqRel) {
        return None;
    }
    tracing::debug!(id = STYLE_ELEMENT_ID, "stylesheet initialized");
    Some(style_element())
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_is_idempotent() {
        // Other tests in this process may already have run setup.
        let _ = setup();
        assert!(is_initialized());
        assert!(setup().is_none());
        assert!(setup().is_none());
    }

    #[test]
    fn test_style_element_shape() {
        let element = style_element();
        assert!(element.starts_with("<style id=\"identifiStyle\">"));
        assert!(element.ends_with("</style>"));
        assert!(element.contains(".identifi-card"));
        assert!(element.contains(".identifi-pie"));
    }
}
