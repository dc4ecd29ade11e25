//! Runtime configuration reads
//!
//! Dot field tuning can come from three places; the later one wins:
//! compiled-in defaults, a JSON blob in localStorage, data attributes on
//! the grid container. A motion kill switch sits alongside for quick
//! debugging and embedding control.

use pagefx_motion::MotionConfig;
use web_sys::{window, Element};

/// localStorage key holding a JSON `MotionConfig`
const STORAGE_CONFIG_KEY: &str = "pagefx-motion";
/// localStorage key for the kill switch
const STORAGE_DISABLE_KEY: &str = "pagefx-motion-disabled";

/// Check if all motion is disabled by the user
/// Can be set via:
/// - URL param: ?fx=0 or ?fx=false
/// - localStorage: pagefx-motion-disabled = "true"
pub fn motion_disabled() -> bool {
    let window = match window() {
        Some(w) => w,
        None => return false,
    };

    // Check URL parameters (simple string matching)
    if let Ok(search) = window.location().search() {
        if query_disables_motion(&search) {
            return true;
        }
    }

    // Check localStorage preference
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(val)) = storage.get_item(STORAGE_DISABLE_KEY) {
            if val == "true" || val == "1" {
                return true;
            }
        }
    }

    false
}

fn query_disables_motion(search: &str) -> bool {
    search.contains("fx=0") || search.contains("fx=false")
}

/// Honor `prefers-reduced-motion`; read once at startup.
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Effective dot field tuning for `container`.
pub fn resolve_motion(container: &Element) -> MotionConfig {
    stored_config()
        .unwrap_or_default()
        .with_cell_size(attr_px(container, "data-cell-size"))
        .with_highlight_radius(attr_px(container, "data-bright-radius"))
}

/// Stored override, if present and well-formed.
fn stored_config() -> Option<MotionConfig> {
    let storage = window()?.local_storage().ok().flatten()?;
    let raw = storage.get_item(STORAGE_CONFIG_KEY).ok().flatten()?;
    match serde_json::from_str::<MotionConfig>(&raw) {
        Ok(cfg) => Some(cfg.sanitized()),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("[pagefx] ignoring malformed {STORAGE_CONFIG_KEY}: {e}").into(),
            );
            None
        }
    }
}

fn attr_px(el: &Element, name: &str) -> Option<f64> {
    el.get_attribute(name).and_then(|v| parse_px(&v))
}

fn parse_px(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches("px").trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_switch_accepts_zero_and_false() {
        assert!(query_disables_motion("?fx=0"));
        assert!(query_disables_motion("?fx=false"));
        assert!(query_disables_motion("?theme=dark&fx=0"));
        assert!(!query_disables_motion("?fx=1"));
        assert!(!query_disables_motion(""));
    }

    #[test]
    fn parses_plain_and_suffixed_pixel_values() {
        assert_eq!(parse_px("35"), Some(35.0));
        assert_eq!(parse_px(" 42.5px "), Some(42.5));
        assert_eq!(parse_px("big"), None);
        assert_eq!(parse_px(""), None);
    }
}
