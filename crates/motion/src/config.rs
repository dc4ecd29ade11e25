//! Tuning knobs for the dot field
//!
//! Compiled-in defaults match the page stylesheet; the UI crate layers
//! stored JSON and container data attributes on top.

use serde::{Deserialize, Serialize};

/// Grid pitch of the dot field, CSS pixels
pub const DEFAULT_CELL_SIZE_PX: f64 = 35.0;
/// Pointer influence radius, CSS pixels
pub const DEFAULT_HIGHLIGHT_RADIUS_PX: f64 = 120.0;

/// Dot field tuning
///
/// Serde-derived so overrides can be stored as JSON; missing fields fall
/// back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Distance between dot centers (grid pitch)
    pub cell_size_px: f64,
    /// Radius around the pointer inside which dots light up
    pub highlight_radius_px: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            highlight_radius_px: DEFAULT_HIGHLIGHT_RADIUS_PX,
        }
    }
}

impl MotionConfig {
    /// Replace non-finite or non-positive fields with the defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            cell_size_px: if valid(self.cell_size_px) {
                self.cell_size_px
            } else {
                defaults.cell_size_px
            },
            highlight_radius_px: if valid(self.highlight_radius_px) {
                self.highlight_radius_px
            } else {
                defaults.highlight_radius_px
            },
        }
    }

    /// Override the cell size; invalid or absent values leave it unchanged
    pub fn with_cell_size(mut self, px: Option<f64>) -> Self {
        if let Some(px) = px.filter(|&px| valid(px)) {
            self.cell_size_px = px;
        }
        self
    }

    /// Override the highlight radius; invalid or absent values leave it unchanged
    pub fn with_highlight_radius(mut self, px: Option<f64>) -> Self {
        if let Some(px) = px.filter(|&px| valid(px)) {
            self.highlight_radius_px = px;
        }
        self
    }
}

fn valid(px: f64) -> bool {
    px.is_finite() && px > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stylesheet() {
        let cfg = MotionConfig::default();
        assert_eq!(cfg.cell_size_px, 35.0);
        assert_eq!(cfg.highlight_radius_px, 120.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: MotionConfig = serde_json::from_str(r#"{"cell_size_px": 20.0}"#).unwrap();
        assert_eq!(cfg.cell_size_px, 20.0);
        assert_eq!(cfg.highlight_radius_px, DEFAULT_HIGHLIGHT_RADIUS_PX);
    }

    #[test]
    fn sanitized_rejects_nonsense() {
        let cfg = MotionConfig {
            cell_size_px: -3.0,
            highlight_radius_px: f64::NAN,
        }
        .sanitized();
        assert_eq!(cfg, MotionConfig::default());
    }

    #[test]
    fn overrides_only_apply_when_valid() {
        let cfg = MotionConfig::default()
            .with_cell_size(Some(50.0))
            .with_highlight_radius(Some(-1.0));
        assert_eq!(cfg.cell_size_px, 50.0);
        assert_eq!(cfg.highlight_radius_px, DEFAULT_HIGHLIGHT_RADIUS_PX);

        let cfg = cfg.with_cell_size(None);
        assert_eq!(cfg.cell_size_px, 50.0);
    }
}
