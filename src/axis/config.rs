//! Layout parameters for tick and label placement.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls how ticks and labels are spaced along an axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Pixel width of one label character.
    pub char_width: f64,
    /// Half-width, in pixels, of the span a tick mark keeps clear.
    pub tic_clearance: f64,
    /// Whether tick marks are emitted.
    pub draw_tics: bool,
    /// Whether text labels are emitted.
    pub draw_labels: bool,
}

impl LayoutConfig {
    /// Half-width of a label that reserves `chars` characters of room.
    pub fn label_half_width(&self, chars: f64) -> f64 {
        self.char_width * chars * 0.5
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            tic_clearance: 3.0,
            draw_tics: true,
            draw_labels: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = LayoutConfig::default();
        assert!(cfg.char_width > 0.0);
        assert!(cfg.tic_clearance > 0.0);
        assert!(cfg.draw_tics);
        assert!(cfg.draw_labels);
    }

    #[test]
    fn label_half_width_scales_with_char_width() {
        let cfg = LayoutConfig {
            char_width: 10.0,
            ..LayoutConfig::default()
        };
        assert_eq!(cfg.label_half_width(2.5), 12.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let cfg: LayoutConfig = serde_json::from_str(r#"{"draw_tics": false}"#).unwrap();
        assert!(!cfg.draw_tics);
        assert_eq!(cfg.char_width, 7.0);
    }
}
