//! Collision-free placement of tick marks and labels along an axis.
//!
//! Ticks are processed in the order given. Two occupancy sets record the
//! pixel spans already claimed: one for tick marks and one for labels. A
//! tick whose position falls inside an earlier mark's clearance is dropped
//! together with its label; a label that would overlap an earlier label is
//! dropped while its mark is kept. Callers list the ticks they care about
//! most first.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use super::scale::AxisScale;
use crate::seq::IntervalSeq;

/// A requested tick at axis value `x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tic {
    pub x: f64,
    pub text: Option<String>,
    /// Emit only the label, without a mark.
    #[cfg_attr(feature = "serde", serde(default))]
    pub no_mark: bool,
    /// Room to reserve for the label, in characters, when checking for
    /// collisions. Defaults to the label length plus half a character.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_space: Option<f64>,
}

impl Tic {
    /// Unlabeled tick mark.
    pub fn new(x: f64) -> Self {
        Self {
            x,
            text: None,
            no_mark: false,
            label_space: None,
        }
    }

    pub fn labeled(x: f64, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(x)
        }
    }

    pub fn without_mark(mut self) -> Self {
        self.no_mark = true;
        self
    }

    pub fn with_label_space(mut self, chars: f64) -> Self {
        self.label_space = Some(chars);
        self
    }
}

/// A label that survived collision checks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedLabel {
    pub text: String,
    /// Pixel offset of the label's center.
    pub position: f64,
}

/// Result of [`layout_tics`]: pixel offsets of the marks to draw and the
/// labels to draw, both in input order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisLayout {
    pub marks: Vec<f64>,
    pub labels: Vec<PlacedLabel>,
}

/// Lays out `tics` along `scale`, skipping any mark or label that would
/// collide with one placed earlier.
///
/// # Example
///
/// ```rust
/// use intervalseq::axis::{layout_tics, AxisScale, LayoutConfig, Tic};
///
/// let scale = AxisScale::new(0.0, 100.0, 200.0).unwrap();
/// let tics = vec![Tic::labeled(0.0, "0"), Tic::labeled(1.0, "1"), Tic::labeled(50.0, "50")];
/// let layout = layout_tics(&tics, &scale, &LayoutConfig::default());
///
/// // The tick at 1.0 lands 2px from the one at 0.0 and is dropped.
/// assert_eq!(layout.marks, vec![0.0, 100.0]);
/// assert_eq!(layout.labels.len(), 2);
/// ```
pub fn layout_tics(tics: &[Tic], scale: &AxisScale, config: &LayoutConfig) -> AxisLayout {
    let mut tic_spans = IntervalSeq::new();
    let mut label_spans = IntervalSeq::new();
    let mut layout = AxisLayout::default();
    let clearance = config.tic_clearance.max(0.0);

    for tic in tics {
        if !scale.in_domain(tic.x) {
            log::trace!("tic at {} lies outside the axis domain", tic.x);
            continue;
        }
        let p = scale.position(tic.x);
        if !p.is_finite() {
            log::trace!("tic at {} has no finite position", tic.x);
            continue;
        }

        if !tic.no_mark {
            if tic_spans.contains(p) {
                log::trace!("tic at {} hidden by a neighbouring tic", tic.x);
                continue;
            }
            if config.draw_tics {
                layout.marks.push(p);
            }
            tic_spans.add(p - clearance, p + clearance);
        }

        if !config.draw_labels {
            continue;
        }
        let Some(text) = tic.text.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };

        // Length in UTF-16 code units, as browsers measure label text.
        let text_chars = text.encode_utf16().count() as f64 + 0.5;
        let reserved = tic
            .label_space
            .filter(|&chars| chars > 0.0)
            .unwrap_or(text_chars);
        let half = config.label_half_width(reserved).max(0.0);
        if label_spans.overlaps(p - half, p + half) {
            log::trace!("label {text:?} at {} overlaps an earlier label", tic.x);
            continue;
        }

        layout.labels.push(PlacedLabel {
            text: text.to_string(),
            position: p,
        });
        let half = config.label_half_width(text_chars).max(0.0);
        label_spans.add(p - half, p + half);
    }

    log::debug!(
        "axis layout placed {} marks and {} labels from {} tics",
        layout.marks.len(),
        layout.labels.len(),
        tics.len()
    );
    layout
}
