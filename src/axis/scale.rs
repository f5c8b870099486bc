//! Linear mapping from axis values to pixel offsets.

use super::error::AxisError;

/// Maps the value domain `[min, max]` linearly onto pixels `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    min: f64,
    max: f64,
    width: f64,
}

impl AxisScale {
    pub fn new(min: f64, max: f64, width: f64) -> Result<Self, AxisError> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(AxisError::NonFinite);
        }
        if min >= max {
            return Err(AxisError::EmptyDomain { min, max });
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(AxisError::InvalidWidth(width));
        }
        Ok(Self { min, max, width })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Pixel offset of value `x`; values outside the domain extrapolate.
    pub fn position(&self, x: f64) -> f64 {
        (x - self.min) / (self.max - self.min) * self.width
    }

    /// Returns true if `min <= x <= max`.
    pub fn in_domain(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}
