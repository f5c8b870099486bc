use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AxisError {
    #[error("Axis domain is empty: min {min} must be less than max {max}")]
    EmptyDomain { min: f64, max: f64 },

    #[error("Axis width must be positive, got {0}")]
    InvalidWidth(f64),

    #[error("Axis bounds and their span must be finite")]
    NonFinite,
}
