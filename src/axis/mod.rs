//! Tick and label layout for a one-dimensional chart axis.
//!
//! [`layout_tics`] turns a list of requested ticks into the subset that can
//! be drawn without marks or labels running into each other, using
//! [`IntervalSeq`](crate::seq::IntervalSeq) occupancy sets over pixel
//! positions.

mod config;
mod error;
mod layout;
mod scale;

pub use config::LayoutConfig;
pub use error::AxisError;
pub use layout::{layout_tics, AxisLayout, PlacedLabel, Tic};
pub use scale::AxisScale;
