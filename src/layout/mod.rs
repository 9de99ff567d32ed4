//! Grid geometry: sparse size overrides, axis layout queries, and
//! per-axis viewport state.
//!
//! Column and row logic is symmetric; everything here is parameterized by
//! [`Axis`] and operates on one dimension at a time.

mod axis;
mod viewport;

pub use axis::{AxisLayout, SizeOverrides};
pub use viewport::AxisViewport;

/// One of the two grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The column (horizontal) dimension.
    Col,
    /// The row (vertical) dimension.
    Row,
}
