//! Overlay projection: auxiliary visuals placed in the same pixel space as
//! annotations.
//!
//! These are secondary consumers of the coordinate mapper and segment
//! resolver; they produce plain placement data (line segments, text
//! anchors) and never mutate annotation state.

mod contour;
mod labels;
mod mask;
mod ticks;

pub use contour::{Contour, project_contour};
pub use labels::{SPECIES_LABEL_SPACING, sequence_labels, species_labels};
pub use mask::gap_masks;
pub use ticks::{
    pulse_duration_labels, pulse_freq_markers, pulse_time_markers, sequence_time_markers,
};

use crate::geometry::PixelPoint;

/// A straight overlay line in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

impl LineSegment {
    pub fn new(from: PixelPoint, to: PixelPoint) -> Self {
        Self { from, to }
    }
}

/// A text label anchored at a pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnchor {
    pub text: String,
    pub at: PixelPoint,
}

impl TextAnchor {
    pub fn new(text: impl Into<String>, at: PixelPoint) -> Self {
        Self {
            text: text.into(),
            at,
        }
    }
}

/// Marker lines plus their labels, produced together by the tick
/// projectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSet {
    pub lines: Vec<LineSegment>,
    pub texts: Vec<TextAnchor>,
}
