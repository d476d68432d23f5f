//! Error types for coordinate mapping and context construction.

use thiserror::Error;

/// Errors from the pixel-to-domain mapping path.
///
/// These are recoverable: the UI surfaces them as a rejected edit and keeps
/// the shape open for correction. Nothing on this path panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The rectangle's left and right edges resolve to different compressed
    /// segments, so the selection would straddle elided silence.
    #[error("selection spans multiple pulses")]
    SpansMultiplePulses,

    /// Geometry contained NaN or infinite coordinates.
    #[error("geometry contains non-finite coordinates")]
    NonFiniteGeometry,

    /// The geometry is the sentinel ring, which marks a shape outside the
    /// visible range; there is no domain position to recover.
    #[error("geometry is outside the visible range")]
    OutsideVisibleRange,

    /// An axis or segment has zero extent, so the inverse mapping is
    /// undefined.
    #[error("degenerate extent: {0}")]
    DegenerateExtent(&'static str),
}

/// Errors constructing a [`CompressedLayout`](crate::context::CompressedLayout).
///
/// Index-misaligned or unordered segment arrays are producer bugs; refusing
/// to construct the layout keeps the mapping paths free of these states.
/// Only `PartialEq` here: `NonPositiveWidth` carries the offending `f64`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The three segment arrays must be index-aligned.
    #[error(
        "segment arrays have mismatched lengths: {starts} starts, {ends} ends, {widths} widths"
    )]
    MismatchedLengths {
        starts: usize,
        ends: usize,
        widths: usize,
    },

    /// A compressed layout needs at least one segment.
    #[error("segment arrays are empty")]
    Empty,

    /// Segments must be ascending and non-overlapping.
    #[error("segment {index} is out of order or overlaps its neighbor")]
    Unordered { index: usize },

    /// Segment times or widths contained NaN or infinite values.
    #[error("segment {index} has a non-finite time or width")]
    NonFinite { index: usize },

    /// A segment cannot have negative pixel width.
    #[error("segment {index} has negative width")]
    NegativeWidth { index: usize },

    /// The native compressed width must be positive.
    #[error("compressed width must be positive, got {width}")]
    NonPositiveWidth { width: f64 },
}
