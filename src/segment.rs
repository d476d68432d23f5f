//! Compressed-segment resolution.
//!
//! Segment counts are small (tens, not thousands), so resolution is a linear
//! scan rather than an index structure.
//!
//! Gap rule: a time that falls in the elided silence between two segments
//! belongs to the *upcoming* segment, i.e. it resolves to that segment's
//! index and clamps to its start. The same rule is applied on the forward
//! (time to pixel) and inverse (pixel to time) paths and to both start- and
//! end-time lookups.

use crate::context::CompressedLayout;

/// Result of resolving a domain time or pixel x against a compressed layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Index of the containing (or nearest upcoming) segment.
    pub index: usize,
    /// Prefix sum of segment pixel widths before `index`, already scaled to
    /// the display width.
    pub pixel_offset_before: f64,
    /// The query fell before the first segment and was clamped to it.
    pub clamped_to_first: bool,
    /// The query fell after the last segment and was clamped to it.
    pub clamped_to_last: bool,
}

impl SegmentHit {
    fn inside(index: usize, pixel_offset_before: f64) -> Self {
        Self {
            index,
            pixel_offset_before,
            clamped_to_first: false,
            clamped_to_last: false,
        }
    }
}

/// Find the segment a domain time belongs to.
///
/// `scale_factor` is `display_width / compressed_width`; pass 1.0 when
/// rendering at the native compressed width.
pub fn resolve_time(layout: &CompressedLayout, time: f64, scale_factor: f64) -> SegmentHit {
    if time < layout.start_time(0) {
        return SegmentHit {
            clamped_to_first: true,
            ..SegmentHit::inside(0, 0.0)
        };
    }
    let mut offset = 0.0;
    for index in 0..layout.segment_count() {
        // Covers both the inside-segment hit and a gap hit: once the scan
        // has passed end_times[index - 1], any time at or below
        // end_times[index] locks to segment `index`.
        if time <= layout.end_time(index) {
            return SegmentHit::inside(index, offset);
        }
        offset += layout.width(index) * scale_factor;
    }
    let last = layout.segment_count() - 1;
    SegmentHit {
        clamped_to_last: true,
        ..SegmentHit::inside(last, offset - layout.width(last) * scale_factor)
    }
}

/// Find the segment a pixel x value belongs to.
///
/// Compressed pixel space is contiguous (segments butt against each other),
/// so every x inside the rendered span is inside some segment; an x exactly
/// on a shared boundary resolves to the earlier segment. Values outside the
/// span clamp to the first or last segment.
pub fn resolve_pixel(layout: &CompressedLayout, x: f64, scale_factor: f64) -> SegmentHit {
    if x < 0.0 {
        return SegmentHit {
            clamped_to_first: true,
            ..SegmentHit::inside(0, 0.0)
        };
    }
    let mut offset = 0.0;
    for index in 0..layout.segment_count() {
        let span = layout.width(index) * scale_factor;
        if x <= offset + span {
            return SegmentHit::inside(index, offset);
        }
        offset += span;
    }
    let last = layout.segment_count() - 1;
    SegmentHit {
        clamped_to_last: true,
        ..SegmentHit::inside(last, offset - layout.width(last) * scale_factor)
    }
}
