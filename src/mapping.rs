//! Bidirectional mapping between domain units (milliseconds, Hertz) and
//! spectrogram pixel space.
//!
//! All functions here are pure and total: the forward path degrades to NaN
//! coordinates or the sentinel ring (the designed "outside current view"
//! signal), and the inverse path returns a [`MappingError`] instead of
//! panicking.

use crate::context::{CompressedLayout, SpectroContext};
use crate::error::MappingError;
use crate::geometry::{PixelPoint, PixelRing, RenderScale};
use crate::model::{PulseAnnotation, SequenceAnnotation};
use crate::segment::{resolve_pixel, resolve_time};

/// Default pixel offset of a sequence band's top edge above the image.
pub const SEQUENCE_TOP_OFFSET: f64 = -50.0;
/// Default pixel offset of a sequence band's bottom edge above the image.
pub const SEQUENCE_BOTTOM_OFFSET: f64 = -10.0;
/// Additional upward shift applied to sequence bands on compressed views,
/// clearing the gap-mask strip drawn along the top.
pub const SEQUENCE_COMPRESSED_SHIFT: f64 = -20.0;

/// Vertical placement of a sequence annotation band, in pixels relative to
/// the top of the spectrogram image (negative values sit above it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceBand {
    pub top_offset: f64,
    pub bottom_offset: f64,
    /// Extra shift applied to both edges (used by compressed views).
    pub extra_offset: f64,
}

impl SequenceBand {
    pub fn new(top_offset: f64, bottom_offset: f64, extra_offset: f64) -> Self {
        Self {
            top_offset,
            bottom_offset,
            extra_offset,
        }
    }

    /// The band placement used for the given context.
    pub fn for_context(context: &SpectroContext) -> Self {
        let extra = if context.is_compressed() {
            SEQUENCE_COMPRESSED_SHIFT
        } else {
            0.0
        };
        Self::new(SEQUENCE_TOP_OFFSET, SEQUENCE_BOTTOM_OFFSET, extra)
    }

    fn top_y(&self) -> f64 {
        self.top_offset + self.extra_offset
    }

    fn bottom_y(&self) -> f64 {
        self.bottom_offset + self.extra_offset
    }
}

/// Domain-unit result of the inverse mapping, rounded to whole milliseconds
/// and Hertz (the storage granularity of annotation records).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    pub start_time: f64,
    pub end_time: f64,
    pub low_freq: f64,
    pub high_freq: f64,
}

/// Time-only inverse result, for sequence annotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start_time: f64,
    pub end_time: f64,
}

/// `display_width / compressed_width` for a compressed rendering.
fn compressed_scale_factor(
    context: &SpectroContext,
    layout: &CompressedLayout,
    scale: RenderScale,
) -> f64 {
    context.adjusted_width(scale) / layout.compressed_width()
}

/// Forward-map a domain time through the compressed layout.
///
/// The time is clamped into its resolved segment: values past the segment's
/// end pin to the boundary instead of extrapolating into the gap, and gap
/// times lock to the upcoming segment's start. Returns `None` when the
/// segment has no duration to interpolate over.
fn compressed_time_to_x(layout: &CompressedLayout, time: f64, scale_factor: f64) -> Option<f64> {
    let hit = resolve_time(layout, time, scale_factor);
    let start = layout.start_time(hit.index);
    let duration = layout.duration(hit.index);
    if duration <= 0.0 {
        return None;
    }
    let clamped = time.clamp(start, layout.end_time(hit.index));
    let pixels_per_ms = layout.width(hit.index) / duration;
    Some(hit.pixel_offset_before + (clamped - start) * pixels_per_ms * scale_factor)
}

/// Which edge of a time range a pixel x value came from. Segments butt
/// against each other in pixel space, so a shared boundary pixel is
/// ambiguous; the edge decides which side wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeEdge {
    Start,
    End,
}

/// Inverse-map a pixel x through the compressed layout, returning the
/// resolved segment index alongside the time.
///
/// A start edge exactly on a shared boundary belongs to the upcoming
/// segment, mirroring the forward path, which places a pulse flush at a
/// segment's start on that same boundary pixel. An end edge on the boundary
/// stays with the earlier segment.
fn compressed_x_to_time(
    layout: &CompressedLayout,
    x: f64,
    scale_factor: f64,
    edge: RangeEdge,
) -> Result<(usize, f64), MappingError> {
    let hit = resolve_pixel(layout, x, scale_factor);
    let mut index = hit.index;
    let mut offset = hit.pixel_offset_before;
    let mut span = layout.width(index) * scale_factor;
    if edge == RangeEdge::Start && index + 1 < layout.segment_count() && x == offset + span {
        index += 1;
        offset += span;
        span = layout.width(index) * scale_factor;
    }
    let duration = layout.duration(index);
    if duration <= 0.0 || span <= 0.0 {
        return Err(MappingError::DegenerateExtent("zero-width segment"));
    }
    let clamped = (x - offset).clamp(0.0, span);
    let time = layout.start_time(index) + clamped / span * duration;
    Ok((index, time))
}

/// Map a pulse annotation to its pixel ring.
///
/// Returns the sentinel ring when a compressed context cannot place the
/// annotation; callers skip rings that fail
/// [`is_visible`](PixelRing::is_visible).
pub fn pulse_to_pixels(
    annotation: &PulseAnnotation,
    context: &SpectroContext,
    scale: RenderScale,
) -> PixelRing {
    let y_top = context.freq_to_y(annotation.high_freq, scale);
    let y_bottom = context.freq_to_y(annotation.low_freq, scale);
    let (x_start, x_end) = match &context.compressed {
        Some(layout) => {
            let factor = compressed_scale_factor(context, layout, scale);
            let start = compressed_time_to_x(layout, annotation.start_time, factor);
            let end = compressed_time_to_x(layout, annotation.end_time, factor);
            match (start, end) {
                (Some(start), Some(end)) => (start, end),
                _ => return PixelRing::SENTINEL,
            }
        }
        None => {
            let width_scale = context.width_scale(scale);
            (
                (annotation.start_time - context.start_time) * width_scale,
                (annotation.end_time - context.start_time) * width_scale,
            )
        }
    };
    PixelRing::from_corners(
        PixelPoint::new(x_start, y_top),
        PixelPoint::new(x_end, y_bottom),
    )
}

/// Map a sequence annotation to its band ring above the spectrogram.
///
/// Sequences label groups of pulses and may legitimately span segments on a
/// compressed view, so each edge clamps into its own segment but spanning is
/// never rejected.
pub fn sequence_to_pixels(
    annotation: &SequenceAnnotation,
    context: &SpectroContext,
    band: SequenceBand,
    scale: RenderScale,
) -> PixelRing {
    let (x_start, x_end) = match &context.compressed {
        Some(layout) => {
            let factor = compressed_scale_factor(context, layout, scale);
            let start = compressed_time_to_x(layout, annotation.start_time, factor);
            let end = compressed_time_to_x(layout, annotation.end_time, factor);
            match (start, end) {
                (Some(start), Some(end)) => (start, end),
                _ => return PixelRing::SENTINEL,
            }
        }
        None => {
            let width_scale = context.width_scale(scale);
            (
                (annotation.start_time - context.start_time) * width_scale,
                (annotation.end_time - context.start_time) * width_scale,
            )
        }
    };
    PixelRing::from_corners(
        PixelPoint::new(x_start, band.top_y()),
        PixelPoint::new(x_end, band.bottom_y()),
    )
}

/// Inverse-map a pixel ring back to domain bounds.
///
/// All returned fields are rounded to the nearest integer millisecond/Hertz.
/// On a compressed context, a ring whose left and right edges resolve to
/// different segments yields [`MappingError::SpansMultiplePulses`]; the UI
/// is expected to reject the edit rather than clamp it silently.
pub fn pixels_to_domain(
    ring: &PixelRing,
    context: &SpectroContext,
    scale: RenderScale,
) -> Result<DomainBounds, MappingError> {
    let TimeRange { start_time, end_time } = ring_time_range(ring, context, scale, true)?;
    let low_freq = context.y_to_freq(ring.lower_left().y, scale);
    let high_freq = context.y_to_freq(ring.upper_left().y, scale);
    if !low_freq.is_finite() || !high_freq.is_finite() {
        return Err(MappingError::DegenerateExtent("frequency axis has no extent"));
    }
    Ok(DomainBounds {
        start_time,
        end_time,
        low_freq: low_freq.round(),
        high_freq: high_freq.round(),
    })
}

/// Inverse-map a sequence band ring back to its time range. Cross-segment
/// spans are allowed; each edge clamps into its resolved segment.
pub fn pixels_to_time_range(
    ring: &PixelRing,
    context: &SpectroContext,
    scale: RenderScale,
) -> Result<TimeRange, MappingError> {
    ring_time_range(ring, context, scale, false)
}

fn ring_time_range(
    ring: &PixelRing,
    context: &SpectroContext,
    scale: RenderScale,
    reject_cross_segment: bool,
) -> Result<TimeRange, MappingError> {
    if ring.is_sentinel() {
        return Err(MappingError::OutsideVisibleRange);
    }
    if !ring.points().iter().all(|p| p.is_finite()) {
        return Err(MappingError::NonFiniteGeometry);
    }
    let left = ring.upper_left().x;
    let right = ring.upper_right().x;
    let (start_time, end_time) = match &context.compressed {
        Some(layout) => {
            let factor = compressed_scale_factor(context, layout, scale);
            let (start_index, start_time) =
                compressed_x_to_time(layout, left, factor, RangeEdge::Start)?;
            let (end_index, end_time) =
                compressed_x_to_time(layout, right, factor, RangeEdge::End)?;
            if reject_cross_segment && start_index != end_index {
                return Err(MappingError::SpansMultiplePulses);
            }
            (start_time, end_time)
        }
        None => {
            let width_scale = context.width_scale(scale);
            if !width_scale.is_finite() || width_scale <= 0.0 {
                return Err(MappingError::DegenerateExtent("time axis has no extent"));
            }
            (
                left / width_scale + context.start_time,
                right / width_scale + context.start_time,
            )
        }
    };
    Ok(TimeRange {
        start_time: start_time.round(),
        end_time: end_time.round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CompressedLayout;

    fn continuous_context() -> SpectroContext {
        SpectroContext::continuous(1000.0, 500.0, 0.0, 2000.0, 0.0, 100_000.0)
    }

    fn compressed_context() -> SpectroContext {
        let layout = CompressedLayout::new(
            vec![0.0, 200.0],
            vec![100.0, 300.0],
            vec![100.0, 100.0],
            200.0,
        )
        .unwrap();
        SpectroContext::continuous(200.0, 500.0, 0.0, 300.0, 0.0, 100_000.0).with_layout(layout)
    }

    #[test]
    fn continuous_worked_example() {
        // 1000x500 px over 0..2000 ms and 0..100 kHz; the 500..1000 ms,
        // 20..40 kHz box lands at x {250, 500} and y {300, 400}.
        let ctx = continuous_context();
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        let ring = pulse_to_pixels(&pulse, &ctx, RenderScale::native());
        assert_eq!(ring, PixelRing::from_bounds(250.0, 300.0, 500.0, 400.0));

        let bounds = pixels_to_domain(&ring, &ctx, RenderScale::native()).unwrap();
        assert_eq!(bounds.start_time, 500.0);
        assert_eq!(bounds.end_time, 1000.0);
        assert_eq!(bounds.low_freq, 20_000.0);
        assert_eq!(bounds.high_freq, 40_000.0);
    }

    #[test]
    fn continuous_round_trip_respects_display_scale() {
        let ctx = continuous_context();
        let scale = RenderScale::new(2000.0, 1000.0);
        let pulse = PulseAnnotation::new(1, 731.0, 902.0, 21_350.0, 47_800.0);
        let ring = pulse_to_pixels(&pulse, &ctx, scale);
        let bounds = pixels_to_domain(&ring, &ctx, scale).unwrap();
        assert!((bounds.start_time - pulse.start_time).abs() <= 1.0);
        assert!((bounds.end_time - pulse.end_time).abs() <= 1.0);
        assert!((bounds.low_freq - pulse.low_freq).abs() <= 1.0);
        assert!((bounds.high_freq - pulse.high_freq).abs() <= 1.0);
    }

    #[test]
    fn compressed_intra_segment_round_trip() {
        let ctx = compressed_context();
        let pulse = PulseAnnotation::new(1, 220.0, 280.0, 20_000.0, 40_000.0);
        let ring = pulse_to_pixels(&pulse, &ctx, RenderScale::native());
        // Second segment starts at pixel 100
        assert_eq!(ring.upper_left().x, 120.0);
        assert_eq!(ring.upper_right().x, 180.0);

        let bounds = pixels_to_domain(&ring, &ctx, RenderScale::native()).unwrap();
        assert_eq!(bounds.start_time, 220.0);
        assert_eq!(bounds.end_time, 280.0);
        assert_eq!(bounds.low_freq, 20_000.0);
        assert_eq!(bounds.high_freq, 40_000.0);
    }

    #[test]
    fn segment_boundary_clamp() {
        // One segment [100, 300] rendered 200 px wide; an end time of 350
        // pins to the boundary pixel rather than extrapolating.
        let layout = CompressedLayout::new(vec![100.0], vec![300.0], vec![200.0], 200.0).unwrap();
        let ctx = SpectroContext::continuous(200.0, 500.0, 100.0, 300.0, 0.0, 100_000.0)
            .with_layout(layout);
        let overhang = PulseAnnotation::new(1, 150.0, 350.0, 20_000.0, 40_000.0);
        let flush = PulseAnnotation::new(2, 150.0, 300.0, 20_000.0, 40_000.0);
        let scale = RenderScale::native();
        assert_eq!(
            pulse_to_pixels(&overhang, &ctx, scale).upper_right().x,
            pulse_to_pixels(&flush, &ctx, scale).upper_right().x,
        );
        assert_eq!(pulse_to_pixels(&overhang, &ctx, scale).upper_right().x, 200.0);
    }

    #[test]
    fn cross_segment_selection_is_rejected() {
        let ctx = compressed_context();
        // Left edge in segment 0, right edge in segment 1
        let ring = PixelRing::from_bounds(50.0, 300.0, 150.0, 400.0);
        let err = pixels_to_domain(&ring, &ctx, RenderScale::native()).unwrap_err();
        assert_eq!(err, MappingError::SpansMultiplePulses);
        assert_eq!(err.to_string(), "selection spans multiple pulses");
    }

    #[test]
    fn sequence_band_may_span_segments() {
        let ctx = compressed_context();
        let sequence = SequenceAnnotation::new(1, 50.0, 250.0);
        let band = SequenceBand::for_context(&ctx);
        let ring = sequence_to_pixels(&sequence, &ctx, band, RenderScale::native());
        assert!(ring.is_visible());
        // Band sits above the image, shifted for the compressed view
        assert_eq!(ring.upper_left().y, -70.0);
        assert_eq!(ring.lower_left().y, -30.0);

        let range = pixels_to_time_range(&ring, &ctx, RenderScale::native()).unwrap();
        assert_eq!(range.start_time, 50.0);
        assert_eq!(range.end_time, 250.0);
    }

    #[test]
    fn zero_duration_segment_degrades_to_sentinel() {
        let layout = CompressedLayout::new(vec![100.0], vec![100.0], vec![50.0], 50.0).unwrap();
        let ctx = SpectroContext::continuous(50.0, 500.0, 0.0, 200.0, 0.0, 100_000.0)
            .with_layout(layout);
        let pulse = PulseAnnotation::new(1, 100.0, 100.0, 10_000.0, 20_000.0);
        let ring = pulse_to_pixels(&pulse, &ctx, RenderScale::native());
        assert!(ring.is_sentinel());

        let probe = PixelRing::from_bounds(10.0, 10.0, 20.0, 20.0);
        let err = pixels_to_domain(&probe, &ctx, RenderScale::native()).unwrap_err();
        assert!(matches!(err, MappingError::DegenerateExtent(_)));
    }

    #[test]
    fn sentinel_and_nan_rings_do_not_map() {
        let ctx = continuous_context();
        assert_eq!(
            pixels_to_domain(&PixelRing::SENTINEL, &ctx, RenderScale::native()).unwrap_err(),
            MappingError::OutsideVisibleRange,
        );
        let nan_ring = PixelRing::from_bounds(0.0, f64::NAN, 10.0, 10.0);
        assert_eq!(
            pixels_to_domain(&nan_ring, &ctx, RenderScale::native()).unwrap_err(),
            MappingError::NonFiniteGeometry,
        );
    }

    #[test]
    fn inverse_rounds_to_storage_granularity() {
        let ctx = continuous_context();
        let ring = PixelRing::from_bounds(250.3, 300.2, 499.7, 399.8);
        let bounds = pixels_to_domain(&ring, &ctx, RenderScale::native()).unwrap();
        assert_eq!(bounds.start_time, bounds.start_time.round());
        assert_eq!(bounds.low_freq, bounds.low_freq.round());
    }

    #[test]
    fn gap_rule_is_symmetric_between_paths() {
        // A start time inside the gap locks to the upcoming segment's start
        // pixel; mapping that pixel back as a start edge yields the
        // upcoming segment's start.
        let ctx = compressed_context();
        let layout = ctx.compressed.as_ref().unwrap();
        let x = compressed_time_to_x(layout, 150.0, 1.0).unwrap();
        assert_eq!(x, 100.0);
        let (index, time) = compressed_x_to_time(layout, x, 1.0, RangeEdge::Start).unwrap();
        assert_eq!(index, 1);
        assert_eq!(time, 200.0);
        // The same boundary pixel as an end edge stays with the earlier
        // segment's end.
        let (index, time) = compressed_x_to_time(layout, x, 1.0, RangeEdge::End).unwrap();
        assert_eq!(index, 0);
        assert_eq!(time, 100.0);
    }

    #[test]
    fn intra_segment_round_trip_at_segment_start() {
        // A pulse flush at the second segment's start lands its left edge on
        // the shared boundary pixel; the inverse must keep it in one segment.
        let ctx = compressed_context();
        let pulse = PulseAnnotation::new(1, 200.0, 280.0, 20_000.0, 40_000.0);
        let ring = pulse_to_pixels(&pulse, &ctx, RenderScale::native());
        assert_eq!(ring.upper_left().x, 100.0);

        let bounds = pixels_to_domain(&ring, &ctx, RenderScale::native()).unwrap();
        assert_eq!(bounds.start_time, 200.0);
        assert_eq!(bounds.end_time, 280.0);
    }
}
