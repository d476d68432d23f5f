//! Gap masks for compressed views rendered over the full-duration axis.
//!
//! When a compressed rendering is displayed on top of the original
//! continuous spectrogram, the elided silence between pulse windows is
//! covered with opaque rectangles. The masks also cover the lead-in before
//! the first segment and the tail after the last one.

use crate::context::SpectroContext;
use crate::geometry::{PixelPoint, PixelRing, RenderScale};

/// Full-height rectangles covering every gap on the full-duration time
/// axis. Returns an empty list for continuous contexts.
pub fn gap_masks(context: &SpectroContext, scale: RenderScale) -> Vec<PixelRing> {
    let Some(layout) = &context.compressed else {
        return Vec::new();
    };
    let width_scale = context.width_scale(scale);
    let height = context.adjusted_height(scale);
    let time_to_x = |time: f64| (time - context.start_time) * width_scale;

    // Masked spans run from each segment's end to the next segment's start,
    // bracketed by the view's own extents.
    let mut span_starts = vec![context.start_time];
    span_starts.extend_from_slice(layout.end_times());
    let mut span_ends = layout.start_times().to_vec();
    span_ends.push(context.end_time);

    span_starts
        .iter()
        .zip(&span_ends)
        .map(|(&gap_start, &gap_end)| {
            PixelRing::from_corners(
                PixelPoint::new(time_to_x(gap_start), 0.0),
                PixelPoint::new(time_to_x(gap_end), height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CompressedLayout;

    #[test]
    fn continuous_context_has_no_masks() {
        let ctx = SpectroContext::continuous(1000.0, 500.0, 0.0, 2000.0, 0.0, 100_000.0);
        assert!(gap_masks(&ctx, RenderScale::native()).is_empty());
    }

    #[test]
    fn masks_cover_lead_in_gaps_and_tail() {
        // Full view 0..400 ms at 1 px/ms; segments [100, 200] and [250, 300]
        let layout = CompressedLayout::new(
            vec![100.0, 250.0],
            vec![200.0, 300.0],
            vec![100.0, 50.0],
            150.0,
        )
        .unwrap();
        let ctx = SpectroContext::continuous(400.0, 500.0, 0.0, 400.0, 0.0, 100_000.0)
            .with_layout(layout);
        let masks = gap_masks(&ctx, RenderScale::native());
        assert_eq!(masks.len(), 3);
        // Lead-in: 0..100, gap: 200..250, tail: 300..400
        assert_eq!(masks[0].upper_left().x, 0.0);
        assert_eq!(masks[0].upper_right().x, 100.0);
        assert_eq!(masks[1].upper_left().x, 200.0);
        assert_eq!(masks[1].upper_right().x, 250.0);
        assert_eq!(masks[2].upper_right().x, 400.0);
        // Masks span the full image height
        assert_eq!(masks[0].lower_left().y, 500.0);
    }
}
