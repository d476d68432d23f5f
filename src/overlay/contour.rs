//! Contour curve projection.
//!
//! Contour geometry is generated per pulse upstream, so each curve carries
//! the segment index of its owning pulse. On compressed contexts the
//! projection addresses that segment directly instead of re-resolving each
//! point's time, but it still clamps a point's time to the segment's end,
//! exactly as the coordinate mapper does.

use crate::context::SpectroContext;
use crate::geometry::{PixelPoint, RenderScale};

/// One contour level curve for a pulse, in domain units.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Intensity level of this curve (used upstream for color ramps).
    pub level: f64,
    /// Index of the owning pulse's segment in the compressed layout.
    pub segment_index: usize,
    /// Curve points as `(time in ms, frequency in Hz)` pairs.
    pub curve: Vec<(f64, f64)>,
}

/// Project a contour curve into pixel space.
///
/// Returns `None` when the curve cannot be placed: a compressed context
/// whose layout does not contain the carried segment index, or a segment
/// with no duration. Callers skip unplaceable curves.
pub fn project_contour(
    contour: &Contour,
    context: &SpectroContext,
    scale: RenderScale,
) -> Option<Vec<PixelPoint>> {
    match &context.compressed {
        Some(layout) => {
            let index = contour.segment_index;
            if index >= layout.segment_count() {
                return None;
            }
            let duration = layout.duration(index);
            if duration <= 0.0 {
                return None;
            }
            let scale_factor = context.adjusted_width(scale) / layout.compressed_width();
            let offset: f64 = (0..index).map(|i| layout.width(i) * scale_factor).sum();
            let pixels_per_ms = layout.width(index) / duration;
            let start = layout.start_time(index);
            let end = layout.end_time(index);
            Some(
                contour
                    .curve
                    .iter()
                    .map(|&(time, freq)| {
                        let clamped = time.min(end);
                        PixelPoint::new(
                            offset + (clamped - start) * pixels_per_ms * scale_factor,
                            context.freq_to_y(freq, scale),
                        )
                    })
                    .collect(),
            )
        }
        None => {
            let width_scale = context.width_scale(scale);
            Some(
                contour
                    .curve
                    .iter()
                    .map(|&(time, freq)| {
                        PixelPoint::new(
                            (time - context.start_time) * width_scale,
                            context.freq_to_y(freq, scale),
                        )
                    })
                    .collect(),
            )
        }
    }
}
