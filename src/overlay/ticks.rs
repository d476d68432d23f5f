//! Time and frequency marker placement for annotations.
//!
//! Each projector maps the annotation through the coordinate mapper and
//! derives marker lines and label anchors from the resulting ring's
//! corners; no new geometry math is introduced here. Annotations whose
//! rings are not visible are skipped.

use crate::context::SpectroContext;
use crate::geometry::{PixelPoint, RenderScale};
use crate::mapping::{SequenceBand, pulse_to_pixels, sequence_to_pixels};
use crate::model::{PulseAnnotation, SequenceAnnotation};
use crate::overlay::{LineSegment, TextAnchor, TickSet};

/// Length of the short marker lines at a time range's endpoints.
const TIME_MARKER_LENGTH: f64 = 12.0;
/// Length of the frequency marker lines extending right of a pulse box.
const FREQ_MARKER_LENGTH: f64 = 16.0;
/// Gap between a time marker line and its label.
const TIME_LABEL_GAP: f64 = 5.0;

/// Start/end time markers below each pulse box, with millisecond labels.
pub fn pulse_time_markers(
    annotations: &[PulseAnnotation],
    context: &SpectroContext,
    scale: RenderScale,
) -> TickSet {
    let mut set = TickSet::default();
    for annotation in annotations {
        let ring = pulse_to_pixels(annotation, context, scale);
        if !ring.is_visible() {
            continue;
        }
        let bottom = ring.lower_left().y;
        for (x, time) in [
            (ring.lower_left().x, annotation.start_time),
            (ring.lower_right().x, annotation.end_time),
        ] {
            set.lines.push(LineSegment::new(
                PixelPoint::new(x, bottom),
                PixelPoint::new(x, bottom + TIME_MARKER_LENGTH),
            ));
            set.texts.push(TextAnchor::new(
                format!("{time}ms"),
                PixelPoint::new(x, bottom + TIME_MARKER_LENGTH + TIME_LABEL_GAP),
            ));
        }
    }
    set
}

/// Start/end time markers above each sequence band.
pub fn sequence_time_markers(
    annotations: &[SequenceAnnotation],
    context: &SpectroContext,
    scale: RenderScale,
) -> TickSet {
    let band = SequenceBand::for_context(context);
    let mut set = TickSet::default();
    for annotation in annotations {
        let ring = sequence_to_pixels(annotation, context, band, scale);
        if !ring.is_visible() {
            continue;
        }
        let top = ring.upper_left().y;
        for (x, time) in [
            (ring.upper_left().x, annotation.start_time),
            (ring.upper_right().x, annotation.end_time),
        ] {
            set.lines.push(LineSegment::new(
                PixelPoint::new(x, top),
                PixelPoint::new(x, top - TIME_MARKER_LENGTH),
            ));
            set.texts.push(TextAnchor::new(
                format!("{time}ms"),
                PixelPoint::new(x, top - TIME_MARKER_LENGTH),
            ));
        }
    }
    set
}

/// Duration labels centered inside each pulse box, replacing the endpoint
/// markers when the reviewer prefers a compact display.
pub fn pulse_duration_labels(
    annotations: &[PulseAnnotation],
    context: &SpectroContext,
    scale: RenderScale,
) -> Vec<TextAnchor> {
    let mut texts = Vec::new();
    for annotation in annotations {
        let ring = pulse_to_pixels(annotation, context, scale);
        if !ring.is_visible() {
            continue;
        }
        let center = PixelPoint::new(
            (ring.upper_left().x + ring.upper_right().x) / 2.0,
            (ring.upper_left().y + ring.lower_left().y) / 2.0,
        );
        texts.push(TextAnchor::new(
            format!("{}ms", annotation.duration()),
            center,
        ));
    }
    texts
}

/// Low/high frequency markers at each pulse box's right edge, labeled in
/// kilohertz.
pub fn pulse_freq_markers(
    annotations: &[PulseAnnotation],
    context: &SpectroContext,
    scale: RenderScale,
) -> TickSet {
    let mut set = TickSet::default();
    for annotation in annotations {
        let ring = pulse_to_pixels(annotation, context, scale);
        if !ring.is_visible() {
            continue;
        }
        let right = ring.lower_right().x;
        for (y, freq) in [
            (ring.lower_right().y, annotation.low_freq),
            (ring.upper_right().y, annotation.high_freq),
        ] {
            set.lines.push(LineSegment::new(
                PixelPoint::new(right, y),
                PixelPoint::new(right + FREQ_MARKER_LENGTH, y),
            ));
            set.texts.push(TextAnchor::new(
                format!("{:.1}kHz", freq / 1000.0),
                PixelPoint::new(right + FREQ_MARKER_LENGTH, y),
            ));
        }
    }
    set
}
