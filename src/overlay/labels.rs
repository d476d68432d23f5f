//! Species and type label placement.
//!
//! Label anchors derive from the already-computed annotation ring plus a
//! fixed pixel offset; there is no new geometry math here.

use crate::context::SpectroContext;
use crate::geometry::{PixelPoint, RenderScale};
use crate::mapping::{SequenceBand, pulse_to_pixels, sequence_to_pixels};
use crate::model::{PulseAnnotation, SequenceAnnotation};
use crate::overlay::TextAnchor;

/// Vertical spacing between stacked labels on one annotation.
pub const SPECIES_LABEL_SPACING: f64 = 40.0;

/// Species labels centered above each pulse box, stacking upward when an
/// annotation carries several species.
pub fn species_labels(
    annotations: &[PulseAnnotation],
    context: &SpectroContext,
    scale: RenderScale,
) -> Vec<TextAnchor> {
    let mut anchors = Vec::new();
    for annotation in annotations {
        let ring = pulse_to_pixels(annotation, context, scale);
        if !ring.is_visible() {
            continue;
        }
        let Some(species) = &annotation.species else {
            continue;
        };
        let center_x = (ring.upper_left().x + ring.upper_right().x) / 2.0;
        let mut y = ring.upper_left().y;
        for entry in species {
            anchors.push(TextAnchor::new(entry.label(), PixelPoint::new(center_x, y)));
            y -= SPECIES_LABEL_SPACING;
        }
    }
    anchors
}

/// Type and species labels above each sequence band, stacking upward. The
/// call type (when present) comes first, then one label per species.
pub fn sequence_labels(
    annotations: &[SequenceAnnotation],
    context: &SpectroContext,
    scale: RenderScale,
) -> Vec<TextAnchor> {
    let band = SequenceBand::for_context(context);
    let mut anchors = Vec::new();
    for annotation in annotations {
        let ring = sequence_to_pixels(annotation, context, band, scale);
        if !ring.is_visible() {
            continue;
        }
        let Some(species) = &annotation.species else {
            continue;
        };
        let center_x = (ring.upper_left().x + ring.upper_right().x) / 2.0;
        let mut y = ring.upper_left().y - SPECIES_LABEL_SPACING;
        if let Some(kind) = &annotation.annotation_type {
            anchors.push(TextAnchor::new(kind.clone(), PixelPoint::new(center_x, y)));
            y -= SPECIES_LABEL_SPACING;
        }
        for entry in species {
            anchors.push(TextAnchor::new(entry.label(), PixelPoint::new(center_x, y)));
            y -= SPECIES_LABEL_SPACING;
        }
    }
    anchors
}
