//! Annotation record types as they round-trip through the API layer.

mod annotation;
mod species;

pub use annotation::{AnnotationId, PulseAnnotation, SequenceAnnotation};
pub use species::Species;
