//! batscope - Bat call spectrogram annotation geometry
//!
//! Coordinate mapping between acoustic domain units (milliseconds, hertz)
//! and spectrogram pixel space, for both continuous and compressed
//! (silence-elided) renderings, plus the edit session state machine and
//! overlay projectors that drive an annotation review surface.

pub mod context;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod model;
pub mod overlay;
pub mod segment;
pub mod session;

#[cfg(test)]
mod tests;

pub use context::{CompressedLayout, SpectroContext};
pub use error::{LayoutError, MappingError};
pub use geometry::{PixelPoint, PixelRing, RenderScale};
pub use mapping::{
    DomainBounds, SequenceBand, TimeRange, pixels_to_domain, pixels_to_time_range,
    pulse_to_pixels, sequence_to_pixels,
};
pub use model::{AnnotationId, PulseAnnotation, SequenceAnnotation, Species};
pub use session::{AnnotationEditSession, SessionEvent, SessionMode};
