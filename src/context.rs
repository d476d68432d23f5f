//! Spectrogram view description: domain extents and optional compressed
//! layout.
//!
//! A [`SpectroContext`] is constructed once per spectrogram view and replaced
//! wholesale when the user switches zoom or compression mode; every consumer
//! treats it as read-only for the duration of a render pass.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::RenderScale;

/// Raw segment arrays as they arrive from the API, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawCompressedLayout {
    start_times: Vec<f64>,
    end_times: Vec<f64>,
    widths: Vec<f64>,
    compressed_width: f64,
}

/// Compressed-segment layout: silent gaps elided, the time axis split into
/// disjoint pulse windows each with its own pixel width.
///
/// Invariant: `start_times[i] <= end_times[i] < start_times[i + 1]`, all
/// three arrays index-aligned and non-empty. The constructor enforces this,
/// so resolution code never observes a malformed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCompressedLayout")]
pub struct CompressedLayout {
    start_times: Vec<f64>,
    end_times: Vec<f64>,
    widths: Vec<f64>,
    compressed_width: f64,
}

impl CompressedLayout {
    pub fn new(
        start_times: Vec<f64>,
        end_times: Vec<f64>,
        widths: Vec<f64>,
        compressed_width: f64,
    ) -> Result<Self, LayoutError> {
        if start_times.len() != end_times.len() || start_times.len() != widths.len() {
            return Err(LayoutError::MismatchedLengths {
                starts: start_times.len(),
                ends: end_times.len(),
                widths: widths.len(),
            });
        }
        if start_times.is_empty() {
            return Err(LayoutError::Empty);
        }
        if !compressed_width.is_finite() || compressed_width <= 0.0 {
            return Err(LayoutError::NonPositiveWidth {
                width: compressed_width,
            });
        }
        for index in 0..start_times.len() {
            let start = start_times[index];
            let end = end_times[index];
            let width = widths[index];
            if !start.is_finite() || !end.is_finite() || !width.is_finite() {
                return Err(LayoutError::NonFinite { index });
            }
            if width < 0.0 {
                return Err(LayoutError::NegativeWidth { index });
            }
            if start > end {
                return Err(LayoutError::Unordered { index });
            }
            if index > 0 && end_times[index - 1] >= start {
                return Err(LayoutError::Unordered { index });
            }
        }
        Ok(Self {
            start_times,
            end_times,
            widths,
            compressed_width,
        })
    }

    /// Number of segments (always at least one).
    pub fn segment_count(&self) -> usize {
        self.start_times.len()
    }

    /// Start of segment `index` in milliseconds.
    pub fn start_time(&self, index: usize) -> f64 {
        self.start_times[index]
    }

    /// End of segment `index` in milliseconds.
    pub fn end_time(&self, index: usize) -> f64 {
        self.end_times[index]
    }

    /// Pixel width of segment `index` at the native compressed width.
    pub fn width(&self, index: usize) -> f64 {
        self.widths[index]
    }

    /// Native pixel width of the compressed rendering (sum of segment
    /// widths).
    pub fn compressed_width(&self) -> f64 {
        self.compressed_width
    }

    /// Duration of segment `index` in milliseconds.
    pub fn duration(&self, index: usize) -> f64 {
        self.end_times[index] - self.start_times[index]
    }

    pub fn start_times(&self) -> &[f64] {
        &self.start_times
    }

    pub fn end_times(&self) -> &[f64] {
        &self.end_times
    }
}

impl TryFrom<RawCompressedLayout> for CompressedLayout {
    type Error = LayoutError;

    fn try_from(raw: RawCompressedLayout) -> Result<Self, Self::Error> {
        Self::new(raw.start_times, raw.end_times, raw.widths, raw.compressed_width)
    }
}

/// Immutable-per-render description of a spectrogram's domain extents and,
/// optionally, its compressed-segment layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectroContext {
    /// Pixel width of the rendered image at scale 1.
    pub width: f64,
    /// Pixel height of the rendered image at scale 1.
    pub height: f64,
    /// Domain start time in milliseconds.
    pub start_time: f64,
    /// Domain end time in milliseconds.
    pub end_time: f64,
    /// Lowest rendered frequency in Hertz.
    pub low_freq: f64,
    /// Highest rendered frequency in Hertz.
    pub high_freq: f64,
    /// Present iff this is a compressed view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<CompressedLayout>,
}

impl SpectroContext {
    /// Create a continuous context covering the given extents.
    pub fn continuous(
        width: f64,
        height: f64,
        start_time: f64,
        end_time: f64,
        low_freq: f64,
        high_freq: f64,
    ) -> Self {
        Self {
            width,
            height,
            start_time,
            end_time,
            low_freq,
            high_freq,
            compressed: None,
        }
    }

    /// Attach a compressed layout, turning this into a compressed context.
    pub fn with_layout(mut self, layout: CompressedLayout) -> Self {
        self.compressed = Some(layout);
        self
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed.is_some()
    }

    /// Effective raster width: the display width or the native width,
    /// whichever is larger.
    pub fn adjusted_width(&self, scale: RenderScale) -> f64 {
        scale.width.max(self.width)
    }

    /// Effective raster height.
    pub fn adjusted_height(&self, scale: RenderScale) -> f64 {
        scale.height.max(self.height)
    }

    /// Pixels per Hertz on the (inverted) frequency axis.
    pub fn height_scale(&self, scale: RenderScale) -> f64 {
        self.adjusted_height(scale) / (self.high_freq - self.low_freq)
    }

    /// Pixels per millisecond on the continuous time axis.
    pub fn width_scale(&self, scale: RenderScale) -> f64 {
        self.adjusted_width(scale) / (self.end_time - self.start_time)
    }

    /// Map a frequency to a pixel y value. The axis is inverted: pixel y
    /// grows downward while Hertz grows upward.
    pub fn freq_to_y(&self, freq: f64, scale: RenderScale) -> f64 {
        self.adjusted_height(scale) - (freq - self.low_freq) * self.height_scale(scale)
    }

    /// Inverse of [`freq_to_y`](Self::freq_to_y).
    pub fn y_to_freq(&self, y: f64, scale: RenderScale) -> f64 {
        self.low_freq + (self.adjusted_height(scale) - y) / self.height_scale(scale)
    }
}
