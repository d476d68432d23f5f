//! Pulse and sequence annotation records.
//!
//! These are plain wire data owned by the API layer; the core borrows them
//! for the duration of a mapping call or an edit session. The producer is
//! responsible for `start_time <= end_time` and `low_freq <= high_freq`; the
//! core never rejects out-of-range values here, it clamps or flags an error
//! on the pixel-to-domain path only.

use serde::{Deserialize, Serialize};

use super::Species;

/// Unique identifier for an annotation.
pub type AnnotationId = i64;

/// A time-by-frequency rectangular label on a single bat call pulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseAnnotation {
    pub id: AnnotationId,
    /// Start of the pulse in milliseconds.
    pub start_time: f64,
    /// End of the pulse in milliseconds.
    pub end_time: f64,
    /// Lower frequency bound in Hertz.
    pub low_freq: f64,
    /// Upper frequency bound in Hertz.
    pub high_freq: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<Species>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<bool>,
}

impl PulseAnnotation {
    /// Create a bare record with just the geometry fields set.
    pub fn new(
        id: AnnotationId,
        start_time: f64,
        end_time: f64,
        low_freq: f64,
        high_freq: f64,
    ) -> Self {
        Self {
            id,
            start_time,
            end_time,
            low_freq,
            high_freq,
            species: None,
            comments: None,
            annotation_type: None,
            owner_email: None,
            editing: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// A time-range-only label spanning a group of pulses.
///
/// Rendered as a band at a fixed pixel offset above the spectrogram rather
/// than at a frequency-derived height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceAnnotation {
    pub id: AnnotationId,
    /// Start of the sequence in milliseconds.
    pub start_time: f64,
    /// End of the sequence in milliseconds.
    pub end_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<Species>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<bool>,
}

impl SequenceAnnotation {
    pub fn new(id: AnnotationId, start_time: f64, end_time: f64) -> Self {
        Self {
            id,
            start_time,
            end_time,
            species: None,
            comments: None,
            annotation_type: None,
            owner_email: None,
            editing: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_round_trips_api_field_names() {
        let json = r#"{
            "id": 7,
            "start_time": 500,
            "end_time": 1000,
            "low_freq": 20000,
            "high_freq": 40000,
            "type": "CF",
            "owner_email": "reviewer@example.com"
        }"#;
        let pulse: PulseAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(pulse.id, 7);
        assert_eq!(pulse.annotation_type.as_deref(), Some("CF"));
        assert_eq!(pulse.duration(), 500.0);

        let back = serde_json::to_string(&pulse).unwrap();
        assert!(back.contains("\"type\":\"CF\""));
        assert!(!back.contains("comments"));
    }

    #[test]
    fn sequence_has_no_frequency_bounds() {
        let json = r#"{"id": 1, "start_time": 0, "end_time": 1500}"#;
        let sequence: SequenceAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(sequence.duration(), 1500.0);
    }
}
