use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_MIN_FACE_SIZE, DEFAULT_SENSITIVITY, MAX_SENSITIVITY, MIN_SENSITIVITY,
};

/// Per-run analysis settings, immutable for the duration of one run.
///
/// Field names follow the camelCase wire format the upload form sends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Sensitivity level, 1-10.
    ///
    /// Mapped to the detector scale factor as `1.1 + sensitivity / 50.0`.
    /// Note the inversion: a higher sensitivity setting widens the scale
    /// step, so the scan is coarser (faster, lower recall). Kept as-is
    /// because downstream fixtures depend on the literal numbers.
    pub sensitivity: u32,
    /// Smallest face edge, in pixels, the detector will report.
    pub min_face_size: u32,
    /// Process every Nth raw frame; 1 processes every frame.
    pub frame_skip: usize,
    /// Draw bounding boxes on the annotated sample frame.
    #[serde(rename = "boundingBox")]
    pub draw_boxes: bool,
    /// Render the face-count timeline chart.
    pub chart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            min_face_size: DEFAULT_MIN_FACE_SIZE,
            frame_skip: 1,
            draw_boxes: true,
            chart: true,
        }
    }
}

impl Settings {
    /// Detector scale-step derived from the sensitivity level.
    pub fn scale_factor(&self) -> f64 {
        1.1 + self.sensitivity as f64 / 50.0
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_SENSITIVITY..=MAX_SENSITIVITY).contains(&self.sensitivity) {
            return Err(format!(
                "Sensitivity must be between {MIN_SENSITIVITY} and {MAX_SENSITIVITY}, got {}",
                self.sensitivity
            ));
        }
        if self.frame_skip == 0 {
            return Err("Frame skip must be at least 1".to_string());
        }
        if self.min_face_size == 0 {
            return Err("Minimum face size must be at least 1 pixel".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.sensitivity, 5);
        assert_eq!(s.min_face_size, 30);
        assert_eq!(s.frame_skip, 1);
        assert!(s.draw_boxes);
        assert!(s.chart);
    }

    #[rstest]
    #[case(1, 1.12)]
    #[case(5, 1.2)]
    #[case(10, 1.3)]
    fn test_scale_factor_mapping(#[case] sensitivity: u32, #[case] expected: f64) {
        let s = Settings {
            sensitivity,
            ..Settings::default()
        };
        assert_relative_eq!(s.scale_factor(), expected);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Settings::default().validate().is_ok());
    }

    #[rstest]
    #[case::sensitivity_zero(Settings { sensitivity: 0, ..Settings::default() })]
    #[case::sensitivity_high(Settings { sensitivity: 11, ..Settings::default() })]
    #[case::zero_stride(Settings { frame_skip: 0, ..Settings::default() })]
    #[case::zero_face_size(Settings { min_face_size: 0, ..Settings::default() })]
    fn test_validate_rejects(#[case] settings: Settings) {
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_deserializes_wire_format() {
        let s: Settings = serde_json::from_str(
            r#"{"sensitivity":7,"minFaceSize":40,"frameSkip":2,"boundingBox":false,"chart":true}"#,
        )
        .unwrap();
        assert_eq!(s.sensitivity, 7);
        assert_eq!(s.min_face_size, 40);
        assert_eq!(s.frame_skip, 2);
        assert!(!s.draw_boxes);
        assert!(s.chart);
    }

    #[test]
    fn test_deserializes_partial_with_defaults() {
        // The upload form may also send fields the server does not use
        // (e.g. client-side history); missing fields take defaults.
        let s: Settings = serde_json::from_str(r#"{"frameSkip":3}"#).unwrap();
        assert_eq!(s.frame_skip, 3);
        assert_eq!(s.sensitivity, 5);
        assert!(s.draw_boxes);
    }
}
