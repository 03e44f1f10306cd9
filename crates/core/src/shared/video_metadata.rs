use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}

impl VideoMetadata {
    /// Nominal duration in seconds, rounded to two decimals.
    ///
    /// Returns 0 when the frame rate is unknown or zero.
    pub fn duration_secs(&self) -> f64 {
        if self.fps > 0.0 {
            (self.total_frames as f64 / self.fps * 100.0).round() / 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn meta(fps: f64, total_frames: usize) -> VideoMetadata {
        VideoMetadata {
            width: 1920,
            height: 1080,
            fps,
            total_frames,
            codec: "h264".to_string(),
            source_path: Some(PathBuf::from("/tmp/test.mp4")),
        }
    }

    #[test]
    fn test_construction() {
        let m = meta(30.0, 900);
        assert_eq!(m.width, 1920);
        assert_eq!(m.height, 1080);
        assert_eq!(m.total_frames, 900);
        assert_eq!(m.codec, "h264");
        assert_eq!(m.source_path, Some(PathBuf::from("/tmp/test.mp4")));
    }

    #[test]
    fn test_duration_rounds_to_two_decimals() {
        // 100 frames at 30 fps = 3.333... → 3.33
        assert_relative_eq!(meta(30.0, 100).duration_secs(), 3.33);
    }

    #[test]
    fn test_duration_exact() {
        assert_relative_eq!(meta(25.0, 250).duration_secs(), 10.0);
    }

    #[test]
    fn test_duration_zero_fps() {
        assert_relative_eq!(meta(0.0, 500).duration_secs(), 0.0);
    }

    #[test]
    fn test_duration_negative_fps_treated_as_unknown() {
        assert_relative_eq!(meta(-1.0, 500).duration_secs(), 0.0);
    }
}
