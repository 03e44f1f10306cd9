use serde::Serialize;

/// Aggregate outcome of one analysis run.
///
/// Statistics are pre-rounded at the pipeline boundary so every front end
/// reports identical numbers. Encoded images are carried out-of-band from
/// the JSON view; the CLI writes them to disk and the server re-encodes
/// them as base64.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    /// Sum of face counts over all sampled frames.
    pub total_faces: usize,
    /// Number of frames actually run through the detector.
    pub frame_count: usize,
    /// Sampled frames containing at least one face.
    pub frames_with_faces: usize,
    /// Largest face count seen in any single sampled frame.
    pub max_faces: usize,
    /// total_faces / frame_count, 2 decimals, 0 when nothing was sampled.
    pub avg_faces: f64,
    /// Percentage of sampled frames with faces, 1 decimal.
    pub detection_rate: f64,
    /// Video duration in seconds, 2 decimals, 0 when fps is unknown.
    pub duration_secs: f64,
    /// Per-sampled-frame face counts, in sampling order.
    pub timeline: Vec<usize>,
    /// First face-bearing sampled frame, unannotated.
    #[serde(skip)]
    pub before_image: Option<Vec<u8>>,
    /// The same frame with boxes drawn; absent when box drawing is off.
    #[serde(skip)]
    pub annotated_image: Option<Vec<u8>>,
    /// Timeline chart; absent when charting is off or nothing was sampled.
    #[serde(skip)]
    pub chart_image: Option<Vec<u8>>,
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
