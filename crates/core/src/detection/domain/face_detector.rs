use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Parameters supplied on every detector invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionParams {
    /// Scale step between pyramid levels, > 1.0. Larger steps scan fewer
    /// scales.
    pub scale_factor: f64,
    /// Neighbor-vote threshold for accepting a candidate region.
    pub min_neighbors: u32,
    /// Smallest face edge to report, in pixels.
    pub min_size: u32,
}

/// Domain interface for face detection.
///
/// Implementations may keep per-run scratch state, hence `&mut self`. Each
/// analysis run owns its own instance; nothing is shared across runs.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        frame: &Frame,
        params: &DetectionParams,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>>;
}
