use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::detection::domain::face_detector::{DetectionParams, FaceDetector};
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Face detector backed by the `rustface` crate (SeetaFace funnel-structured
/// cascade).
///
/// The model is parsed once at construction; a fresh engine is assembled per
/// call so the caller-supplied [`DetectionParams`] take effect every time.
pub struct SeetaFaceDetector {
    model: rustface::Model,
}

impl SeetaFaceDetector {
    /// Loads and parses the SeetaFace model file.
    ///
    /// Any read or parse failure here is a model-unavailable condition for
    /// the whole run.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(model_path)?;
        let model = rustface::read_model(BufReader::new(file))?;
        Ok(Self { model })
    }
}

impl FaceDetector for SeetaFaceDetector {
    fn detect(
        &mut self,
        frame: &Frame,
        params: &DetectionParams,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        // SeetaFace panics on window sizes under 20 px.
        detector.set_min_face_size(params.min_size.max(20));
        // The funnel cascade has no neighbor-vote stage; its score threshold
        // plays the same acceptance-tightening role.
        detector.set_score_thresh(f64::from(params.min_neighbors));
        // SeetaFace expresses the pyramid step as a downscale ratio < 1,
        // the reciprocal of the conventional scale factor.
        detector.set_pyramid_scale_factor((1.0 / params.scale_factor) as f32);
        detector.set_slide_window_step(4, 4);

        let gray = frame.to_gray();
        let image = rustface::ImageData::new(&gray, frame.width(), frame.height());
        let faces = detector.detect(&image);

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox::new(bbox.x(), bbox.y(), bbox.width(), bbox.height())
            })
            .collect())
    }
}
