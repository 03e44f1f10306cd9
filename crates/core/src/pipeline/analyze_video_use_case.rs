use std::path::Path;

use crate::chart::domain::chart_renderer::ChartRenderer;
use crate::detection::domain::face_detector::{DetectionParams, FaceDetector};
use crate::error::AnalysisError;
use crate::shared::constants::{MAX_TOTAL_FRAMES, MIN_NEIGHBORS};
use crate::shared::settings::Settings;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::image_encoder::ImageEncoder;
use crate::video::domain::video_reader::VideoReader;

use super::analysis_report::{round1, round2, AnalysisReport};
use super::annotator::annotate;
use super::pipeline_logger::PipelineLogger;

/// Running state accumulated over one pass through the sampled frames.
struct ScanState {
    frame_count: usize,
    total_faces: usize,
    frames_with_faces: usize,
    max_faces: usize,
    timeline: Vec<usize>,
    before_image: Option<Vec<u8>>,
    annotated_image: Option<Vec<u8>>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            frame_count: 0,
            total_faces: 0,
            frames_with_faces: 0,
            max_faces: 0,
            timeline: Vec::new(),
            before_image: None,
            annotated_image: None,
        }
    }
}

/// Orchestrates one full video analysis: sample frames by stride, detect
/// faces per sampled frame, accumulate statistics, and capture the report
/// images.
///
/// Wires domain components together; all state is scoped to one `execute`
/// call. Frames are processed strictly one at a time and the source is
/// released on every exit path.
pub struct AnalyzeVideoUseCase {
    reader: Box<dyn VideoReader>,
    detector: Box<dyn FaceDetector>,
    encoder: Box<dyn ImageEncoder>,
    chart_renderer: Box<dyn ChartRenderer>,
    logger: Box<dyn PipelineLogger>,
    settings: Settings,
}

impl AnalyzeVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        detector: Box<dyn FaceDetector>,
        encoder: Box<dyn ImageEncoder>,
        chart_renderer: Box<dyn ChartRenderer>,
        logger: Box<dyn PipelineLogger>,
        settings: Settings,
    ) -> Self {
        Self {
            reader,
            detector,
            encoder,
            chart_renderer,
            logger,
            settings,
        }
    }

    pub fn execute(&mut self, input: &Path) -> Result<AnalysisReport, AnalysisError> {
        self.settings.validate().map_err(AnalysisError::Runtime)?;

        let metadata = self
            .reader
            .open(input)
            .map_err(|e| AnalysisError::SourceUnavailable(e.to_string()))?;

        if metadata.total_frames > MAX_TOTAL_FRAMES {
            self.reader.close();
            return Err(AnalysisError::OversizedInput {
                total_frames: metadata.total_frames,
                limit: MAX_TOTAL_FRAMES,
            });
        }

        self.logger.info(&format!(
            "Opened {}x{} video, {} frames declared at {:.2} fps",
            metadata.width, metadata.height, metadata.total_frames, metadata.fps
        ));

        let params = DetectionParams {
            scale_factor: self.settings.scale_factor(),
            min_neighbors: MIN_NEIGHBORS,
            min_size: self.settings.min_face_size,
        };

        let outcome = Self::scan(
            self.reader.as_mut(),
            self.detector.as_mut(),
            self.encoder.as_ref(),
            self.logger.as_mut(),
            &self.settings,
            &metadata,
            &params,
        );
        self.reader.close();
        let state = outcome?;

        let (avg_faces, detection_rate) = if state.frame_count > 0 {
            (
                round2(state.total_faces as f64 / state.frame_count as f64),
                round1(100.0 * state.frames_with_faces as f64 / state.frame_count as f64),
            )
        } else {
            (0.0, 0.0)
        };

        let chart_image = if self.settings.chart && !state.timeline.is_empty() {
            Some(
                self.chart_renderer
                    .render(&state.timeline)
                    .map_err(AnalysisError::runtime)?,
            )
        } else {
            None
        };

        self.logger.info(&format!(
            "Analysis complete: {} faces across {} sampled frames",
            state.total_faces, state.frame_count
        ));

        Ok(AnalysisReport {
            total_faces: state.total_faces,
            frame_count: state.frame_count,
            frames_with_faces: state.frames_with_faces,
            max_faces: state.max_faces,
            avg_faces,
            detection_rate,
            duration_secs: metadata.duration_secs(),
            timeline: state.timeline,
            before_image: state.before_image,
            annotated_image: state.annotated_image,
            chart_image,
        })
    }

    /// Single sequential pass over the frame stream.
    ///
    /// The raw frame index is 1-based and the stride applies to it, so
    /// `frame_skip` 2 samples raw frames 2, 4, 6, and so on. An iterator
    /// that ends before the declared total is treated as end-of-stream.
    fn scan(
        reader: &mut dyn VideoReader,
        detector: &mut dyn FaceDetector,
        encoder: &dyn ImageEncoder,
        logger: &mut dyn PipelineLogger,
        settings: &Settings,
        metadata: &VideoMetadata,
        params: &DetectionParams,
    ) -> Result<ScanState, AnalysisError> {
        let mut state = ScanState::new();
        let mut raw_index = 0usize;

        for item in reader.frames() {
            let frame = item.map_err(AnalysisError::runtime)?;
            raw_index += 1;
            if raw_index % settings.frame_skip != 0 {
                continue;
            }

            let faces = detector
                .detect(&frame, params)
                .map_err(AnalysisError::runtime)?;

            state.timeline.push(faces.len());
            state.frame_count += 1;

            if !faces.is_empty() {
                state.frames_with_faces += 1;
                state.total_faces += faces.len();
                state.max_faces = state.max_faces.max(faces.len());

                // Only the first face-bearing frame is captured; later
                // qualifying frames never override it.
                if state.before_image.is_none() {
                    state.before_image =
                        Some(encoder.encode(&frame).map_err(AnalysisError::runtime)?);
                    if settings.draw_boxes {
                        let annotated = annotate(&frame, &faces);
                        state.annotated_image =
                            Some(encoder.encode(&annotated).map_err(AnalysisError::runtime)?);
                    }
                }
            }

            logger.progress(raw_index, metadata.total_frames);
        }

        Ok(state)
    }
}
