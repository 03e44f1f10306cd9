use thiserror::Error;

/// Terminal failures of one analysis run.
///
/// There are no partial results: a run either yields a complete report or
/// exactly one of these. None of them is retried.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to open video source: {0}")]
    SourceUnavailable(String),

    #[error("failed to load face detection model: {0}")]
    ModelUnavailable(String),

    #[error("video too long: {total_frames} frames exceeds the {limit}-frame limit")]
    OversizedInput { total_frames: usize, limit: usize },

    #[error("analysis failed: {0}")]
    Runtime(String),
}

impl AnalysisError {
    pub fn runtime(err: Box<dyn std::error::Error>) -> Self {
        Self::Runtime(err.to_string())
    }
}
