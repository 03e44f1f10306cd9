//! Request handlers.

use std::path::Path;

use axum::extract::Multipart;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use facetrace_core::chart::infrastructure::timeline_chart::TimelineChart;
use facetrace_core::detection::infrastructure::seetaface_detector::SeetaFaceDetector;
use facetrace_core::error::AnalysisError;
use facetrace_core::pipeline::analysis_report::AnalysisReport;
use facetrace_core::pipeline::analyze_video_use_case::AnalyzeVideoUseCase;
use facetrace_core::pipeline::pipeline_logger::NullPipelineLogger;
use facetrace_core::shared::constants::{
    SEETAFACE_MODEL_NAME, SEETAFACE_MODEL_URL, VIDEO_EXTENSIONS,
};
use facetrace_core::shared::model_resolver;
use facetrace_core::shared::settings::Settings;
use facetrace_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use facetrace_core::video::infrastructure::jpeg_encoder::JpegEncoder;

use crate::error::{ApiError, ApiResult};

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Analysis response, mirroring the upload form's expectations.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub total_faces: usize,
    pub avg_faces: f64,
    pub frame_count: usize,
    pub detection_rate: f64,
    pub max_faces: usize,
    pub frames_with_faces: usize,
    pub duration: String,
    pub timeline: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_frame: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_frame: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_frame: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    pub timestamp: String,
}

/// `POST /analyze` — multipart upload with a `video` file part and an
/// optional `settings` JSON part.
pub async fn analyze(mut multipart: Multipart) -> ApiResult<Json<AnalyzeResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut settings = Settings::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("video") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    return Err(ApiError::bad_request("No file selected"));
                }
                if !has_video_extension(&filename) {
                    return Err(ApiError::bad_request(format!(
                        "Unsupported file type, expected one of: {}",
                        VIDEO_EXTENSIONS.join(", ")
                    )));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
                upload = Some((filename, bytes.to_vec()));
            }
            Some("settings") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read settings: {e}")))?;
                settings = serde_json::from_str(&text)
                    .map_err(|e| ApiError::bad_request(format!("Invalid settings: {e}")))?;
            }
            _ => {}
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| ApiError::bad_request("No video part in request"))?;
    settings.validate().map_err(ApiError::bad_request)?;

    info!(file = %filename, size = bytes.len(), "Received upload");

    let report = tokio::task::spawn_blocking(move || run_analysis(&filename, &bytes, settings))
        .await
        .map_err(|e| ApiError::internal(format!("Analysis task failed: {e}")))??;

    Ok(Json(to_response(report)))
}

/// Runs one analysis on a blocking worker. The uploaded bytes are staged in
/// a named temp file whose guard deletes it on every exit path.
fn run_analysis(filename: &str, bytes: &[u8], settings: Settings) -> ApiResult<AnalysisReport> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("mp4");
    let temp = tempfile::Builder::new()
        .prefix("facetrace-upload-")
        .suffix(&format!(".{extension}"))
        .tempfile()
        .map_err(|e| ApiError::internal(format!("Failed to stage upload: {e}")))?;
    std::fs::write(temp.path(), bytes)
        .map_err(|e| ApiError::internal(format!("Failed to stage upload: {e}")))?;

    let model_path =
        model_resolver::resolve(SEETAFACE_MODEL_NAME, SEETAFACE_MODEL_URL, None, None)
            .map_err(|e| AnalysisError::ModelUnavailable(e.to_string()))
            .map_err(ApiError::from)?;
    let detector = SeetaFaceDetector::new(&model_path)
        .map_err(|e| AnalysisError::ModelUnavailable(e.to_string()))
        .map_err(ApiError::from)?;

    let mut use_case = AnalyzeVideoUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(detector),
        Box::new(JpegEncoder::new()),
        Box::new(TimelineChart::new()),
        Box::new(NullPipelineLogger),
        settings,
    );

    Ok(use_case.execute(temp.path())?)
}

fn has_video_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Renders the pre-rounded duration with at least one and at most two
/// decimals, so whole seconds come out as "10.0s" rather than "10s".
fn format_duration(secs: f64) -> String {
    let fixed = format!("{secs:.2}");
    let trimmed = fixed.strip_suffix('0').unwrap_or(&fixed);
    format!("{trimmed}s")
}

fn to_response(report: AnalysisReport) -> AnalyzeResponse {
    let before_frame = report.before_image.as_deref().map(|b| BASE64.encode(b));
    let sample_frame = report.annotated_image.as_deref().map(|b| BASE64.encode(b));
    let chart = report.chart_image.as_deref().map(|b| BASE64.encode(b));

    AnalyzeResponse {
        total_faces: report.total_faces,
        avg_faces: report.avg_faces,
        frame_count: report.frame_count,
        detection_rate: report.detection_rate,
        max_faces: report.max_faces,
        frames_with_faces: report.frames_with_faces,
        duration: format_duration(report.duration_secs),
        timeline: report.timeline,
        before_frame,
        // after is the annotated sample, not a second capture
        after_frame: sample_frame.clone(),
        sample_frame,
        chart,
        timestamp: Utc::now().to_rfc3339(),
    }
}
