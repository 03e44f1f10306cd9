use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facetrace_core::chart::infrastructure::timeline_chart::TimelineChart;
use facetrace_core::detection::domain::face_detector::FaceDetector;
use facetrace_core::detection::infrastructure::seetaface_detector::SeetaFaceDetector;
use facetrace_core::pipeline::analysis_report::AnalysisReport;
use facetrace_core::pipeline::analyze_video_use_case::AnalyzeVideoUseCase;
use facetrace_core::pipeline::pipeline_logger::LogPipelineLogger;
use facetrace_core::shared::constants::{
    MAX_SENSITIVITY, MIN_SENSITIVITY, SEETAFACE_MODEL_NAME, SEETAFACE_MODEL_URL, VIDEO_EXTENSIONS,
};
use facetrace_core::shared::model_resolver;
use facetrace_core::shared::settings::Settings;
use facetrace_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use facetrace_core::video::infrastructure::jpeg_encoder::JpegEncoder;

/// Face detection statistics for videos.
#[derive(Parser)]
#[command(name = "facetrace")]
struct Cli {
    /// Input video file (mp4, avi, or mov).
    input: PathBuf,

    /// Detection sensitivity (1-10). Higher values scan coarser and faster.
    #[arg(long, default_value = "5")]
    sensitivity: u32,

    /// Smallest face edge to report, in pixels.
    #[arg(long, default_value = "30")]
    min_face_size: u32,

    /// Process every Nth frame (1 = every frame).
    #[arg(long, default_value = "1")]
    frame_skip: usize,

    /// Skip drawing bounding boxes on the sample frame.
    #[arg(long)]
    no_boxes: bool,

    /// Skip rendering the face-count timeline chart.
    #[arg(long)]
    no_chart: bool,

    /// Write produced images (before/sample/chart) to this directory.
    #[arg(long)]
    images_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let settings = Settings {
        sensitivity: cli.sensitivity,
        min_face_size: cli.min_face_size,
        frame_skip: cli.frame_skip,
        draw_boxes: !cli.no_boxes,
        chart: !cli.no_chart,
    };

    let detector = build_detector()?;

    let mut use_case = AnalyzeVideoUseCase::new(
        Box::new(FfmpegReader::new()),
        detector,
        Box::new(JpegEncoder::new()),
        Box::new(TimelineChart::new()),
        Box::new(LogPipelineLogger::default()),
        settings,
    );

    let report = use_case.execute(&cli.input)?;

    if let Some(dir) = &cli.images_dir {
        write_images(dir, &report)?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_detector() -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    log::info!("Resolving model: {SEETAFACE_MODEL_NAME}");
    let model_path = model_resolver::resolve(
        SEETAFACE_MODEL_NAME,
        SEETAFACE_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    Ok(Box::new(SeetaFaceDetector::new(&model_path)?))
}

fn write_images(dir: &Path, report: &AnalysisReport) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    if let Some(bytes) = &report.before_image {
        fs::write(dir.join("before.jpg"), bytes)?;
    }
    if let Some(bytes) = &report.annotated_image {
        fs::write(dir.join("sample.jpg"), bytes)?;
    }
    if let Some(bytes) = &report.chart_image {
        fs::write(dir.join("chart.png"), bytes)?;
    }
    log::info!("Images written to {}", dir.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_video(&cli.input) {
        return Err(format!(
            "Unsupported input type, expected one of: {}",
            VIDEO_EXTENSIONS.join(", ")
        )
        .into());
    }
    if !(MIN_SENSITIVITY..=MAX_SENSITIVITY).contains(&cli.sensitivity) {
        return Err(format!(
            "Sensitivity must be between {MIN_SENSITIVITY} and {MAX_SENSITIVITY}, got {}",
            cli.sensitivity
        )
        .into());
    }
    if cli.frame_skip == 0 {
        return Err("Frame skip must be at least 1".into());
    }
    if cli.min_face_size == 0 {
        return Err("Minimum face size must be at least 1 pixel".into());
    }
    Ok(())
}

fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}
