pub mod analysis_report;
pub mod analyze_video_use_case;
pub mod annotator;
pub mod pipeline_logger;
