pub const SEETAFACE_MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";
pub const SEETAFACE_MODEL_URL: &str =
    "https://github.com/atomashpolskiy/rustface/raw/master/model/seeta_fd_frontal_v1.0.bin";

/// Hard ceiling on declared frame count; longer videos are rejected before
/// any frame is read so worst-case latency stays bounded.
pub const MAX_TOTAL_FRAMES: usize = 1000;

/// Fixed neighbor-vote threshold passed to the detector on every call.
pub const MIN_NEIGHBORS: u32 = 5;

pub const MIN_SENSITIVITY: u32 = 1;
pub const MAX_SENSITIVITY: u32 = 10;
pub const DEFAULT_SENSITIVITY: u32 = 5;
pub const DEFAULT_MIN_FACE_SIZE: u32 = 30;

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];

/// RGB color used for bounding boxes, labels, and the timeline trace.
pub const ACCENT_COLOR: [u8; 3] = [206, 147, 108];
