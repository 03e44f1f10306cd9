pub mod seetaface_detector;
