pub mod image_encoder;
pub mod video_reader;
