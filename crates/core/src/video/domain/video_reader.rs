use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Sequential, finite source of decoded frames.
///
/// Implementations handle I/O details (codec, container format) while the
/// pipeline works with the abstract `Frame` and `VideoMetadata` types.
/// Metadata (frame count, frame rate) is known before iteration begins.
pub trait VideoReader: Send {
    /// Opens a video file and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in decode order.
    ///
    /// The iterator may end before the declared total frame count (for
    /// example when the source is closed out-of-band); callers treat that
    /// as end-of-stream, not an error.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the reader.
    fn close(&mut self);
}
