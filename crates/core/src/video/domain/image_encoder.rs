use crate::shared::frame::Frame;

/// Turns an in-memory frame into a compressed byte representation suitable
/// for embedding in a JSON response.
pub trait ImageEncoder: Send {
    fn encode(&self, frame: &Frame) -> Result<Vec<u8>, Box<dyn std::error::Error>>;
}
