/// Renders a per-sampled-frame face-count timeline to an encoded image.
pub trait ChartRenderer: Send {
    /// Renders the timeline to compressed image bytes. The slice holds one
    /// face count per sampled frame, in sampling order; it is never empty
    /// when this is called.
    fn render(&self, timeline: &[usize]) -> Result<Vec<u8>, Box<dyn std::error::Error>>;
}
