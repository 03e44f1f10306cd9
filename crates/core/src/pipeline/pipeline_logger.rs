/// Cross-cutting logger for analysis progress events.
///
/// Decouples the use case from specific output mechanisms (stdout via the
/// log crate, server tracing, nothing at all) so each caller can observe
/// pipeline behavior without changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report sampled-frame progress against the declared frame total.
    fn progress(&mut self, current: usize, total: usize);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);
}

/// Silent logger that discards all events. Used by the server (which has
/// its own request tracing) and by tests.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger backed by the log crate.
///
/// Progress output is throttled to every `throttle_frames` frames to avoid
/// excessive I/O on large videos.
pub struct LogPipelineLogger {
    throttle_frames: usize,
}

impl LogPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
        }
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        if current % self.throttle_frames != 0 && current != total {
            return;
        }
        if total > 0 {
            let pct = current as f64 / total as f64 * 100.0;
            log::info!("Scanning: {current}/{total} frames ({pct:.1}%)");
        } else {
            log::info!("Scanning: {current} frames");
        }
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.info("hello");
        // No panics = success
    }

    #[test]
    fn test_throttle_is_at_least_one() {
        let logger = LogPipelineLogger::new(0);
        assert_eq!(logger.throttle_frames, 1);
    }

    #[test]
    fn test_default_throttle() {
        let logger = LogPipelineLogger::default();
        assert_eq!(logger.throttle_frames, 10);
    }
}
