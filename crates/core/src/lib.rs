pub mod chart;
pub mod detection;
pub mod error;
pub mod pipeline;
pub mod shared;
pub mod video;
