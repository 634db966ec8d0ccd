//! FrameKit - real-time camera frame engine
//!
//! Turns NV21 camera frames into packed RGBA at frame rate, with no heap
//! allocation per frame.
//!
//! # Features
//!
//! - **Convert**: NV21 (4:2:0, VU interleaved) to RGBA, BT.601
//! - **Grayscale**: perceptual luma expanded back to RGBA
//! - **Edges**: Gaussian smoothing plus two-threshold gradient edge extraction
//! - **Boundary**: a handle that marshals integer modes and success flags
//!
//! # Example
//!
//! ```rust
//! use framekit::{FrameProcessor, ProcessingMode};
//!
//! fn main() -> framekit::Result<()> {
//!     let mut processor = FrameProcessor::new();
//!     processor.init(64, 64)?;
//!     processor.set_edge_thresholds(40.0, 120.0);
//!
//!     let input = vec![0u8; 64 * 64 * 3 / 2];
//!     let mut output = vec![0u8; 64 * 64 * 4];
//!     processor.process_frame(&input, &mut output, ProcessingMode::EdgeDetect)?;
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod processing;
pub mod processor;
pub mod types;

// Re-exports for convenience
pub use bridge::ProcessorHandle;
pub use config::ProcessorConfig;
pub use error::{Error, Result};
pub use processor::FrameProcessor;
pub use types::{EdgeThresholds, FrameFormat, ProcessingMode, Resolution, Stats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
