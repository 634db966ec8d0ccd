//! Frame processor
//!
//! Owns the reusable working buffers for one frame resolution and runs
//! NV21 -> RGBA conversion followed by the selected processing mode.
//! Buffers are sized once by [`FrameProcessor::init`]; processing a frame
//! never allocates.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::config::ProcessorConfig;
use crate::error::{Error, Result};
use crate::processing::{self, alloc_plane, convert_colorspace, EdgeWorkspace};
use crate::types::{EdgeThresholds, FrameFormat, ProcessingMode, Resolution, Stats};

/// Working memory for one resolution, allocated and dropped as a unit
#[derive(Debug)]
struct FrameBuffers {
    resolution: Resolution,
    /// Raw NV21 copy of the current input
    source: Vec<u8>,
    /// RGBA version of the current frame
    converted: Vec<u8>,
    /// Intensity plane
    luma: Vec<u8>,
    /// Binary edge map
    edges: Vec<u8>,
    /// Final RGBA result before copy-out
    scratch: Vec<u8>,
    workspace: EdgeWorkspace,
}

impl FrameBuffers {
    fn allocate(resolution: Resolution) -> Result<Self> {
        let pixels = (resolution.width as usize)
            .checked_mul(resolution.height as usize)
            .filter(|p| p.checked_mul(4).is_some())
            .ok_or_else(|| Error::Allocation(format!("{} exceeds addressable memory", resolution)))?;

        Ok(Self {
            resolution,
            source: alloc_plane(pixels * 3 / 2)?,
            converted: alloc_plane(pixels * 4)?,
            luma: alloc_plane(pixels)?,
            edges: alloc_plane(pixels)?,
            scratch: alloc_plane(pixels * 4)?,
            workspace: EdgeWorkspace::new(resolution)?,
        })
    }

    fn input_size(&self) -> usize {
        FrameFormat::Nv21.frame_size(self.resolution)
    }

    fn output_size(&self) -> usize {
        FrameFormat::Rgba.frame_size(self.resolution)
    }

    fn run(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        mode: ProcessingMode,
        thresholds: EdgeThresholds,
    ) -> Result<()> {
        let resolution = self.resolution;
        let input_size = self.input_size();
        let output_size = self.output_size();

        // Every mode starts from the RGBA representation
        self.source.copy_from_slice(&input[..input_size]);
        convert_colorspace(
            &self.source,
            FrameFormat::Nv21,
            &mut self.converted,
            FrameFormat::Rgba,
            resolution,
        )?;

        let result = match mode {
            ProcessingMode::PassThrough => &self.converted,
            ProcessingMode::Grayscale => {
                convert_colorspace(
                    &self.converted,
                    FrameFormat::Rgba,
                    &mut self.luma,
                    FrameFormat::Gray,
                    resolution,
                )?;
                convert_colorspace(
                    &self.luma,
                    FrameFormat::Gray,
                    &mut self.scratch,
                    FrameFormat::Rgba,
                    resolution,
                )?;
                &self.scratch
            }
            ProcessingMode::EdgeDetect => {
                convert_colorspace(
                    &self.converted,
                    FrameFormat::Rgba,
                    &mut self.luma,
                    FrameFormat::Gray,
                    resolution,
                )?;
                let count = processing::edge_map(
                    &mut self.luma,
                    &mut self.edges,
                    &mut self.workspace,
                    thresholds,
                )?;
                tracing::trace!("Edge map: {} of {} pixels", count, resolution.pixels());
                convert_colorspace(
                    &self.edges,
                    FrameFormat::Gray,
                    &mut self.scratch,
                    FrameFormat::Rgba,
                    resolution,
                )?;
                &self.scratch
            }
        };

        convert_colorspace(
            result,
            FrameFormat::Rgba,
            &mut output[..output_size],
            FrameFormat::Rgba,
            resolution,
        )?;

        Ok(())
    }
}

/// Single-threaded frame processor
///
/// Not internally synchronized: callers serialize `init`, `process_frame`,
/// `set_edge_thresholds` and `release` on one instance.
#[derive(Debug)]
pub struct FrameProcessor {
    thresholds: EdgeThresholds,
    buffers: Option<FrameBuffers>,
    stats: Stats,
}

impl FrameProcessor {
    /// Create an empty processor with default thresholds
    pub fn new() -> Self {
        tracing::debug!("FrameProcessor created");
        Self {
            thresholds: EdgeThresholds::default(),
            buffers: None,
            stats: Stats::default(),
        }
    }

    /// Create and initialize a processor from configuration
    pub fn from_config(config: &ProcessorConfig) -> Result<Self> {
        let width = i32::try_from(config.resolution.width).map_err(|_| Error::InvalidDimensions {
            width: config.resolution.width as i64,
            height: config.resolution.height as i64,
        })?;
        let height =
            i32::try_from(config.resolution.height).map_err(|_| Error::InvalidDimensions {
                width: config.resolution.width as i64,
                height: config.resolution.height as i64,
            })?;

        let mut processor = Self::new();
        processor.set_edge_thresholds(config.thresholds.low, config.thresholds.high);
        processor.init(width, height)?;
        Ok(processor)
    }

    /// Allocate buffers for `width` x `height`, replacing any previous state
    ///
    /// Invalid dimensions leave the processor untouched. An allocation
    /// failure leaves it released.
    pub fn init(&mut self, width: i32, height: i32) -> Result<()> {
        let resolution = Resolution::from_dims(width, height).inspect_err(|e| {
            tracing::error!("{}", e);
        })?;

        self.release();

        let buffers = FrameBuffers::allocate(resolution).inspect_err(|e| {
            tracing::error!("Failed to initialize {}: {}", resolution, e);
        })?;
        self.buffers = Some(buffers);
        self.stats = Stats::default();

        tracing::info!("Initialized with dimensions: {}", resolution);
        Ok(())
    }

    /// Free all buffers. Calling it again is a no-op.
    pub fn release(&mut self) {
        if let Some(buffers) = self.buffers.take() {
            tracing::info!("Resources released ({})", buffers.resolution);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.buffers.is_some()
    }

    /// Dimensions fixed by the last successful `init`
    pub fn resolution(&self) -> Option<Resolution> {
        self.buffers.as_ref().map(|b| b.resolution)
    }

    pub fn edge_thresholds(&self) -> EdgeThresholds {
        self.thresholds
    }

    /// Store new edge thresholds for the next edge-detection frame
    ///
    /// Values are kept as given, in any order.
    pub fn set_edge_thresholds(&mut self, low: f64, high: f64) {
        self.thresholds = EdgeThresholds::new(low, high);
        tracing::info!("Edge thresholds updated: {}", self.thresholds);
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Check per-call dimensions against the initialized ones
    pub fn check_dimensions(&self, width: i32, height: i32) -> Result<()> {
        let expected = self.resolution().ok_or(Error::NotInitialized)?;
        let matches = i64::from(width) == i64::from(expected.width)
            && i64::from(height) == i64::from(expected.height);
        if !matches {
            let err = Error::DimensionMismatch {
                expected,
                actual: Resolution::new(width.max(0) as u32, height.max(0) as u32),
            };
            tracing::error!("{} (called with {}x{})", err, width, height);
            return Err(err);
        }
        Ok(())
    }

    /// Convert one NV21 frame and write the RGBA result for `mode` into `output`
    ///
    /// On failure `output` holds unspecified data; the processor stays usable.
    /// A panic inside a kernel is returned as [`Error::Processing`], though the
    /// panic hook still reports it (see [`std::panic::set_hook`]).
    pub fn process_frame(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        mode: ProcessingMode,
    ) -> Result<()> {
        let result = self.process_frame_inner(input, output, mode);
        match &result {
            Ok(()) => self.stats.frames_processed += 1,
            Err(e) => {
                self.stats.frames_failed += 1;
                tracing::error!("Frame processing failed: {}", e);
            }
        }
        result
    }

    /// Process a frame described in boundary terms: the caller's claimed
    /// dimensions and the integer mode tag
    ///
    /// A dimension mismatch or unknown tag is counted as a failed frame.
    pub fn process_tagged(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        width: i32,
        height: i32,
        mode: i32,
    ) -> Result<()> {
        let checked = self.check_dimensions(width, height).and_then(|()| {
            ProcessingMode::from_i32(mode).inspect_err(|e| tracing::error!("{}", e))
        });
        match checked {
            Ok(mode) => self.process_frame(input, output, mode),
            Err(e) => {
                self.stats.frames_failed += 1;
                Err(e)
            }
        }
    }

    fn process_frame_inner(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        mode: ProcessingMode,
    ) -> Result<()> {
        let thresholds = self.thresholds;
        let buffers = self.buffers.as_mut().ok_or(Error::NotInitialized)?;

        if input.is_empty() {
            return Err(Error::EmptyBuffer("input"));
        }
        if output.is_empty() {
            return Err(Error::EmptyBuffer("output"));
        }

        let expected_input = buffers.input_size();
        if input.len() < expected_input {
            return Err(Error::InputTooSmall {
                expected: expected_input,
                actual: input.len(),
            });
        }
        let expected_output = buffers.output_size();
        if output.len() < expected_output {
            return Err(Error::OutputTooSmall {
                expected: expected_output,
                actual: output.len(),
            });
        }

        let start = Instant::now();
        guarded(|| buffers.run(input, output, mode, thresholds))?;

        let elapsed = start.elapsed();
        self.stats.last_frame_us = elapsed.as_micros() as u64;
        tracing::debug!("Processed {} frame in {:?}", mode, elapsed);
        Ok(())
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameProcessor {
    fn drop(&mut self) {
        self.release();
    }
}

/// Run a kernel, reporting a panic as [`Error::Processing`]
///
/// Only the unwind is caught. The process panic hook still runs first, and
/// the default hook prints the message to stderr; embedders that need a
/// silent frame path install their own hook with [`std::panic::set_hook`].
fn guarded<F>(kernel: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    panic::catch_unwind(AssertUnwindSafe(kernel))
        .map_err(|payload| Error::Processing(panic_message(payload.as_ref())))?
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("kernel panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("kernel panicked: {}", msg)
    } else {
        "kernel panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::convert::ZERO_FRAME_RGBA;
    use crate::processing::edges::{EDGE, NON_EDGE};
    use crate::processing::test_alloc;

    fn ready(width: i32, height: i32) -> FrameProcessor {
        let mut processor = FrameProcessor::new();
        processor.init(width, height).unwrap();
        processor
    }

    fn frame_sizes(width: u32, height: u32) -> (usize, usize) {
        let res = Resolution::new(width, height);
        (FrameFormat::Nv21.frame_size(res), FrameFormat::Rgba.frame_size(res))
    }

    /// NV21 frame with a vertical luma step and neutral chroma
    fn step_frame(width: usize, height: usize, split: usize) -> Vec<u8> {
        let mut frame: Vec<u8> = (0..width * height)
            .map(|i| if i % width < split { 30 } else { 220 })
            .collect();
        frame.resize(width * height * 3 / 2, 128);
        frame
    }

    /// NV21 frame with varied luma and chroma
    fn colorful_frame(width: usize, height: usize) -> Vec<u8> {
        (0..width * height * 3 / 2)
            .map(|i| ((i * 31 + i / 7) % 256) as u8)
            .collect()
    }

    #[test]
    fn test_default_thresholds() {
        let processor = FrameProcessor::new();
        assert_eq!(processor.edge_thresholds(), EdgeThresholds::new(50.0, 150.0));
        assert!(!processor.is_initialized());
        assert_eq!(processor.resolution(), None);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut processor = ready(8, 8);
        processor.release();
        assert!(!processor.is_initialized());
        processor.release();
        assert!(!processor.is_initialized());

        let mut output = vec![0u8; 256];
        assert!(matches!(
            processor.process_frame(&[0u8; 96], &mut output, ProcessingMode::PassThrough),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_reinit_replaces_buffers() {
        let mut processor = ready(16, 8);
        processor.init(4, 6).unwrap();

        assert_eq!(processor.resolution(), Some(Resolution::new(4, 6)));
        let buffers = processor.buffers.as_ref().unwrap();
        assert_eq!(buffers.source.len(), 36);
        assert_eq!(buffers.converted.len(), 96);
        assert_eq!(buffers.luma.len(), 24);
        assert_eq!(buffers.edges.len(), 24);
        assert_eq!(buffers.scratch.len(), 96);
        assert_eq!(buffers.workspace.resolution(), Resolution::new(4, 6));

        let (input_size, output_size) = frame_sizes(4, 6);
        let mut output = vec![0u8; output_size];
        processor
            .process_frame(&vec![0u8; input_size], &mut output, ProcessingMode::EdgeDetect)
            .unwrap();
    }

    #[test]
    fn test_init_after_release() {
        let mut processor = ready(8, 8);
        processor.release();
        processor.init(10, 4).unwrap();
        assert_eq!(processor.resolution(), Some(Resolution::new(10, 4)));
    }

    #[test]
    fn test_invalid_init_leaves_state_untouched() {
        let mut processor = FrameProcessor::new();
        assert!(matches!(
            processor.init(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(!processor.is_initialized());

        let mut output = vec![0u8; 16384];
        assert!(matches!(
            processor.process_frame(&[0u8; 6144], &mut output, ProcessingMode::PassThrough),
            Err(Error::NotInitialized)
        ));

        // a ready processor keeps its buffers
        let mut processor = ready(8, 8);
        assert!(processor.init(-4, 8).is_err());
        assert_eq!(processor.resolution(), Some(Resolution::new(8, 8)));
    }

    #[test]
    fn test_allocation_overflow_leaves_released() {
        let mut processor = ready(8, 8);
        let result = processor.init(i32::MAX, i32::MAX);
        if cfg!(target_pointer_width = "64") {
            assert!(matches!(result, Err(Error::Allocation(_))));
            assert!(!processor.is_initialized());
        }
    }

    #[test]
    fn test_partial_allocation_failure_leaves_released() {
        let mut processor = ready(8, 8);
        let (input_size, output_size) = frame_sizes(16, 16);

        // five frame planes plus four edge workspace planes
        for granted in 0..9 {
            test_alloc::limit(granted);
            let result = processor.init(16, 16);
            test_alloc::unlimited();

            assert!(
                matches!(result, Err(Error::Allocation(_))),
                "{} planes granted: {:?}",
                granted,
                result
            );
            assert!(!processor.is_initialized());
            let mut output = vec![0u8; output_size];
            assert!(matches!(
                processor.process_frame(&vec![0u8; input_size], &mut output, ProcessingMode::EdgeDetect),
                Err(Error::NotInitialized)
            ));
            processor.init(8, 8).unwrap();
        }

        test_alloc::limit(9);
        let result = processor.init(16, 16);
        test_alloc::unlimited();
        result.unwrap();

        let mut output = vec![0u8; output_size];
        processor
            .process_frame(&vec![0u8; input_size], &mut output, ProcessingMode::EdgeDetect)
            .unwrap();
    }

    #[test]
    fn test_kernel_panic_becomes_processing_error() {
        match guarded(|| panic!("row {} out of range", 3)) {
            Err(Error::Processing(msg)) => assert!(msg.contains("row 3 out of range"), "{}", msg),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            guarded(|| Err(Error::NotInitialized)),
            Err(Error::NotInitialized)
        ));
        guarded(|| Ok(())).unwrap();
    }

    #[test]
    fn test_tagged_rejections_count_as_failures() {
        let mut processor = ready(8, 8);
        let (input_size, output_size) = frame_sizes(8, 8);
        let input = vec![0u8; input_size];
        let mut output = vec![0xAAu8; output_size];

        assert!(matches!(
            processor.process_tagged(&input, &mut output, 8, 16, 0),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            processor.process_tagged(&input, &mut output, 8, 8, 3),
            Err(Error::UnknownMode(3))
        ));
        // nothing was written for either rejection
        assert!(output.iter().all(|&b| b == 0xAA));
        assert_eq!(processor.stats().frames_failed, 2);

        processor
            .process_tagged(&input, &mut output, 8, 8, 0)
            .unwrap();
        assert_eq!(&output[..4], ZERO_FRAME_RGBA);
        assert_eq!(processor.stats().frames_processed, 1);
    }

    #[test]
    fn test_undersized_input_rejected() {
        let mut processor = ready(64, 64);
        let (input_size, output_size) = frame_sizes(64, 64);
        let mut output = vec![0xAAu8; output_size];

        let result = processor.process_frame(
            &vec![0u8; input_size - 1],
            &mut output,
            ProcessingMode::PassThrough,
        );
        assert!(matches!(
            result,
            Err(Error::InputTooSmall { expected: 6144, actual: 6143 })
        ));
        assert!(output.iter().all(|&b| b == 0xAA));
        assert_eq!(processor.stats().frames_failed, 1);
        assert!(processor.is_initialized());
    }

    #[test]
    fn test_undersized_and_empty_output_rejected() {
        let mut processor = ready(8, 8);
        let (input_size, output_size) = frame_sizes(8, 8);
        let input = vec![0u8; input_size];

        let mut short = vec![0u8; output_size - 4];
        assert!(matches!(
            processor.process_frame(&input, &mut short, ProcessingMode::Grayscale),
            Err(Error::OutputTooSmall { expected: 256, actual: 252 })
        ));

        let mut empty: Vec<u8> = Vec::new();
        assert!(matches!(
            processor.process_frame(&input, &mut empty, ProcessingMode::Grayscale),
            Err(Error::EmptyBuffer("output"))
        ));

        let mut output = vec![0u8; output_size];
        assert!(matches!(
            processor.process_frame(&[], &mut output, ProcessingMode::Grayscale),
            Err(Error::EmptyBuffer("input"))
        ));
    }

    #[test]
    fn test_zero_frame_pass_through() {
        let mut processor = ready(64, 64);
        let input = vec![0u8; 6144];
        let mut output = vec![0u8; 16384];
        processor
            .process_frame(&input, &mut output, ProcessingMode::PassThrough)
            .unwrap();

        assert_eq!(output.len(), 16384);
        for px in output.chunks_exact(4) {
            assert_eq!(px, ZERO_FRAME_RGBA);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_uniform_frame_pass_through() {
        // Y=235 with neutral chroma is white
        let mut processor = ready(6, 4);
        let mut input = vec![235u8; 24];
        input.resize(36, 128);
        let mut output = vec![0u8; 96];
        processor
            .process_frame(&input, &mut output, ProcessingMode::PassThrough)
            .unwrap();
        assert!(output.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
    }

    #[test]
    fn test_larger_buffers_accepted() {
        let mut processor = ready(4, 4);
        let mut output = vec![9u8; 100];
        processor
            .process_frame(&[0u8; 40], &mut output, ProcessingMode::PassThrough)
            .unwrap();
        assert_eq!(&output[..4], ZERO_FRAME_RGBA);
        // bytes past the frame are left alone
        assert!(output[64..].iter().all(|&b| b == 9));
    }

    #[test]
    fn test_grayscale_is_achromatic() {
        let mut processor = ready(32, 16);
        let input = colorful_frame(32, 16);
        let mut output = vec![0u8; 32 * 16 * 4];
        processor
            .process_frame(&input, &mut output, ProcessingMode::Grayscale)
            .unwrap();

        for px in output.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
        // the colourful input is not flattened to a single value
        assert!(output.chunks_exact(4).any(|px| px[0] != output[0]));
    }

    #[test]
    fn test_edge_map_is_binary() {
        let mut processor = ready(32, 32);
        let input = colorful_frame(32, 32);
        let mut output = vec![0u8; 32 * 32 * 4];
        processor.set_edge_thresholds(10.0, 40.0);
        processor
            .process_frame(&input, &mut output, ProcessingMode::EdgeDetect)
            .unwrap();

        let edges = &processor.buffers.as_ref().unwrap().edges;
        assert!(edges.iter().all(|&p| p == EDGE || p == NON_EDGE));
        for (px, &e) in output.chunks_exact(4).zip(edges.iter()) {
            assert_eq!(px, [e, e, e, 255]);
        }
    }

    #[test]
    fn test_step_frame_produces_white_edges() {
        let mut processor = ready(32, 16);
        let input = step_frame(32, 16, 16);
        let mut output = vec![0u8; 32 * 16 * 4];
        processor
            .process_frame(&input, &mut output, ProcessingMode::EdgeDetect)
            .unwrap();

        let white = output.chunks_exact(4).filter(|px| px[0] == 255).count();
        assert!(white >= 16, "expected an edge per row, got {}", white);
        // far from the step everything stays black
        assert_eq!(&output[..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_raising_thresholds_never_adds_edges() {
        let mut processor = ready(32, 32);
        let input = step_frame(32, 32, 12);
        let mut output = vec![0u8; 32 * 32 * 4];

        let mut previous = usize::MAX;
        for step in 0..10 {
            let low = 20.0 + step as f64 * 60.0;
            processor.set_edge_thresholds(low, low * 2.0);
            processor
                .process_frame(&input, &mut output, ProcessingMode::EdgeDetect)
                .unwrap();
            let count = output.chunks_exact(4).filter(|px| px[0] == 255).count();
            assert!(count <= previous, "{} edges after {}", count, previous);
            previous = count;
        }
        assert_eq!(previous, 0, "thresholds above any gradient leave no edges");
    }

    #[test]
    fn test_thresholds_set_before_init_survive() {
        let mut processor = FrameProcessor::new();
        processor.set_edge_thresholds(200.0, 10.0);
        processor.init(8, 8).unwrap();
        assert_eq!(processor.edge_thresholds(), EdgeThresholds::new(200.0, 10.0));
    }

    #[test]
    fn test_odd_dimensions_fail_without_breaking_state() {
        let mut processor = ready(5, 4);
        let (input_size, output_size) = frame_sizes(5, 4);
        let mut output = vec![0u8; output_size];
        assert!(matches!(
            processor.process_frame(&vec![0u8; input_size], &mut output, ProcessingMode::PassThrough),
            Err(Error::Processing(_))
        ));
        assert!(processor.is_initialized());

        processor.init(4, 4).unwrap();
        let mut output = vec![0u8; 64];
        processor
            .process_frame(&[0u8; 24], &mut output, ProcessingMode::PassThrough)
            .unwrap();
    }

    #[test]
    fn test_check_dimensions() {
        let processor = ready(64, 48);
        processor.check_dimensions(64, 48).unwrap();
        assert!(matches!(
            processor.check_dimensions(48, 64),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(processor.check_dimensions(-64, 48).is_err());
        assert!(matches!(
            FrameProcessor::new().check_dimensions(64, 48),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_stats() {
        let mut processor = ready(4, 4);
        let mut output = vec![0u8; 64];
        processor
            .process_frame(&[0u8; 24], &mut output, ProcessingMode::Grayscale)
            .unwrap();
        let _ = processor.process_frame(&[0u8; 2], &mut output, ProcessingMode::Grayscale);
        assert_eq!(processor.stats().frames_processed, 1);
        assert_eq!(processor.stats().frames_failed, 1);

        processor.init(4, 4).unwrap();
        assert_eq!(processor.stats().frames_processed, 0);
    }

    #[test]
    fn test_from_config() {
        let config = ProcessorConfig::default()
            .with_resolution(16, 8)
            .with_thresholds(30.0, 90.0);
        let processor = FrameProcessor::from_config(&config).unwrap();
        assert_eq!(processor.resolution(), Some(Resolution::new(16, 8)));
        assert_eq!(processor.edge_thresholds(), EdgeThresholds::new(30.0, 90.0));

        let config = ProcessorConfig::default().with_resolution(0, 8);
        assert!(FrameProcessor::from_config(&config).is_err());
    }
}
