//! Boundary handle for foreign callers
//!
//! A foreign layer (JNI, C ABI, ...) talks in primitive integers, raw byte
//! buffers and success flags. [`ProcessorHandle`] owns the single processor
//! such a layer drives across calls and maps every [`Result`] to a `bool`,
//! logging the reason at the point of failure.
//!
//! [`Result`]: crate::error::Result

use parking_lot::Mutex;

use crate::processor::FrameProcessor;
use crate::types::{EdgeThresholds, Resolution, Stats};

/// Owner of the one long-lived processor behind a call boundary
///
/// The lock only keeps the slot itself sound; callers are still expected to
/// issue calls from one processing thread.
#[derive(Debug, Default)]
pub struct ProcessorHandle {
    slot: Mutex<Option<FrameProcessor>>,
    /// Thresholds set on the live processor, carried over by a re-`init`;
    /// forgotten whenever the slot ends up empty
    thresholds: Mutex<Option<EdgeThresholds>>,
}

impl ProcessorHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing processor with a fresh one of the given size
    ///
    /// Thresholds set on the previous processor carry over. On failure the
    /// slot is left empty.
    pub fn init(&self, width: i32, height: i32) -> bool {
        tracing::info!("init called: {}x{}", width, height);
        let mut slot = self.slot.lock();
        // Old buffers go before the new ones are allocated
        *slot = None;

        let mut processor = FrameProcessor::new();
        if let Some(t) = *self.thresholds.lock() {
            processor.set_edge_thresholds(t.low, t.high);
        }
        match processor.init(width, height) {
            Ok(()) => {
                *slot = Some(processor);
                tracing::info!("Processor initialized successfully");
                true
            }
            Err(e) => {
                *self.thresholds.lock() = None;
                tracing::error!("Failed to initialize processor: {}", e);
                false
            }
        }
    }

    /// Process one frame; `mode` is the integer tag (0, 1, 2)
    pub fn process_frame(
        &self,
        input: &[u8],
        output: &mut [u8],
        width: i32,
        height: i32,
        mode: i32,
    ) -> bool {
        let mut slot = self.slot.lock();
        let Some(processor) = slot.as_mut() else {
            tracing::error!("Processor not initialized");
            return false;
        };

        processor
            .process_tagged(input, output, width, height, mode)
            .is_ok()
    }

    /// Update edge thresholds; ignored with an error log when no processor exists
    pub fn set_edge_thresholds(&self, low: f64, high: f64) {
        let mut slot = self.slot.lock();
        match slot.as_mut() {
            Some(processor) => {
                processor.set_edge_thresholds(low, high);
                *self.thresholds.lock() = Some(EdgeThresholds::new(low, high));
            }
            None => tracing::error!("Cannot set thresholds: processor not initialized"),
        }
    }

    /// Drop the processor and its buffers. Safe to call repeatedly.
    pub fn release(&self) {
        tracing::info!("release called");
        let mut slot = self.slot.lock();
        *self.thresholds.lock() = None;
        if slot.take().is_some() {
            tracing::info!("Processor released");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.lock().is_some()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.slot.lock().as_ref().and_then(|p| p.resolution())
    }

    pub fn edge_thresholds(&self) -> Option<EdgeThresholds> {
        self.slot.lock().as_ref().map(|p| p.edge_thresholds())
    }

    /// Counters of the live processor
    pub fn stats(&self) -> Option<Stats> {
        self.slot.lock().as_ref().map(|p| p.stats().clone())
    }
}
