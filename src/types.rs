//! Common types used throughout FrameKit

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Frame resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    // Common camera preview resolutions
    pub const QVGA: Self = Self::new(320, 240);
    pub const VGA: Self = Self::new(640, 480);
    pub const HD_720P: Self = Self::new(1280, 720);
    pub const FHD_1080P: Self = Self::new(1920, 1080);

    /// Validate signed dimensions as they arrive from a caller
    pub fn from_dims(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self::new(width as u32, height as u32))
    }

    /// Calculate total pixels
    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Both dimensions divisible by two (required for 4:2:0 chroma)
    pub fn is_even(&self) -> bool {
        self.width % 2 == 0 && self.height % 2 == 0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::VGA
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel layouts handled by the frame processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameFormat {
    /// NV21 - Y plane + interleaved VU plane, 4:2:0 (Android camera default)
    Nv21,
    /// RGBA - 32-bit packed, alpha last
    Rgba,
    /// GRAY8 - single 8-bit intensity channel
    Gray,
}

impl FrameFormat {
    /// Exact byte size of one frame in this format
    pub fn frame_size(&self, resolution: Resolution) -> usize {
        let pixels = resolution.pixels();
        match self {
            FrameFormat::Nv21 => pixels * 3 / 2,
            FrameFormat::Rgba => pixels * 4,
            FrameFormat::Gray => pixels,
        }
    }
}

/// Processing mode applied to each frame
///
/// Crosses the call boundary as an integer tag: 0 = pass-through,
/// 1 = grayscale, 2 = edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProcessingMode {
    /// Converted camera colors, unmodified
    #[default]
    #[serde(rename = "passthrough")]
    PassThrough,
    /// Perceptual luma expanded back to RGBA
    #[serde(rename = "grayscale")]
    Grayscale,
    /// White edges on black
    #[serde(rename = "edges")]
    EdgeDetect,
}

impl ProcessingMode {
    pub const ALL: [Self; 3] = [Self::PassThrough, Self::Grayscale, Self::EdgeDetect];

    /// Convert the boundary integer tag, rejecting unknown values
    pub fn from_i32(tag: i32) -> Result<Self> {
        match tag {
            0 => Ok(Self::PassThrough),
            1 => Ok(Self::Grayscale),
            2 => Ok(Self::EdgeDetect),
            other => Err(Error::UnknownMode(other)),
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::PassThrough => 0,
            Self::Grayscale => 1,
            Self::EdgeDetect => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PassThrough => "passthrough",
            Self::Grayscale => "grayscale",
            Self::EdgeDetect => "edges",
        }
    }
}

impl std::fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ProcessingMode {
    type Error = Error;

    fn try_from(tag: i32) -> Result<Self> {
        Self::from_i32(tag)
    }
}

/// Low/high hysteresis thresholds for edge detection
///
/// Stored exactly as given; no ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeThresholds {
    pub low: f64,
    pub high: f64,
}

impl EdgeThresholds {
    pub const DEFAULT_LOW: f64 = 50.0;
    pub const DEFAULT_HIGH: f64 = 150.0;

    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Integer gradient bounds used by hysteresis, swapped if out of order
    pub(crate) fn gradient_bounds(&self) -> (i32, i32) {
        let (low, high) = if self.low > self.high {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        };
        (floor_to_i32(low), floor_to_i32(high))
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }
}

impl std::fmt::Display for EdgeThresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} / {:.1}", self.low, self.high)
    }
}

fn floor_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    // `as` saturates at the i32 bounds
    value.floor() as i32
}

/// Per-processor statistics
#[derive(Debug, Clone, Default)]
pub struct Stats {
    /// Frames that completed successfully
    pub frames_processed: u64,
    /// Frames rejected or failed
    pub frames_failed: u64,
    /// Wall time of the last successful frame in microseconds
    pub last_frame_us: u64,
}
