//! Frame processing kernels
//!
//! Provides the per-pixel stages the frame processor chains together:
//! - NV21 to RGBA colorspace conversion
//! - Perceptual grayscale reduction and expansion
//! - Gaussian smoothing and two-threshold edge extraction
//!
//! Kernels operate on caller-provided slices only.

pub mod blur;
pub mod convert;
pub mod edges;

pub use convert::{convert_colorspace, gray_to_rgba, nv21_to_rgba, rgba_to_gray};
pub use edges::{detect_edges, EdgeWorkspace};

use crate::error::{Error, Result};
use crate::types::EdgeThresholds;

/// Smooth `luma` in place, then write its binary edge map into `edges`
///
/// Returns the number of edge pixels.
pub fn edge_map(
    luma: &mut [u8],
    edges: &mut [u8],
    workspace: &mut EdgeWorkspace,
    thresholds: EdgeThresholds,
) -> Result<usize> {
    let resolution = workspace.resolution();
    blur::gaussian_blur(luma, workspace.blur_scratch(), resolution, blur::SIGMA)?;
    detect_edges(luma, edges, workspace, thresholds)
}

/// Allocate a zeroed plane, reporting allocator failure instead of aborting
pub(crate) fn alloc_plane<T: Copy + Default>(len: usize) -> Result<Vec<T>> {
    let mut plane = reserve_plane(len)?;
    plane.resize(len, T::default());
    Ok(plane)
}

/// Reserve room for exactly `len` elements without initializing them
pub(crate) fn reserve_plane<T>(len: usize) -> Result<Vec<T>> {
    let failure = |reason: String| {
        Error::Allocation(format!(
            "{} x {} bytes: {}",
            len,
            std::mem::size_of::<T>(),
            reason
        ))
    };

    #[cfg(test)]
    {
        if test_alloc::exhausted() {
            return Err(failure("allocation budget exhausted".to_string()));
        }
    }

    let mut plane = Vec::new();
    plane
        .try_reserve_exact(len)
        .map_err(|e| failure(e.to_string()))?;
    Ok(plane)
}
