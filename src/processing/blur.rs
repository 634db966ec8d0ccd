//! Separable Gaussian smoothing on 8-bit planes

use crate::error::{Error, Result};
use crate::types::Resolution;

/// Kernel taps used by the edge pipeline
pub const KERNEL_SIZE: usize = 5;
/// Standard deviation used by the edge pipeline
pub const SIGMA: f64 = 1.5;

// Fixed-point kernel weights sum to 1 << KERNEL_BITS
const KERNEL_BITS: u32 = 8;
const RADIUS: isize = (KERNEL_SIZE / 2) as isize;

/// Build a normalized fixed-point 5-tap Gaussian kernel
pub fn gaussian_kernel(sigma: f64) -> [i32; KERNEL_SIZE] {
    let scale = (1 << KERNEL_BITS) as f64;
    let mut weights = [0.0f64; KERNEL_SIZE];
    let mut sum = 0.0;
    for (i, w) in weights.iter_mut().enumerate() {
        let x = i as f64 - RADIUS as f64;
        *w = (-(x * x) / (2.0 * sigma * sigma)).exp();
        sum += *w;
    }

    let mut kernel = [0i32; KERNEL_SIZE];
    for (k, w) in kernel.iter_mut().zip(weights.iter()) {
        *k = (w / sum * scale).round() as i32;
    }
    // Push rounding drift into the centre tap so the kernel preserves flat regions
    let total: i32 = kernel.iter().sum();
    kernel[RADIUS as usize] += (1 << KERNEL_BITS) - total;
    kernel
}

/// Reflect an out-of-range index back into `0..len`, mirroring around the edge pixel
#[inline]
pub(crate) fn reflect101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = index;
    while i < 0 || i > last {
        i = if i < 0 { -i } else { 2 * last - i };
    }
    i as usize
}

/// Blur `plane` in place with a 5x5 separable Gaussian
///
/// `scratch` holds the horizontal pass and must cover every pixel.
pub fn gaussian_blur(
    plane: &mut [u8],
    scratch: &mut [i32],
    resolution: Resolution,
    sigma: f64,
) -> Result<()> {
    let width = resolution.width as usize;
    let height = resolution.height as usize;
    let pixels = resolution.pixels();
    if plane.len() < pixels || scratch.len() < pixels {
        return Err(Error::Processing(format!(
            "Blur buffers too small for {}: plane {}, scratch {}",
            resolution,
            plane.len(),
            scratch.len()
        )));
    }

    let kernel = gaussian_kernel(sigma);

    // Horizontal pass: plane -> scratch, kept at full precision
    for y in 0..height {
        let row = &plane[y * width..(y + 1) * width];
        let out = &mut scratch[y * width..(y + 1) * width];
        for (x, acc) in out.iter_mut().enumerate() {
            let mut sum = 0i32;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = reflect101(x as isize + k as isize - RADIUS, width);
                sum += weight * row[sx] as i32;
            }
            *acc = sum;
        }
    }

    // Vertical pass: scratch -> plane, rounded back to 8 bits
    let round = 1i32 << (2 * KERNEL_BITS - 1);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0i32;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = reflect101(y as isize + k as isize - RADIUS, height);
                sum += weight * scratch[sy * width + x];
            }
            plane[y * width + x] = ((sum + round) >> (2 * KERNEL_BITS)).clamp(0, 255) as u8;
        }
    }

    Ok(())
}
