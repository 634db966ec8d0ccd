//! Two-threshold gradient edge extraction
//!
//! Provides:
//! - 3x3 Sobel gradients with mirrored borders
//! - Non-maximum suppression over four quantized directions
//! - Hysteresis tracking from strong seeds through weak neighbours
//!
//! Every working plane lives in an [`EdgeWorkspace`] sized once per
//! resolution, so detection itself never allocates.

use crate::error::{Error, Result};
use crate::processing::{alloc_plane, reserve_plane};
use crate::processing::blur::reflect101;
use crate::types::{EdgeThresholds, Resolution};

/// Edge pixel value in the binary map
pub const EDGE: u8 = 255;
/// Background pixel value in the binary map
pub const NON_EDGE: u8 = 0;

// Weak candidate marker, only present while hysteresis runs
const CANDIDATE: u8 = 1;

// tan(22.5 deg) in Q15
const TG22: i32 = 13_573;

/// Reusable working memory for edge detection
#[derive(Debug)]
pub struct EdgeWorkspace {
    resolution: Resolution,
    dx: Vec<i16>,
    dy: Vec<i16>,
    magnitude: Vec<i32>,
    stack: Vec<usize>,
}

impl EdgeWorkspace {
    /// Allocate all planes for `resolution`
    pub fn new(resolution: Resolution) -> Result<Self> {
        let pixels = resolution.pixels();
        Ok(Self {
            resolution,
            dx: alloc_plane(pixels)?,
            dy: alloc_plane(pixels)?,
            magnitude: alloc_plane(pixels)?,
            // every pixel is pushed at most once
            stack: reserve_plane(pixels)?,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Full-precision plane reused as the blur's intermediate pass
    pub(crate) fn blur_scratch(&mut self) -> &mut [i32] {
        &mut self.magnitude
    }
}

/// Extract a binary edge map from a smoothed intensity plane
///
/// Writes [`EDGE`] or [`NON_EDGE`] for every pixel of `edges` and returns the
/// number of edge pixels. Thresholds are floored to integers and swapped if
/// given out of order.
pub fn detect_edges(
    luma: &[u8],
    edges: &mut [u8],
    workspace: &mut EdgeWorkspace,
    thresholds: EdgeThresholds,
) -> Result<usize> {
    let resolution = workspace.resolution;
    let pixels = resolution.pixels();
    if luma.len() < pixels || edges.len() < pixels {
        return Err(Error::Processing(format!(
            "Edge buffers too small for {}: luma {}, edges {}",
            resolution,
            luma.len(),
            edges.len()
        )));
    }

    let (low, high) = thresholds.gradient_bounds();
    let edges = &mut edges[..pixels];

    sobel(luma, workspace);
    suppress_non_maxima(edges, workspace, low, high);
    let count = track_hysteresis(edges, workspace);

    Ok(count)
}

fn sobel(luma: &[u8], ws: &mut EdgeWorkspace) {
    let width = ws.resolution.width as usize;
    let height = ws.resolution.height as usize;

    for y in 0..height {
        let up = reflect101(y as isize - 1, height) * width;
        let mid = y * width;
        let down = reflect101(y as isize + 1, height) * width;

        for x in 0..width {
            let l = reflect101(x as isize - 1, width);
            let r = reflect101(x as isize + 1, width);
            let p = |row: usize, col: usize| luma[row + col] as i32;

            let gx = (p(up, r) - p(up, l))
                + 2 * (p(mid, r) - p(mid, l))
                + (p(down, r) - p(down, l));
            let gy = (p(down, l) - p(up, l))
                + 2 * (p(down, x) - p(up, x))
                + (p(down, r) - p(up, r));

            let i = mid + x;
            ws.dx[i] = gx as i16;
            ws.dy[i] = gy as i16;
            ws.magnitude[i] = gx.abs() + gy.abs();
        }
    }
}

/// Thin gradients to one-pixel ridges and classify them against the thresholds
fn suppress_non_maxima(edges: &mut [u8], ws: &mut EdgeWorkspace, low: i32, high: i32) {
    let width = ws.resolution.width as usize;
    let height = ws.resolution.height as usize;
    ws.stack.clear();

    // Magnitude outside the frame reads as zero
    let mag = |mags: &[i32], x: isize, y: isize| -> i32 {
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            0
        } else {
            mags[y as usize * width + x as usize]
        }
    };

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let m = ws.magnitude[i];
            edges[i] = NON_EDGE;
            if m <= low {
                continue;
            }

            let xs = ws.dx[i] as i32;
            let ys = ws.dy[i] as i32;
            let ax = xs.abs();
            let ay = ys.abs() << 15;
            let tg22x = ax * TG22;
            let (xi, yi) = (x as isize, y as isize);

            let is_max = if ay < tg22x {
                m > mag(&ws.magnitude, xi - 1, yi) && m >= mag(&ws.magnitude, xi + 1, yi)
            } else {
                let tg67x = tg22x + (ax << 16);
                if ay > tg67x {
                    m > mag(&ws.magnitude, xi, yi - 1) && m >= mag(&ws.magnitude, xi, yi + 1)
                } else {
                    let s: isize = if (xs ^ ys) < 0 { -1 } else { 1 };
                    m > mag(&ws.magnitude, xi - s, yi - 1)
                        && m > mag(&ws.magnitude, xi + s, yi + 1)
                }
            };

            if !is_max {
                continue;
            }
            if m > high {
                edges[i] = EDGE;
                ws.stack.push(i);
            } else {
                edges[i] = CANDIDATE;
            }
        }
    }
}

/// Promote candidates connected to strong edges, then clear the rest
fn track_hysteresis(edges: &mut [u8], ws: &mut EdgeWorkspace) -> usize {
    let width = ws.resolution.width as isize;
    let height = ws.resolution.height as isize;

    while let Some(i) = ws.stack.pop() {
        let x = (i % width as usize) as isize;
        let y = (i / width as usize) as isize;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }
                let n = (ny * width + nx) as usize;
                if edges[n] == CANDIDATE {
                    edges[n] = EDGE;
                    ws.stack.push(n);
                }
            }
        }
    }

    let mut count = 0;
    for px in edges.iter_mut() {
        if *px == EDGE {
            count += 1;
        } else {
            *px = NON_EDGE;
        }
    }
    count
}
