//! Colorspace conversion between NV21, RGBA and GRAY8
//!
//! All routines write into caller-owned slices and never allocate.

use crate::error::{Error, Result};
use crate::types::{FrameFormat, Resolution};

// BT.601 limited-range YUV -> RGB, 20-bit fixed point
const SHIFT: i32 = 20;
const HALF: i32 = 1 << (SHIFT - 1);
const CY: i32 = 1_220_542; // 1.164
const CVR: i32 = 1_673_527; // 1.596
const CVG: i32 = -852_492; // -0.813
const CUG: i32 = -409_993; // -0.391
const CUB: i32 = 2_116_026; // 2.018

// RGB -> Y perceptual weights, 14-bit fixed point (0.299, 0.587, 0.114)
const GRAY_SHIFT: u32 = 14;
const GRAY_R: u32 = 4899;
const GRAY_G: u32 = 9617;
const GRAY_B: u32 = 1868;

/// Colour an all-zero NV21 frame decodes to
pub const ZERO_FRAME_RGBA: [u8; 4] = [0, 154, 0, 255];

/// Convert a frame between two supported formats into `output`
pub fn convert_colorspace(
    input: &[u8],
    src_format: FrameFormat,
    output: &mut [u8],
    dst_format: FrameFormat,
    resolution: Resolution,
) -> Result<()> {
    match (src_format, dst_format) {
        (FrameFormat::Nv21, FrameFormat::Rgba) => nv21_to_rgba(input, output, resolution),
        (FrameFormat::Rgba, FrameFormat::Gray) => rgba_to_gray(input, output, resolution),
        (FrameFormat::Gray, FrameFormat::Rgba) => gray_to_rgba(input, output, resolution),
        (src, dst) if src == dst => {
            let size = src.frame_size(resolution);
            check_len(input, size, "source")?;
            check_len(output, size, "destination")?;
            output[..size].copy_from_slice(&input[..size]);
            Ok(())
        }
        (src, dst) => Err(Error::Processing(format!(
            "Unsupported conversion: {:?} -> {:?}",
            src, dst
        ))),
    }
}

/// Convert NV21 (Y plane + interleaved VU) to packed RGBA with opaque alpha
pub fn nv21_to_rgba(input: &[u8], output: &mut [u8], resolution: Resolution) -> Result<()> {
    if !resolution.is_even() {
        return Err(Error::Processing(format!(
            "NV21 requires even dimensions, got {}",
            resolution
        )));
    }
    check_len(input, FrameFormat::Nv21.frame_size(resolution), "NV21 source")?;
    check_len(output, FrameFormat::Rgba.frame_size(resolution), "RGBA destination")?;

    let width = resolution.width as usize;
    let height = resolution.height as usize;
    let (y_plane, vu_plane) = input.split_at(width * height);

    for y in 0..height {
        let y_row = &y_plane[y * width..(y + 1) * width];
        let vu_row = &vu_plane[(y / 2) * width..(y / 2 + 1) * width];
        let out_row = &mut output[y * width * 4..(y + 1) * width * 4];

        for (x, px) in out_row.chunks_exact_mut(4).enumerate() {
            let pair = x & !1;
            let v = vu_row[pair] as i32 - 128;
            let u = vu_row[pair + 1] as i32 - 128;
            let luma = (y_row[x] as i32 - 16).max(0) * CY;

            px[0] = clamp_u8((luma + CVR * v + HALF) >> SHIFT);
            px[1] = clamp_u8((luma + CVG * v + CUG * u + HALF) >> SHIFT);
            px[2] = clamp_u8((luma + CUB * u + HALF) >> SHIFT);
            px[3] = 255;
        }
    }

    Ok(())
}

/// Reduce packed RGBA to a single perceptual intensity channel
pub fn rgba_to_gray(input: &[u8], output: &mut [u8], resolution: Resolution) -> Result<()> {
    let pixels = resolution.pixels();
    check_len(input, pixels * 4, "RGBA source")?;
    check_len(output, pixels, "GRAY destination")?;

    for (px, out) in input.chunks_exact(4).zip(output[..pixels].iter_mut()) {
        let weighted = GRAY_R * px[0] as u32 + GRAY_G * px[1] as u32 + GRAY_B * px[2] as u32;
        *out = ((weighted + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT) as u8;
    }

    Ok(())
}

/// Expand a single channel to RGBA, every colour channel set to the intensity
pub fn gray_to_rgba(input: &[u8], output: &mut [u8], resolution: Resolution) -> Result<()> {
    let pixels = resolution.pixels();
    check_len(input, pixels, "GRAY source")?;
    check_len(output, pixels * 4, "RGBA destination")?;

    for (&value, px) in input[..pixels].iter().zip(output.chunks_exact_mut(4)) {
        px[0] = value;
        px[1] = value;
        px[2] = value;
        px[3] = 255;
    }

    Ok(())
}

#[inline]
fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn check_len(buf: &[u8], required: usize, what: &str) -> Result<()> {
    if buf.len() < required {
        return Err(Error::Processing(format!(
            "{} buffer too small: expected {}, got {}",
            what,
            required,
            buf.len()
        )));
    }
    Ok(())
}
