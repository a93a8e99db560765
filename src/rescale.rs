//! Optional resize to a block-count target.
//!
//! Resampling is a separable 2-pass Lanczos3 convolution with precomputed,
//! normalized weights. All math happens in f32 and is clamped back to u8 at
//! the end. The result always has dimensions that are exact multiples of the
//! block size; the resizer verifies this before returning.

use std::f32::consts::PI;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::grid::{PixelGrid, BLOCK_SIZE};
use crate::normalize::round_up_to_block;

/// Lanczos window half-width (a=3).
const LANCZOS_RADIUS: f32 = 3.0;

/// Lanczos kernel with a=3
#[inline]
fn lanczos3(x: f32) -> f32 {
    if x.abs() < 1e-8 {
        1.0
    } else if x.abs() >= LANCZOS_RADIUS {
        0.0
    } else {
        let pi_x = PI * x;
        let pi_x_3 = pi_x / 3.0;
        (pi_x.sin() / pi_x) * (pi_x_3.sin() / pi_x_3)
    }
}

/// Precomputed kernel weights for a single output position.
/// Weights are normalized (sum to 1.0) and include the source index range.
struct KernelWeights {
    /// First source index to sample from
    start_idx: usize,
    /// Normalized weights, one per source sample in range
    weights: Vec<f32>,
    /// Fallback source index when no weights are available at the edges
    fallback_idx: usize,
}

/// Precompute all kernel weights for 1D resampling.
fn precompute_weights(src_len: usize, dst_len: usize) -> Vec<KernelWeights> {
    let scale = src_len as f32 / dst_len as f32;
    // Widen the kernel when downscaling so it covers the source footprint
    let filter_scale = scale.max(1.0);
    let radius = (LANCZOS_RADIUS * filter_scale).ceil() as i32;

    let mut all_weights = Vec::with_capacity(dst_len);

    for dst_i in 0..dst_len {
        let src_pos = (dst_i as f32 + 0.5) * scale - 0.5;
        let center = src_pos.floor() as i32;

        let start = (center - radius).max(0) as usize;
        let end = ((center + radius) as usize).min(src_len - 1);

        let mut weights = Vec::with_capacity(end - start + 1);
        let mut weight_sum = 0.0f32;

        for si in start..=end {
            let d = (src_pos - si as f32) / filter_scale;
            let weight = lanczos3(d);
            weights.push(weight);
            weight_sum += weight;
        }

        if weight_sum.abs() > 1e-8 {
            for w in &mut weights {
                *w /= weight_sum;
            }
        } else {
            weights.clear();
        }

        let fallback = src_pos.round().clamp(0.0, (src_len - 1) as f32) as usize;

        all_weights.push(KernelWeights {
            start_idx: start,
            weights,
            fallback_idx: fallback,
        });
    }

    all_weights
}

/// 1D resample of one row using precomputed weights.
#[inline]
fn resample_row(src: &[[f32; 3]], kernel_weights: &[KernelWeights]) -> Vec<[f32; 3]> {
    let mut dst = Vec::with_capacity(kernel_weights.len());

    for kw in kernel_weights {
        if kw.weights.is_empty() {
            dst.push(src[kw.fallback_idx]);
        } else {
            let mut sum = [0.0f32; 3];
            for (i, &weight) in kw.weights.iter().enumerate() {
                let p = src[kw.start_idx + i];
                sum[0] += p[0] * weight;
                sum[1] += p[1] * weight;
                sum[2] += p[2] * weight;
            }
            dst.push(sum);
        }
    }

    dst
}

/// Separable 2-pass Lanczos3 resample of the whole grid.
fn resample(grid: &PixelGrid, dst_width: usize, dst_height: usize) -> PixelGrid {
    let src_width = grid.width();
    let src_height = grid.height();

    if dst_width == src_width && dst_height == src_height {
        return grid.clone();
    }

    let src: Vec<[f32; 3]> = grid
        .pixels()
        .iter()
        .map(|p| [p.r as f32, p.g as f32, p.b as f32])
        .collect();

    let h_weights = precompute_weights(src_width, dst_width);
    let v_weights = precompute_weights(src_height, dst_height);

    // Pass 1: horizontal resample of each row (src_width -> dst_width)
    let mut temp = vec![[0.0f32; 3]; dst_width * src_height];
    for y in 0..src_height {
        let src_row = &src[y * src_width..(y + 1) * src_width];
        let dst_row = resample_row(src_row, &h_weights);
        temp[y * dst_width..(y + 1) * dst_width].copy_from_slice(&dst_row);
    }

    // Pass 2: vertical resample, processed by output row for cache locality
    let mut dst = vec![[0.0f32; 3]; dst_width * dst_height];
    for dst_y in 0..dst_height {
        let kw = &v_weights[dst_y];
        let dst_row_start = dst_y * dst_width;

        if kw.weights.is_empty() {
            let src_row_start = kw.fallback_idx * dst_width;
            dst[dst_row_start..dst_row_start + dst_width]
                .copy_from_slice(&temp[src_row_start..src_row_start + dst_width]);
        } else {
            for x in 0..dst_width {
                let mut sum = [0.0f32; 3];
                for (i, &weight) in kw.weights.iter().enumerate() {
                    let p = temp[(kw.start_idx + i) * dst_width + x];
                    sum[0] += p[0] * weight;
                    sum[1] += p[1] * weight;
                    sum[2] += p[2] * weight;
                }
                dst[dst_row_start + x] = sum;
            }
        }
    }

    let pixels = dst
        .into_iter()
        .map(|[r, g, b]| {
            Rgb::new(
                r.round().clamp(0.0, 255.0) as u8,
                g.round().clamp(0.0, 255.0) as u8,
                b.round().clamp(0.0, 255.0) as u8,
            )
        })
        .collect();

    PixelGrid::from_pixels(dst_width, dst_height, pixels)
}

/// Round a fractional pixel dimension up to the next multiple of the block
/// size.
#[inline]
fn round_up_to_block_f(dim: f64) -> usize {
    round_up_to_block(dim.ceil() as usize)
}

/// Resize a normalized grid to a block-count target.
///
/// - Both targets absent: no-op.
/// - Both given: exact stretch to `(width * 9, height * 9)`; aspect ratio is
///   not preserved.
/// - One given: uniform scale factor derived from that dimension, applied to
///   both axes, then each result rounded up to the next multiple of 9.
pub fn resize_to_blocks(
    grid: PixelGrid,
    width_blocks: Option<u32>,
    height_blocks: Option<u32>,
) -> Result<PixelGrid> {
    let (dst_width, dst_height) = match (width_blocks, height_blocks) {
        (None, None) => return Ok(grid),
        (Some(wb), Some(hb)) => (wb as usize * BLOCK_SIZE, hb as usize * BLOCK_SIZE),
        (Some(wb), None) => {
            let dst_width = wb as usize * BLOCK_SIZE;
            let factor = dst_width as f64 / grid.width() as f64;
            (dst_width, round_up_to_block_f(grid.height() as f64 * factor))
        }
        (None, Some(hb)) => {
            let dst_height = hb as usize * BLOCK_SIZE;
            let factor = dst_height as f64 / grid.height() as f64;
            (round_up_to_block_f(grid.width() as f64 * factor), dst_height)
        }
    };

    let resized = resample(&grid, dst_width, dst_height);

    // Unreachable given the rounding policy above; a failure here is a bug
    // in the dimension math, not a user error.
    if resized.width() % BLOCK_SIZE != 0 || resized.height() % BLOCK_SIZE != 0 {
        return Err(Error::InvariantViolation(format!(
            "resized dimensions {}x{} are not multiples of {}",
            resized.width(),
            resized.height(),
            BLOCK_SIZE
        )));
    }

    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, color: Rgb) -> PixelGrid {
        PixelGrid::filled(width, height, color)
    }

    #[test]
    fn no_targets_is_a_no_op() {
        let grid = solid(18, 9, Rgb::new(1, 2, 3));
        let out = resize_to_blocks(grid.clone(), None, None).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn both_targets_stretch_exactly() {
        let grid = solid(9, 9, Rgb::new(40, 50, 60));
        let out = resize_to_blocks(grid, Some(3), Some(2)).unwrap();
        assert_eq!(out.width(), 27);
        assert_eq!(out.height(), 18);
    }

    #[test]
    fn single_target_preserves_aspect_and_rounds_up() {
        // 18x9 at --width 1: factor 0.5, height 4.5 rounds up to 9
        let out = resize_to_blocks(solid(18, 9, Rgb::new(7, 7, 7)), Some(1), None).unwrap();
        assert_eq!(out.width(), 9);
        assert_eq!(out.height(), 9);

        // 9x36 at --height 1: factor 0.25, width 2.25 rounds up to 9
        let out = resize_to_blocks(solid(9, 36, Rgb::new(7, 7, 7)), None, Some(1)).unwrap();
        assert_eq!(out.width(), 9);
        assert_eq!(out.height(), 9);
    }

    #[test]
    fn results_are_always_block_multiples() {
        for (w, h) in [(9, 9), (18, 27), (45, 9), (27, 90)] {
            for target in [Some(1), Some(2), Some(5)] {
                let out = resize_to_blocks(solid(w, h, Rgb::default()), target, None).unwrap();
                assert_eq!(out.width() % BLOCK_SIZE, 0);
                assert_eq!(out.height() % BLOCK_SIZE, 0);

                let out = resize_to_blocks(solid(w, h, Rgb::default()), None, target).unwrap();
                assert_eq!(out.width() % BLOCK_SIZE, 0);
                assert_eq!(out.height() % BLOCK_SIZE, 0);
            }
        }
    }

    #[test]
    fn identity_target_returns_equal_pixels() {
        let grid = solid(9, 9, Rgb::new(12, 34, 56));
        let out = resize_to_blocks(grid.clone(), Some(1), Some(1)).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn solid_color_survives_resampling() {
        // Normalized weights keep a constant image constant
        let out = resize_to_blocks(solid(9, 9, Rgb::new(255, 0, 0)), Some(2), Some(2)).unwrap();
        for &p in out.pixels() {
            assert_eq!(p, Rgb::new(255, 0, 0));
        }
    }

    #[test]
    fn downscale_averages_regions() {
        // Left half dark, right half bright; downscale keeps the ordering
        let mut grid = solid(18, 18, Rgb::new(0, 0, 0));
        for y in 0..18 {
            for x in 9..18 {
                grid.set(x, y, Rgb::new(255, 255, 255));
            }
        }
        let out = resize_to_blocks(grid, Some(1), Some(1)).unwrap();
        let left = out.get(1, 4);
        let right = out.get(7, 4);
        assert!(left.r < 128, "left {:?}", left);
        assert!(right.r > 128, "right {:?}", right);
    }
}
