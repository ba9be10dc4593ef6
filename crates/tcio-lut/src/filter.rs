//! 3D LUT filter: trilinear sampling of a populated color cube.

use crate::{spi, Lut3D, LutResult};
use std::path::Path;

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + (b - a) * t
}

/// Splits a normalized value into a grid cell index and a fractional
/// offset within that cell, against an axis of `sz` samples.
///
/// Input is clamped to [0, 1] first; the cell index is clamped to
/// `[0, sz-1]`. With `sz == 1` this degenerates to cell 0, fraction 0.
#[inline]
fn quantize(x: f32, sz: usize) -> (usize, f32) {
    let x = x.clamp(0.0, 1.0);
    let px = (sz - 1) as f32 * x;
    let cell = (px.floor() as usize).min(sz - 1);
    (cell, px - px.floor())
}

/// A 3D LUT filter.
///
/// Owns a flat copy of a populated [`Lut3D`] and applies it to color
/// triples via trilinear interpolation. Once built the filter is plain
/// read-only data; sharing it across threads needs no synchronization.
///
/// # Example
///
/// ```rust
/// use tcio_lut::{Lut3D, LutFilter};
///
/// let filter = LutFilter::from_lut3d(&Lut3D::identity(17));
/// assert!(filter.is_valid());
/// let out = filter.apply(0.25, 0.5, 0.75);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LutFilter {
    dim: [usize; 3],
    data: Vec<f32>,
}

impl LutFilter {
    /// Creates an empty, invalid filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an SPI3D file and builds a filter from it.
    pub fn load(path: &Path) -> LutResult<Self> {
        let lut = spi::read_spi3d(path)?;
        Ok(Self::from_lut3d(&lut))
    }

    /// Builds a filter from a populated 3D LUT.
    ///
    /// The grid data is copied; the filter does not borrow the LUT.
    pub fn from_lut3d(lut: &Lut3D) -> Self {
        Self {
            dim: [lut.x_dim(), lut.y_dim(), lut.z_dim()],
            data: lut.data().to_vec(),
        }
    }

    /// True when the filter holds LUT data and can be applied.
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    /// Grid resolution per axis.
    pub fn dim(&self) -> [usize; 3] {
        self.dim
    }

    /// Applies the LUT to an input color via trilinear interpolation.
    ///
    /// Inputs are clamped to [0, 1] per channel. Each axis is quantized
    /// to two bracketing cells plus a fractional weight, then the 8
    /// surrounding corners are blended along x, then y, then z. Edge
    /// cells clamp (no wraparound); a 1-sample axis degenerates to a
    /// plain lookup.
    ///
    /// Callers should check [`is_valid`](Self::is_valid) first; an empty
    /// filter passes the input through unchanged.
    pub fn apply(&self, r: f32, g: f32, b: f32) -> [f32; 3] {
        if !self.is_valid() {
            return [r, g, b];
        }

        let (ix0, fx) = quantize(r, self.dim[0]);
        let (iy0, fy) = quantize(g, self.dim[1]);
        let (iz0, fz) = quantize(b, self.dim[2]);

        // clamp at the upper boundary, no wraparound
        let ix1 = (ix0 + 1).min(self.dim[0] - 1);
        let iy1 = (iy0 + 1).min(self.dim[1] - 1);
        let iz1 = (iz0 + 1).min(self.dim[2] - 1);

        let cell = |x: usize, y: usize, z: usize| z * self.dim[1] * self.dim[0] + y * self.dim[0] + x;

        let i000 = cell(ix0, iy0, iz0);
        let i001 = cell(ix1, iy0, iz0);
        let i010 = cell(ix0, iy1, iz0);
        let i011 = cell(ix1, iy1, iz0);
        let i100 = cell(ix0, iy0, iz1);
        let i101 = cell(ix1, iy0, iz1);
        let i110 = cell(ix0, iy1, iz1);
        let i111 = cell(ix1, iy1, iz1);

        let mut col = [0.0f32; 3];
        for (i, out) in col.iter_mut().enumerate() {
            let d00 = lerp(fx, self.data[3 * i000 + i], self.data[3 * i001 + i]);
            let d10 = lerp(fx, self.data[3 * i010 + i], self.data[3 * i011 + i]);
            let d01 = lerp(fx, self.data[3 * i100 + i], self.data[3 * i101 + i]);
            let d11 = lerp(fx, self.data[3 * i110 + i], self.data[3 * i111 + i]);
            let d0 = lerp(fy, d00, d10);
            let d1 = lerp(fy, d01, d11);
            *out = lerp(fz, d0, d1);
        }
        col
    }

    /// Debug mapping from log-scale luminance to a blue-green-red
    /// gradient. Values near 18% gray render as mid gray. Not part of
    /// the LUT contract; handy for exposure inspection.
    pub fn heatmap(r: f32, g: f32, b: f32) -> [f32; 3] {
        // 2^-8.5 .. 2^1 .. 2^5 maps blue .. green .. red
        const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
        const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
        const RED: [f32; 3] = [1.0, 0.0, 0.0];
        const GRAY18: f32 = 0.180;

        let log_col = [r.log2(), g.log2(), b.log2()];

        let mut col = [0.0f32; 3];
        for i in 0..3 {
            if (r - GRAY18).abs() < 0.05 {
                col[i] = 0.5;
            } else {
                let f = ((log_col[i] + 8.5) / (5.0 + 8.5)).clamp(0.0, 1.0);
                col[i] = if f < 0.5 {
                    BLUE[i] + (GREEN[i] - BLUE[i]) * 2.0 * f
                } else {
                    GREEN[i] + (RED[i] - GREEN[i]) * 2.0 * (f - 0.5)
                };
            }
        }
        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube2(values: [[f32; 3]; 8]) -> LutFilter {
        let mut lut = Lut3D::new();
        lut.create(2, 2, 2);
        let mut i = 0;
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    lut.set(x, y, z, values[i]);
                    i += 1;
                }
            }
        }
        LutFilter::from_lut3d(&lut)
    }

    #[test]
    fn test_invalid_passthrough() {
        let filter = LutFilter::new();
        assert!(!filter.is_valid());
        assert_eq!(filter.apply(0.1, 0.2, 0.3), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_degenerate_single_cell() {
        let mut lut = Lut3D::new();
        lut.create(1, 1, 1);
        lut.set(0, 0, 0, [0.3, 0.6, 0.9]);
        let filter = LutFilter::from_lut3d(&lut);

        // single stored color regardless of input (after clamping)
        assert_eq!(filter.apply(0.0, 0.0, 0.0), [0.3, 0.6, 0.9]);
        assert_eq!(filter.apply(1.0, 1.0, 1.0), [0.3, 0.6, 0.9]);
        assert_eq!(filter.apply(-5.0, 0.5, 7.0), [0.3, 0.6, 0.9]);
    }

    #[test]
    fn test_exact_corners() {
        let filter = cube2([
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        ]);

        // no interpolation blur at exact corners
        assert_eq!(filter.apply(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(filter.apply(1.0, 0.0, 0.0), [1.0, 0.0, 0.0]);
        assert_eq!(filter.apply(0.0, 1.0, 1.0), [0.0, 1.0, 1.0]);
        assert_eq!(filter.apply(1.0, 1.0, 1.0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_midpoint_is_mean() {
        let filter = cube2([
            [0.2, 0.0, 0.0],
            [0.8, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        ]);

        // halfway between two adjacent cells along x, y and z pinned at 0
        let out = filter.apply(0.5, 0.0, 0.0);
        assert_relative_eq!(out[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(out[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_identity_passthrough() {
        let filter = LutFilter::from_lut3d(&Lut3D::identity(17));
        let out = filter.apply(0.25, 0.5, 0.75);
        assert_relative_eq!(out[0], 0.25, epsilon = 1e-4);
        assert_relative_eq!(out[1], 0.5, epsilon = 1e-4);
        assert_relative_eq!(out[2], 0.75, epsilon = 1e-4);
    }

    #[test]
    fn test_input_clamped() {
        let filter = LutFilter::from_lut3d(&Lut3D::identity(8));
        let out = filter.apply(2.0, -1.0, 0.5);
        assert_relative_eq!(out[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(out[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_heatmap_gray18() {
        let col = LutFilter::heatmap(0.18, 0.18, 0.18);
        assert_eq!(col, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_heatmap_extremes() {
        // far below the range: blue
        let lo = LutFilter::heatmap(1.0e-4, 1.0e-4, 1.0e-4);
        assert_relative_eq!(lo[2], 1.0, epsilon = 1e-6);
        assert_relative_eq!(lo[0], 0.0, epsilon = 1e-6);

        // far above the range: red
        let hi = LutFilter::heatmap(64.0, 64.0, 64.0);
        assert_relative_eq!(hi[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(hi[2], 0.0, epsilon = 1e-6);
    }
}
