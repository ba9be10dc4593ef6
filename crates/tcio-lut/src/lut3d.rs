//! 3-dimensional lookup table container.
//!
//! A 3D LUT maps RGB input to RGB output through a volumetric grid of
//! color values. The three axes may have different resolutions; common
//! cubes are 17, 32 or 33 per side.

/// A 3-dimensional RGB lookup table.
///
/// # Structure
///
/// - `x_dim * y_dim * z_dim` cells, 3 floats (RGB) per cell
/// - Flat storage, x varies fastest:
///   cell index = `z*(y_dim*x_dim) + y*x_dim + x`, channel = `3*cell + c`
///
/// Coordinate access is bounds-checked against the declared dimensions
/// and fails soft: an out-of-range `set` is dropped and an out-of-range
/// `get` returns `None`. The SPI3D loader relies on this when a data
/// record carries coordinates outside the declared grid.
///
/// # Example
///
/// ```rust
/// use tcio_lut::Lut3D;
///
/// let mut lut = Lut3D::new();
/// lut.create(2, 2, 2);
/// lut.set(1, 0, 1, [1.0, 0.5, 0.25]);
/// assert_eq!(lut.get(1, 0, 1), Some([1.0, 0.5, 0.25]));
/// ```
#[derive(Debug, Clone)]
pub struct Lut3D {
    x_dim: usize,
    y_dim: usize,
    z_dim: usize,
    data: Vec<f32>,
}

impl Lut3D {
    /// Creates an empty LUT with all dimensions 0.
    pub fn new() -> Self {
        Self {
            x_dim: 0,
            y_dim: 0,
            z_dim: 0,
            data: Vec::new(),
        }
    }

    /// Allocates storage for `3 * x_dim * y_dim * z_dim` floats (zeroed)
    /// and fixes the grid dimensions.
    pub fn create(&mut self, x_dim: usize, y_dim: usize, z_dim: usize) {
        let len = x_dim * y_dim * z_dim;
        self.data.clear();
        self.data.resize(3 * len, 0.0);
        self.x_dim = x_dim;
        self.y_dim = y_dim;
        self.z_dim = z_dim;
    }

    /// Builds an identity (pass-through) cube of `size^3` cells.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tcio_lut::Lut3D;
    ///
    /// let lut = Lut3D::identity(17);
    /// assert_eq!(lut.get(16, 16, 16), Some([1.0, 1.0, 1.0]));
    /// ```
    pub fn identity(size: usize) -> Self {
        let mut lut = Self::new();
        lut.create(size, size, size);
        if size < 2 {
            return lut;
        }
        let n = (size - 1) as f32;
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    lut.set(x, y, z, [x as f32 / n, y as f32 / n, z as f32 / n]);
                }
            }
        }
        lut
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (self.x_dim * self.y_dim) * z + self.x_dim * y + x
    }

    #[inline]
    fn in_range(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.x_dim && y < self.y_dim && z < self.z_dim
    }

    /// Writes the RGB triple at a grid coordinate. Dropped silently if
    /// any axis is out of range.
    pub fn set(&mut self, x: usize, y: usize, z: usize, val: [f32; 3]) {
        if self.in_range(x, y, z) {
            let idx = self.index(x, y, z);
            self.data[3 * idx] = val[0];
            self.data[3 * idx + 1] = val[1];
            self.data[3 * idx + 2] = val[2];
        }
    }

    /// Reads the RGB triple at a grid coordinate, or `None` if any axis
    /// is out of range.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<[f32; 3]> {
        if !self.in_range(x, y, z) {
            return None;
        }
        let idx = self.index(x, y, z);
        Some([
            self.data[3 * idx],
            self.data[3 * idx + 1],
            self.data[3 * idx + 2],
        ])
    }

    /// Grid resolution along the x axis.
    pub fn x_dim(&self) -> usize {
        self.x_dim
    }

    /// Grid resolution along the y axis.
    pub fn y_dim(&self) -> usize {
        self.y_dim
    }

    /// Grid resolution along the z axis.
    pub fn z_dim(&self) -> usize {
        self.z_dim
    }

    /// True if no cells have been allocated.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat RGB data, x fastest then y then z.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Lut3D {
    fn default() -> Self {
        Self::new()
    }
}
