//! 1-dimensional lookup table container.
//!
//! A 1D LUT stores a discrete transfer curve: `length` samples with a
//! fixed number of components per sample (1 for a luminance curve, 3 for
//! per-channel RGB curves). Storage is a flat row-major float sequence.

/// A 1-dimensional lookup table.
///
/// # Structure
///
/// - `length` samples, `components` values per sample
/// - Flat storage of `length * components` floats
/// - Input domain, default `[0, 1]`
///
/// All element access is bounds-checked and fails soft: out-of-range
/// writes are dropped, out-of-range reads return `None`. The container
/// never panics on access.
#[derive(Debug, Clone)]
pub struct Lut1D {
    version: u32,
    components: usize,
    domain: [f32; 2],
    data: Vec<f32>,
}

impl Lut1D {
    /// Creates an empty LUT (no samples, domain `[0, 1]`).
    pub fn new() -> Self {
        Self {
            version: 1,
            components: 1,
            domain: [0.0, 1.0],
            data: Vec::new(),
        }
    }

    /// Allocates storage for `length * components` samples, resetting all
    /// values to zero, and sets the input domain.
    pub fn create(&mut self, length: usize, components: usize, domain: [f32; 2]) {
        self.components = components;
        self.domain = domain;
        self.data.clear();
        self.data.resize(length * components, 0.0);
    }

    /// Writes one element. The check is against the flat index
    /// `idx * components + comp`, not per coordinate: a write is dropped
    /// silently only when that index is past the end of the data, and a
    /// `comp` at or beyond `components` aliases into the next sample.
    pub fn set(&mut self, idx: usize, comp: usize, val: f32) {
        if idx * self.components + comp < self.data.len() {
            self.data[idx * self.components + comp] = val;
        }
    }

    /// Reads one element, or `None` if the flat index
    /// `idx * components + comp` is past the end of the data. Like
    /// [`set`](Self::set), an oversized `comp` aliases into the next
    /// sample rather than failing.
    pub fn get(&self, idx: usize, comp: usize) -> Option<f32> {
        self.data.get(idx * self.components + comp).copied()
    }

    /// Number of samples.
    pub fn length(&self) -> usize {
        if self.components == 0 {
            0
        } else {
            self.data.len() / self.components
        }
    }

    /// Values per sample.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Input domain as `[min, max]`.
    pub fn domain(&self) -> [f32; 2] {
        self.domain
    }

    /// Format version tag. Only version 1 exists.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// True if no samples have been allocated.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for Lut1D {
    fn default() -> Self {
        Self::new()
    }
}
