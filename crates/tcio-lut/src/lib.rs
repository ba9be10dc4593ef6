//! # tcio-lut
//!
//! LUT containers, SPI file parsing and trilinear filtering for color
//! grading pipelines.
//!
//! This crate provides the in-memory grid types for 1D transfer curves and
//! 3D RGB cubes, parsers for the Sony Pictures Imageworks ASCII LUT formats,
//! and a filter that applies a 3D LUT to color values.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - 1-dimensional lookup table (transfer curve, N components)
//! - [`Lut3D`] - 3-dimensional lookup table (RGB cube)
//!
//! # Supported Formats
//!
//! - `.spi1d` / `.spi3d` - Sony Pictures Imageworks ([`spi`] module)
//!
//! # Usage
//!
//! ```rust
//! use tcio_lut::{Lut3D, LutFilter};
//!
//! // Build a pass-through cube and sample it
//! let lut = Lut3D::identity(17);
//! let filter = LutFilter::from_lut3d(&lut);
//! let rgb = filter.apply(0.5, 0.3, 0.2);
//! ```
//!
//! # Error Handling
//!
//! Grid accesses are bounds-checked and fail soft: an out-of-range `set` is
//! dropped and an out-of-range `get` returns `None`. Loaders report
//! structural failures (bad header, bad size line) through [`LutError`];
//! malformed individual data records are tolerated and skipped.
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `tcio-cli` - LUT application to images

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod filter;
mod lut1d;
mod lut3d;
mod stream;
pub mod spi;

pub use error::{LutError, LutResult};
pub use filter::LutFilter;
pub use lut1d::Lut1D;
pub use lut3d::Lut3D;
pub use stream::StreamReader;
pub use spi::{parse_spi1d, parse_spi3d, read_spi1d, read_spi3d, FromChars};
