//! Sony Pictures Imageworks LUT formats (SPI1D, SPI3D).
//!
//! Simple, human-readable ASCII formats used by OpenColorIO pipelines and
//! other VFX tools.
//!
//! # SPI1D Format
//!
//! ```text
//! Version 1
//! From 0.0 1.0
//! Length 1024
//! Components 1
//! {
//!   0.000000
//!   0.001000
//!   ...
//! }
//! ```
//!
//! Only the `Version 1` header is validated today; the body grammar is
//! pending a confirmed real-world sample and is not parsed (see
//! [`parse_spi1d`]).
//!
//! # SPI3D Format
//!
//! ```text
//! SPILUT 1.0
//! 3 3
//! 32 32 32
//! 0 0 0 0.000000 0.000000 0.000000
//! 1 0 0 0.033333 0.000000 0.000000
//! ...
//! ```
//!
//! Each data record carries explicit grid coordinates, so records need not
//! be sequential. Header and size lines are structural and strict;
//! malformed data records are tolerated and skipped, matching the
//! permissiveness of the many third-party tools that emit this format.
//!
//! # Example
//!
//! ```rust,no_run
//! use tcio_lut::spi::{read_spi1d, read_spi3d};
//! use std::path::Path;
//!
//! let curve = read_spi1d(Path::new("gamma.spi1d")).unwrap();
//! let cube = read_spi3d(Path::new("grade.spi3d")).unwrap();
//! ```

use crate::{Lut1D, Lut3D, LutError, LutResult, StreamReader};
use std::path::Path;

/// ASCII to number conversion strategy used by the loaders.
///
/// The default is [`parse_number`]; callers needing custom numeric
/// parsing (locale quirks, extended literals) pass their own through the
/// `*_with` loader variants.
pub type FromChars = fn(&str) -> Option<f64>;

/// Default ASCII to number converter.
pub fn parse_number(s: &str) -> Option<f64> {
    s.parse().ok()
}

// Files smaller than this cannot hold a meaningful header. Heuristic.
const SPI1D_MIN_FILE_SIZE: u64 = 32;

/// Reads an SPI1D file from disk.
///
/// Rejects unreadable files and files too small to be a plausible
/// `.spi1d`. See [`parse_spi1d`] for what is validated.
///
/// # Errors
///
/// Returns [`LutError::Parse`] if the file cannot be opened, is below the
/// size heuristic, or fails header validation.
pub fn read_spi1d(path: &Path) -> LutResult<Lut1D> {
    read_spi1d_with(path, parse_number)
}

/// [`read_spi1d`] with a custom number parser.
pub fn read_spi1d_with(path: &Path, from_chars: FromChars) -> LutResult<Lut1D> {
    let buf = std::fs::read(path)
        .map_err(|_| LutError::Parse(format!("Failed to open file : {}", path.display())))?;

    if (buf.len() as u64) < SPI1D_MIN_FILE_SIZE {
        return Err(LutError::Parse(format!(
            "Invalid file size: {} (seems not a .spi1d file)",
            path.display()
        )));
    }

    parse_spi1d_with(&String::from_utf8_lossy(&buf), from_chars)
}

/// Parses SPI1D data from a string.
///
/// Validates the `Version 1` header tokens and returns an empty
/// [`Lut1D`] on success. The domain range, sample count and value body
/// are not parsed yet: the body grammar is unconfirmed, and guessing one
/// would silently mis-load third-party curves. Loading succeeds with an
/// empty grid until a correct grammar is pinned down.
pub fn parse_spi1d(src: &str) -> LutResult<Lut1D> {
    parse_spi1d_with(src, parse_number)
}

/// [`parse_spi1d`] with a custom number parser.
///
/// The parser is reserved for the value body and unused until body
/// parsing lands.
pub fn parse_spi1d_with(src: &str, _from_chars: FromChars) -> LutResult<Lut1D> {
    let mut sr = StreamReader::new(src.as_bytes());

    // `Version 1`
    let tok = sr
        .read_token()
        .ok_or_else(|| LutError::Parse("Failed to parse Version line.".to_string()))?;
    if tok != "Version" {
        return Err(LutError::Parse(format!(
            "Failed to parse Version line. expected `Version` but got `{}`",
            tok
        )));
    }

    let ver = sr
        .read_token()
        .ok_or_else(|| LutError::Parse("Failed to parse Version line.".to_string()))?;
    if ver != "1" {
        return Err(LutError::Parse(format!("Version must be 1 but got {}", ver)));
    }

    Ok(Lut1D::new())
}

/// Reads an SPI3D file from disk.
///
/// # Errors
///
/// Returns [`LutError::Parse`] if the file cannot be opened or its header
/// or size line is malformed. Malformed data records do not fail the
/// load.
///
/// # Example
///
/// ```rust,no_run
/// use tcio_lut::spi::read_spi3d;
/// use std::path::Path;
///
/// let lut = read_spi3d(Path::new("grade.spi3d")).unwrap();
/// assert!(!lut.is_empty());
/// ```
pub fn read_spi3d(path: &Path) -> LutResult<Lut3D> {
    read_spi3d_with(path, parse_number)
}

/// [`read_spi3d`] with a custom number parser.
pub fn read_spi3d_with(path: &Path, from_chars: FromChars) -> LutResult<Lut3D> {
    let src = std::fs::read_to_string(path)
        .map_err(|_| LutError::Parse(format!("Failed to open file : {}", path.display())))?;
    parse_spi3d_with(&src, from_chars)
}

/// Parses SPI3D data from a string.
///
/// Strictly line-oriented:
///
/// 1. The first line must contain `spilut` (case-insensitive).
/// 2. The second line (component counts, conventionally `3 3`) is
///    discarded.
/// 3. The third line must hold the three grid sizes `x y z`.
/// 4. Every following line is expected to be `x y z r g b` (3 ints,
///    3 floats). Lines that do not parse are skipped without error.
///
/// The declared `x*y*z` record count is a soft bound: reading stops once
/// that many records have been accepted, but fewer records than declared
/// is not an error; unpopulated cells stay zero.
pub fn parse_spi3d(src: &str) -> LutResult<Lut3D> {
    parse_spi3d_with(src, parse_number)
}

/// [`parse_spi3d`] with a custom number parser.
pub fn parse_spi3d_with(src: &str, from_chars: FromChars) -> LutResult<Lut3D> {
    let mut lines = src.lines();

    // header
    let header = lines.next().unwrap_or("");
    if !header.to_lowercase().contains("spilut") {
        return Err(LutError::Parse(format!(
            "Not a SPILUT format. header = {}",
            header
        )));
    }

    // ignore 2nd line (assuming `3 3`)
    lines.next();

    // lut size
    let size_line = lines.next().unwrap_or("");
    let dims: Vec<usize> = size_line
        .split_whitespace()
        .take(3)
        .map_while(|t| t.parse().ok())
        .collect();
    let [x_size, y_size, z_size] = match dims[..] {
        [x, y, z] => [x, y, z],
        _ => return Err(LutError::Parse("Error while reading lut size".to_string())),
    };

    let mut lut = Lut3D::new();
    lut.create(x_size, y_size, z_size);

    // Soft bound only; fewer or malformed records are not an error.
    let mut read_count = x_size * y_size * z_size;

    for line in lines {
        if read_count == 0 {
            break;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 6 {
            continue;
        }

        let idx: Vec<usize> = fields[..3].iter().map_while(|t| t.parse().ok()).collect();
        let val: Vec<f64> = fields[3..].iter().map_while(|t| from_chars(t)).collect();
        if idx.len() != 3 || val.len() != 3 {
            continue;
        }

        // Bounds-checked; records outside the declared grid are dropped.
        lut.set(
            idx[0],
            idx[1],
            idx[2],
            [val[0] as f32, val[1] as f32, val[2] as f32],
        );
        read_count -= 1;
    }

    Ok(lut)
}
