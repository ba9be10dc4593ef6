//! File-based loader tests for the SPI formats.

use std::io::Write;

use tcio_lut::{read_spi1d, read_spi3d, LutFilter};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file.flush().expect("flush");
    file
}

#[test]
fn read_spi3d_from_file() {
    let file = write_temp(
        "\
SPILUT 1.0
3 3
2 2 2
0 0 0 0.0 0.0 0.0
1 0 0 1.0 0.0 0.0
0 1 0 0.0 1.0 0.0
1 1 0 1.0 1.0 0.0
0 0 1 0.0 0.0 1.0
1 0 1 1.0 0.0 1.0
0 1 1 0.0 1.0 1.0
1 1 1 1.0 1.0 1.0
",
    );

    let lut = read_spi3d(file.path()).unwrap();
    assert_eq!(lut.x_dim(), 2);
    assert_eq!(lut.get(1, 0, 1), Some([1.0, 0.0, 1.0]));
}

#[test]
fn read_spi3d_missing_file() {
    let err = read_spi3d(std::path::Path::new("/nonexistent/grade.spi3d")).unwrap_err();
    assert!(err.to_string().contains("Failed to open file"));
}

#[test]
fn read_spi1d_header_only_file() {
    let file = write_temp("Version 1\nFrom 0.0 1.0\nLength 1024\nComponents 1\n");
    let lut = read_spi1d(file.path()).unwrap();
    assert!(lut.is_empty());
}

#[test]
fn read_spi1d_rejects_tiny_file() {
    let file = write_temp("Version 1\n");
    let err = read_spi1d(file.path()).unwrap_err();
    assert!(err.to_string().contains("seems not a .spi1d file"));
}

#[test]
fn filter_load_and_apply() {
    let file = write_temp(
        "\
SPILUT 1.0
3 3
2 2 2
0 0 0 0.0 0.0 0.0
1 0 0 1.0 0.0 0.0
0 1 0 0.0 1.0 0.0
1 1 0 1.0 1.0 0.0
0 0 1 0.0 0.0 1.0
1 0 1 1.0 0.0 1.0
0 1 1 0.0 1.0 1.0
1 1 1 1.0 1.0 1.0
",
    );

    let filter = LutFilter::load(file.path()).unwrap();
    assert!(filter.is_valid());
    assert_eq!(filter.dim(), [2, 2, 2]);

    let out = filter.apply(1.0, 1.0, 1.0);
    assert!((out[0] - 1.0).abs() < 1e-6);
    assert!((out[1] - 1.0).abs() < 1e-6);
    assert!((out[2] - 1.0).abs() < 1e-6);
}
