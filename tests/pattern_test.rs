//! Tests for the core pattern preprocessing functions

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

use patternkit::pattern::{
    binarize, binarize_matrix, check_batch, is_grayscale, pixel_grid,
    GrayscaleRaster, PatternError,
};
use patternkit::raster::{dimensions, Dimensions};

/// Uniform grayscale image of the given size
fn gray_image(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Uniform color image whose channels clearly diverge
fn color_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 30, 64])))
}

/// 6x6 binary test pattern, the same layout the test dataset uses
const CHECKER: [[u8; 6]; 6] = [
    [  0, 255,   0, 255,   0, 255],
    [255, 255, 255, 255, 255,   0],
    [  0, 255, 255,   0, 255, 255],
    [255, 255,   0, 255, 255,   0],
    [  0, 255, 255, 255, 255, 255],
    [255,   0, 255,   0, 255,   0],
];

fn checker_image() -> DynamicImage {
    let mut img = GrayImage::new(6, 6);
    for (y, row) in CHECKER.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Luma([value]));
        }
    }
    DynamicImage::ImageLuma8(img)
}

#[test]
fn test_dimensions_match_declared_bounds() {
    let table = [(200u32, 200u32), (6, 6), (256, 256), (640, 480)];

    for (width, height) in table {
        let img = gray_image(width, height, 127);
        assert_eq!(dimensions(&img), Dimensions::new(width, height));
    }
}

#[test]
fn test_grayscale_classification() {
    assert!(is_grayscale(&gray_image(200, 200, 0)));
    assert!(is_grayscale(&checker_image()));
    assert!(!is_grayscale(&color_image(256, 256)));

    // RGB-encoded but channel-equal pixels still count as grayscale
    let encoded_gray = DynamicImage::ImageRgb8(
        RgbImage::from_pixel(16, 16, Rgb([90, 90, 90])));
    assert!(is_grayscale(&encoded_gray));
}

#[test]
fn test_grayscale_rejects_single_divergent_pixel() {
    let mut img = RgbImage::from_pixel(32, 32, Rgb([128, 128, 128]));
    img.put_pixel(31, 17, Rgb([128, 129, 128]));
    assert!(!is_grayscale(&DynamicImage::ImageRgb8(img)));
}

#[test]
fn test_verify_produces_tag_only_for_grayscale() {
    let gray = gray_image(8, 8, 42);
    assert!(GrayscaleRaster::verify(&gray).is_ok());

    let color = color_image(8, 8);
    match GrayscaleRaster::verify(&color) {
        Err(PatternError::NonGrayscaleImage(_)) => {}
        other => panic!("Expected NonGrayscaleImage, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_binarize_threshold_is_inclusive() {
    let table = [
        (120u8, 120u8, "1"),
        (214, 190, "1"),
        (150, 240, "0"),
        (0, 0, "1"),
        (255, 255, "1"),
        (0, 1, "0"),
    ];

    for (value, threshold, expected) in table {
        assert_eq!(binarize(value, threshold), expected,
                   "binarize({}, {})", value, threshold);
    }
}

#[test]
fn test_check_batch_empty_is_valid() {
    let images: Vec<DynamicImage> = Vec::new();
    assert!(check_batch(&images).is_ok());
}

#[test]
fn test_check_batch_single_grayscale_is_valid() {
    let images = vec![gray_image(200, 200, 10)];
    assert!(check_batch(&images).is_ok());
}

#[test]
fn test_check_batch_uniform_grayscale_is_valid() {
    let images = vec![
        gray_image(200, 200, 10),
        gray_image(200, 200, 240),
        gray_image(200, 200, 128),
    ];
    assert!(check_batch(&images).is_ok());
}

#[test]
fn test_check_batch_rejects_non_grayscale() {
    // Grayscale check runs before the size check, so the color image
    // wins even though the sizes also differ
    let images = vec![gray_image(200, 200, 10), color_image(256, 256)];
    match check_batch(&images) {
        Err(PatternError::NonGrayscaleImage(_)) => {}
        other => panic!("Expected NonGrayscaleImage, got {:?}", other),
    }
}

#[test]
fn test_check_batch_rejects_size_mismatch() {
    let images = vec![gray_image(200, 200, 10), checker_image()];
    match check_batch(&images) {
        Err(PatternError::SizeMismatch { expected, actual, .. }) => {
            assert_eq!(expected, Dimensions::new(200, 200));
            assert_eq!(actual, Dimensions::new(6, 6));
        }
        other => panic!("Expected SizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_pixel_grid_matches_source_pattern() {
    let img = checker_image();
    let verified = GrayscaleRaster::verify(&img).unwrap();
    let matrix = pixel_grid(&verified);

    assert_eq!(matrix.len(), 6);
    for (y, row) in matrix.iter().enumerate() {
        assert_eq!(row.len(), 6);
        for (x, &value) in row.iter().enumerate() {
            assert_eq!(value, CHECKER[y][x], "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_pixel_grid_shape_matches_dimensions() {
    let img = gray_image(17, 9, 77);
    let verified = GrayscaleRaster::verify(&img).unwrap();
    let matrix = pixel_grid(&verified);

    assert_eq!(matrix.len(), 9);
    assert!(matrix.iter().all(|row| row.len() == 17));
    assert!(matrix.iter().flatten().all(|&v| v == 77));
}

#[test]
fn test_binarize_matrix_row_major_order() {
    let img = checker_image();
    let verified = GrayscaleRaster::verify(&img).unwrap();
    let matrix = pixel_grid(&verified);

    let pattern = binarize_matrix(&matrix, 128);
    assert_eq!(pattern, "010101111110011011110110011111101010");
    assert_eq!(pattern.len(), 36);
}
