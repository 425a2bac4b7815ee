// Normalizer shape, range, and decode failure behavior

use image::{DynamicImage, Rgb, RgbImage};
use mealscan::config::{CROP_SIZE, IMAGE_MEAN, IMAGE_STD};
use mealscan::error::AnalysisError;
use mealscan::normalize::{decode, normalize, prepare};

fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
}

fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode");
    buf
}

#[test]
fn output_shape_is_fixed_for_any_resolution() {
    let size = CROP_SIZE as usize;
    for (w, h) in [(640, 480), (480, 640), (100, 100), (224, 224), (1000, 260)] {
        let tensor = normalize(&solid_image(w, h, [120, 80, 200]));
        assert_eq!(
            tensor.shape(),
            &[1, 3, size, size],
            "unexpected shape for {}x{} input",
            w,
            h
        );
    }
}

#[test]
fn values_stay_in_the_normalized_range() {
    let tensor = normalize(&solid_image(320, 200, [255, 0, 128]));

    for c in 0..3 {
        let lo = (0.0 - IMAGE_MEAN[c]) / IMAGE_STD[c];
        let hi = (1.0 - IMAGE_MEAN[c]) / IMAGE_STD[c];
        for v in tensor.slice(ndarray::s![0, c, .., ..]).iter() {
            assert!(
                *v >= lo - 1e-4 && *v <= hi + 1e-4,
                "channel {} value {} outside [{}, {}]",
                c,
                v,
                lo,
                hi
            );
        }
    }
}

#[test]
fn solid_color_normalizes_to_the_expected_constant() {
    let tensor = normalize(&solid_image(300, 300, [255, 255, 255]));

    for c in 0..3 {
        let expected = (1.0 - IMAGE_MEAN[c]) / IMAGE_STD[c];
        let got = tensor[[0, c, 0, 0]];
        assert!(
            (got - expected).abs() < 1e-3,
            "channel {}: got {}, expected {}",
            c,
            got,
            expected
        );
    }
}

#[test]
fn decode_accepts_valid_png_bytes() {
    let bytes = png_bytes(&solid_image(64, 64, [10, 20, 30]));
    let img = decode(&bytes).expect("valid png should decode");
    assert_eq!(img.width(), 64);
}

#[test]
fn decode_rejects_garbage_bytes() {
    let err = decode(b"definitely not an image").unwrap_err();
    assert!(matches!(err, AnalysisError::Decode(_)));
}

#[test]
fn decode_rejects_truncated_bytes() {
    let mut bytes = png_bytes(&solid_image(64, 64, [10, 20, 30]));
    bytes.truncate(bytes.len() / 2);
    assert!(decode(&bytes).is_err());
}

#[test]
fn prepare_runs_decode_and_normalize_together() {
    let bytes = png_bytes(&solid_image(640, 480, [1, 2, 3]));
    let tensor = prepare(&bytes).expect("prepare");
    let size = CROP_SIZE as usize;
    assert_eq!(tensor.shape(), &[1, 3, size, size]);
}
