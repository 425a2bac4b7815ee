//! Image normalization - bytes to backbone input tensor

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

use crate::config::{CROP_SIZE, IMAGE_MEAN, IMAGE_STD, RESIZE_TARGET};
use crate::error::AnalysisError;

/// Decode raw JPEG/PNG bytes into an image.
///
/// A decode failure aborts the whole pipeline: a mis-decoded tensor would
/// silently corrupt every downstream confidence.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, AnalysisError> {
	image::load_from_memory(bytes).map_err(AnalysisError::Decode)
}

/// Convert an image into the backbone's expected NCHW input tensor.
///
/// Fixed order: resize shortest side to 256, center-crop 224x224, RGB,
/// scale to [0, 1], then normalize per channel with the ImageNet
/// mean/std vector. Output shape is always [1, 3, 224, 224].
pub fn normalize(img: &DynamicImage) -> Array4<f32> {
	let (w, h) = (img.width(), img.height());

	// Shortest side becomes exactly RESIZE_TARGET, the other scales with it
	let (rw, rh) = if w <= h {
		let rh = ((h as f32 * RESIZE_TARGET as f32) / w as f32).round() as u32;
		(RESIZE_TARGET, rh.max(RESIZE_TARGET))
	} else {
		let rw = ((w as f32 * RESIZE_TARGET as f32) / h as f32).round() as u32;
		(rw.max(RESIZE_TARGET), RESIZE_TARGET)
	};

	let resized = img.resize_exact(rw, rh, FilterType::CatmullRom);

	let left = (rw - CROP_SIZE) / 2;
	let top = (rh - CROP_SIZE) / 2;
	let rgb = resized.crop_imm(left, top, CROP_SIZE, CROP_SIZE).to_rgb8();

	let size = CROP_SIZE as usize;
	let mut tensor = Array4::<f32>::zeros((1, 3, size, size));

	for y in 0..size {
		for x in 0..size {
			let px = rgb.get_pixel(x as u32, y as u32);
			for c in 0..3 {
				let scaled = px[c] as f32 / 255.0;
				tensor[[0, c, y, x]] = (scaled - IMAGE_MEAN[c]) / IMAGE_STD[c];
			}
		}
	}

	tensor
}

/// Decode and normalize in one step.
pub fn prepare(bytes: &[u8]) -> Result<Array4<f32>, AnalysisError> {
	Ok(normalize(&decode(bytes)?))
}
