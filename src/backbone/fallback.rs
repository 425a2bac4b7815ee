//! Degraded-mode backbone for missing weight artifacts
//!
//! A demo or staging environment must stay usable when no ONNX file is
//! present, so the pipeline falls back to a randomly-initialized linear
//! head over per-channel pixel statistics. The output is deterministic
//! for a given head and input, but carries no real signal; construction
//! logs a warning that cannot be silenced.

use ndarray::Array4;
use rand::RngExt;

use super::{softmax, Backbone};
use crate::error::AnalysisError;
use crate::logger::{log, Level};

pub struct FallbackBackbone {
	// One weight per (class, channel) pair plus a per-class bias
	weights: Vec<f32>,
	biases: Vec<f32>,
	num_classes: usize,
}

impl FallbackBackbone {
	pub fn new(num_classes: usize) -> Self {
		log(
			Level::Warning,
			&format!(
				"No backbone weights found, using randomly initialized head ({} classes). Predictions are unreliable",
				num_classes
			),
		);

		let mut rng = rand::rng();
		let weights = (0..num_classes * 3)
			.map(|_| rng.random_range(-1.0..1.0))
			.collect();
		let biases = (0..num_classes)
			.map(|_| rng.random_range(-0.1..0.1))
			.collect();

		Self { weights, biases, num_classes }
	}
}

impl Backbone for FallbackBackbone {
	fn classify(&mut self, input: &Array4<f32>) -> Result<Vec<f32>, AnalysisError> {
		if self.num_classes == 0 {
			return Err(AnalysisError::InsufficientData("fallback head has no classes"));
		}

		// Mean activation per channel is the only feature
		let pixels = (input.shape()[2] * input.shape()[3]) as f32;
		let mut channel_means = [0.0f32; 3];
		for (c, mean) in channel_means.iter_mut().enumerate() {
			*mean = input.slice(ndarray::s![0, c, .., ..]).sum() / pixels;
		}

		let logits: Vec<f32> = (0..self.num_classes)
			.map(|i| {
				let w = &self.weights[i * 3..i * 3 + 3];
				self.biases[i]
					+ w.iter().zip(channel_means.iter()).map(|(a, b)| a * b).sum::<f32>()
			})
			.collect();

		Ok(softmax(&logits))
	}
}
