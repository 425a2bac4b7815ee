//! # Backbone Classifiers
//!
//! The convolutional network producing a probability distribution over
//! the label vocabulary, used strictly in inference mode. Two ONNX
//! variants are supported plus a degraded-mode fallback.

pub mod fallback;
pub mod onnx;

use ndarray::Array4;

use crate::error::AnalysisError;

pub use fallback::FallbackBackbone;
pub use onnx::OnnxBackbone;

/// Which vocabulary the backbone was trained on.
///
/// The specialist knows only food classes and assumes every input is
/// food, so it must never be the sole food/non-food signal. The
/// generalist's vocabulary includes non-food classes, which enables the
/// keyword rejection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackboneKind {
	Specialist,
	Generalist,
}

impl std::fmt::Display for BackboneKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Specialist => write!(f, "specialist"),
			Self::Generalist => write!(f, "generalist"),
		}
	}
}

/// Forward pass over a normalized image tensor.
///
/// Implementations take `&mut self` because `ort` sessions require it;
/// callers own one backbone per worker and share nothing mutable.
pub trait Backbone {
	fn classify(&mut self, input: &Array4<f32>) -> Result<Vec<f32>, AnalysisError>;
}

/// Numerically-stable softmax for converting logits to probabilities.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
	let max_val = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
	let exp_vals: Vec<f32> = logits.iter().map(|x| (x - max_val).exp()).collect();
	let sum: f32 = exp_vals.iter().sum();
	exp_vals.iter().map(|x| x / sum).collect()
}
