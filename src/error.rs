//! Error taxonomy for the analysis pipeline

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors that can occur while analyzing a meal photo.
///
/// `Decode` and `Inference` abort the current request and surface to the
/// caller unchanged. `ModelUnavailable` is recovered at load time into a
/// degraded mode (fallback weights, placeholder labels) with a visible
/// warning. `InsufficientData` marks an internal invariant violation that
/// is fatal to the request, not the process.
#[derive(Debug)]
pub enum AnalysisError {
	/// Input bytes are not a decodable JPEG/PNG image.
	Decode(image::ImageError),
	/// A required model artifact is missing on disk.
	ModelUnavailable(PathBuf),
	/// An internal stage received data it cannot act on.
	InsufficientData(&'static str),
	/// ONNX Runtime failed during session creation or inference.
	Inference(ort::Error),
	/// The label vocabulary file exists but could not be parsed.
	Vocabulary(String),
	Io(std::io::Error),
}

impl Display for AnalysisError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Decode(e) => write!(f, "image decode failed: {}", e),
			Self::ModelUnavailable(path) => {
				write!(f, "model artifact not found: {}", path.display())
			}
			Self::InsufficientData(msg) => write!(f, "insufficient data: {}", msg),
			Self::Inference(e) => write!(f, "inference error: {}", e),
			Self::Vocabulary(msg) => write!(f, "invalid label vocabulary: {}", msg),
			Self::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for AnalysisError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Decode(e) => Some(e),
			Self::Inference(e) => Some(e),
			Self::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<image::ImageError> for AnalysisError {
	fn from(e: image::ImageError) -> Self {
		Self::Decode(e)
	}
}

impl From<ort::Error> for AnalysisError {
	fn from(e: ort::Error) -> Self {
		Self::Inference(e)
	}
}

impl From<ort::Error<ort::session::builder::SessionBuilder>> for AnalysisError {
	fn from(e: ort::Error<ort::session::builder::SessionBuilder>) -> Self {
		Self::Inference(e.into())
	}
}

impl From<std::io::Error> for AnalysisError {
	fn from(e: std::io::Error) -> Self {
		Self::Io(e)
	}
}

impl AnalysisError {
	/// Whether the error is caused by bad caller input (a 4xx-equivalent)
	/// rather than a server-side failure.
	pub fn is_caller_fault(&self) -> bool {
		matches!(self, Self::Decode(_))
	}
}
