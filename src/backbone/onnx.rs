//! ONNX backbone - pretrained or fine-tuned convolutional classifier

use ndarray::Array4;
use ort::session::Session;
use std::path::Path;

use super::{softmax, Backbone};
use crate::error::AnalysisError;
use crate::logger;

pub struct OnnxBackbone {
	session: Session,
}

impl OnnxBackbone {
	pub fn load(model_path: &Path) -> Result<Self, AnalysisError> {
		let session = crate::runtime::create_session(model_path)?;
		Ok(Self { session })
	}
}

impl Backbone for OnnxBackbone {
	fn classify(&mut self, input: &Array4<f32>) -> Result<Vec<f32>, AnalysisError> {
		logger::debug("Running backbone inference");

		let input_name = self
			.session
			.inputs()
			.first()
			.map(|i| i.name().to_string())
			.unwrap_or_else(|| "input".to_string());

		let tensor = ort::value::Value::from_array(input.clone().into_dyn())?;
		let outputs = self.session.run(ort::inputs![input_name => tensor])?;

		let output = outputs
			.values()
			.next()
			.ok_or(AnalysisError::InsufficientData("model produced no output tensor"))?;

		let (_, raw) = output.try_extract_tensor::<f32>()?;
		let logits = raw.to_vec();

		if logits.is_empty() {
			return Err(AnalysisError::InsufficientData("model output is empty"));
		}

		// Some exported models bake the softmax into the graph; skip it
		// when the output already sums to ~1.
		let sum: f32 = logits.iter().sum();
		if (sum - 1.0).abs() < 0.01 {
			Ok(logits)
		} else {
			Ok(softmax(&logits))
		}
	}
}
