//! Label vocabulary loading
//!
//! The vocabulary is an ordered list of label strings where index `i`
//! names the backbone's output logit `i`. It is loaded once at startup
//! and immutable afterwards. Two file formats are supported: a JSON
//! array (optionally wrapped in `{"labels": [...]}`) and plain text with
//! one label per line. When no file is available the pipeline runs with
//! `class_<i>` placeholders instead of crashing.

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

#[derive(Debug, Clone)]
pub struct LabelVocabulary {
	labels: Vec<String>,
	placeholder: bool,
}

impl LabelVocabulary {
	pub fn new(labels: Vec<String>) -> Self {
		Self { labels, placeholder: false }
	}

	/// Generic `class_<i>` names for degraded mode.
	pub fn placeholder(count: usize) -> Self {
		let labels = (0..count).map(|i| format!("class_{}", i)).collect();
		Self { labels, placeholder: true }
	}

	/// Load a vocabulary file, picking the parser by extension.
	pub fn from_file(path: &Path) -> Result<Self, AnalysisError> {
		if !path.exists() {
			return Err(AnalysisError::ModelUnavailable(path.to_path_buf()));
		}

		let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
		let labels = match ext.to_lowercase().as_str() {
			"json" => parse_json(path)?,
			_ => parse_text(path)?,
		};

		if labels.is_empty() {
			return Err(AnalysisError::Vocabulary(format!(
				"no labels found in {}",
				path.display()
			)));
		}

		Ok(Self::new(labels))
	}

	pub fn len(&self) -> usize {
		self.labels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.labels.is_empty()
	}

	pub fn is_placeholder(&self) -> bool {
		self.placeholder
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.labels.get(index).map(String::as_str)
	}

	/// Label for an output index, falling back to an index-as-name
	/// placeholder when the vocabulary is shorter than the distribution.
	pub fn name_for(&self, index: usize) -> String {
		match self.labels.get(index) {
			Some(label) => label.clone(),
			None => format!("class_{}", index),
		}
	}

	pub fn as_slice(&self) -> &[String] {
		&self.labels
	}
}

fn parse_text(path: &Path) -> Result<Vec<String>, AnalysisError> {
	let content = fs::read_to_string(path)?;
	Ok(content
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(String::from)
		.collect())
}

fn parse_json(path: &Path) -> Result<Vec<String>, AnalysisError> {
	let content = fs::read_to_string(path)?;

	if let Ok(labels) = serde_json::from_str::<Vec<String>>(&content) {
		return Ok(labels);
	}

	#[derive(serde::Deserialize)]
	struct LabelsObject {
		labels: Vec<String>,
	}

	serde_json::from_str::<LabelsObject>(&content)
		.map(|obj| obj.labels)
		.map_err(|e| {
			AnalysisError::Vocabulary(format!("{}: {}", path.display(), e))
		})
}
