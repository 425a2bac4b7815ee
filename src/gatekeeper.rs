//! Gatekeeper - food/non-food policy
//!
//! Three interchangeable strategies behind one trait, selected once at
//! startup: keyword matching on the top-1 generalist label, a dedicated
//! binary ONNX model, and an explicit forced-accept escape hatch.

use ndarray::Array4;
use ort::session::Session;
use std::path::Path;

use crate::config::GATE_THRESHOLD;
use crate::error::AnalysisError;
use crate::logger;
use crate::types::{Candidate, GateReason, GateVerdict};

/// Single polymorphic capability shared by all strategies.
///
/// A strategy may inspect the ranked candidates (keyword), the normalized
/// image tensor (binary model), or neither (forced accept).
pub trait Gate {
	fn decide(
		&mut self,
		image: &Array4<f32>,
		candidates: &[Candidate],
	) -> Result<GateVerdict, AnalysisError>;

	fn name(&self) -> &'static str;
}

// Rule lists are ordered slices, not sets: precedence is part of the
// contract. Compound overrides run first so that food terms containing a
// denied substring ("hot dog", "carbonara") survive the deny pass.
const COMPOUND_FOOD_TERMS: &[&str] = &[
	"hot dog",
	"hotdog",
	"corn dog",
	"carbonara",
	"carrot",
	"cardoon",
	"catfish",
];

// Confusable non-food terms. The deny pass runs before the allow pass,
// trading false negatives for false positives: in a coaching product it
// is worse to log a chihuahua as a muffin than to miss a muffin.
const DENY_TERMS: &[&str] = &[
	"dog",
	"cat",
	"horse",
	"teddy",
	"car",
	"truck",
	"bicycle",
	"motorcycle",
	"laptop",
	"keyboard",
	"monitor",
	"phone",
	"chair",
	"couch",
	"television",
	"remote",
	"bottle cap",
];

const FOOD_TERMS: &[&str] = &[
	"food", "fruit", "vegetable", "meat", "bread", "cake", "pizza", "burger",
	"sandwich", "salad", "soup", "pasta", "rice", "noodle", "sushi", "egg",
	"cheese", "milk", "butter", "cream", "chocolate", "candy", "cookie",
	"pie", "donut", "muffin", "croissant", "bagel", "baguette", "pretzel",
	"waffle", "pancake", "toast", "apple", "orange", "banana", "grape",
	"strawberry", "cherry", "peach", "pear", "watermelon", "pineapple",
	"mango", "lemon", "fig", "pomegranate", "avocado", "tomato", "potato",
	"broccoli", "cauliflower", "lettuce", "onion", "pepper", "mushroom",
	"corn", "bean", "cucumber", "eggplant", "zucchini", "squash", "pumpkin",
	"cabbage", "spinach", "celery", "garlic", "steak", "chicken", "bacon",
	"shrimp", "lobster", "meatloaf", "burrito", "taco", "guacamole",
	"espresso", "coffee", "wine", "beer", "eggnog", "consomme", "trifle",
	"dough", "pot pie", "hot pot", "mashed potato", "artichoke",
];

/// Keyword strategy for the generalist backbone.
///
/// The top-1 raw label is lower-cased and underscore-stripped, then run
/// through the rule lists in fixed order. This is a precise
/// string-containment test, not a semantic one.
pub struct KeywordGate;

impl Gate for KeywordGate {
	fn decide(
		&mut self,
		_image: &Array4<f32>,
		candidates: &[Candidate],
	) -> Result<GateVerdict, AnalysisError> {
		let top = candidates
			.first()
			.ok_or(AnalysisError::InsufficientData("gatekeeper received no candidates"))?;

		let label = top.label.to_lowercase().replace('_', " ");
		let is_food = decide_label(&label);

		logger::debug(&format!(
			"Keyword gate: \"{}\" -> {}",
			label,
			if is_food { "food" } else { "non-food" }
		));

		Ok(GateVerdict { is_food, reason: GateReason::KeywordMatch })
	}

	fn name(&self) -> &'static str {
		"keyword"
	}
}

fn decide_label(label: &str) -> bool {
	if COMPOUND_FOOD_TERMS.iter().any(|t| label.contains(t)) {
		return true;
	}
	if DENY_TERMS.iter().any(|t| label.contains(t)) {
		return false;
	}
	FOOD_TERMS.iter().any(|t| label.contains(t))
}

/// Dedicated binary food/non-food classifier (2 outputs, food at index 1).
///
/// Runs on the same normalized tensor as the backbone; both use the
/// 256/224 ImageNet transform.
pub struct ModelGate {
	session: Session,
}

impl ModelGate {
	pub fn load(model_path: &Path) -> Result<Self, AnalysisError> {
		let session = crate::runtime::create_session(model_path)?;
		Ok(Self { session })
	}
}

impl Gate for ModelGate {
	fn decide(
		&mut self,
		image: &Array4<f32>,
		_candidates: &[Candidate],
	) -> Result<GateVerdict, AnalysisError> {
		let input_name = self
			.session
			.inputs()
			.first()
			.map(|i| i.name().to_string())
			.unwrap_or_else(|| "input".to_string());

		let tensor = ort::value::Value::from_array(image.clone().into_dyn())?;
		let outputs = self.session.run(ort::inputs![input_name => tensor])?;

		let output = outputs
			.values()
			.next()
			.ok_or(AnalysisError::InsufficientData("gate model produced no output"))?;

		let (_, raw) = output.try_extract_tensor::<f32>()?;
		let probs = crate::backbone::softmax(raw);
		let food_prob = *probs
			.get(1)
			.ok_or(AnalysisError::InsufficientData("gate model output is not binary"))?;

		logger::debug(&format!("Model gate: food probability {:.3}", food_prob));

		Ok(GateVerdict {
			is_food: food_prob > GATE_THRESHOLD,
			reason: GateReason::ModelScore,
		})
	}

	fn name(&self) -> &'static str {
		"model"
	}
}

/// Escape hatch for setups with no reliable binary signal (a specialist
/// backbone with no trained gate model). Always answers food, and the
/// verdict reason makes that visible downstream.
pub struct ForcedAcceptGate;

impl Gate for ForcedAcceptGate {
	fn decide(
		&mut self,
		_image: &Array4<f32>,
		_candidates: &[Candidate],
	) -> Result<GateVerdict, AnalysisError> {
		Ok(GateVerdict { is_food: true, reason: GateReason::ForcedAccept })
	}

	fn name(&self) -> &'static str {
		"forced-accept"
	}
}
