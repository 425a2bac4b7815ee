//! Core domain types
//!
//! This module defines the types passed between pipeline stages:
//! - `Candidate`: one (label, confidence) pair from the classifier
//! - `ClassificationResult`: the ranked top-K slice of the distribution
//! - `GateVerdict`: the food/non-food decision and how it was reached
//! - `PortionEstimate`: heuristic serving weight for a food name
//! - `AnalysisResult`: the merged output handed back to the caller
//!
//! All of these are created fresh per request and discarded after the
//! response is produced.

use serde::Serialize;

/// One classifier output among the top-K.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
	/// Human-formatted name ("hot_pot" → "Hot Pot")
	#[serde(rename = "food")]
	pub display_name: String,
	/// Raw model label as it appears in the vocabulary
	#[serde(rename = "class")]
	pub label: String,
	/// Probability in [0, 1] from the full distribution
	pub confidence: f32,
}

/// Ranked classification output.
///
/// `candidates` is strictly descending by confidence and `primary` is a
/// copy of `candidates[0]`. The confidences are a slice of a distribution
/// that sums to 1, so the K returned need not sum to 1 themselves.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
	pub candidates: Vec<Candidate>,
	pub primary: Candidate,
}

/// How a gate verdict was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GateReason {
	/// A dedicated binary food/non-food model scored the image
	ModelScore,
	/// The allow/deny keyword lists matched the top-1 label
	KeywordMatch,
	/// No reliable signal available; the gate accepts everything
	ForcedAccept,
}

/// Food/non-food decision, computed once per request.
#[derive(Debug, Clone, Copy)]
pub struct GateVerdict {
	pub is_food: bool,
	pub reason: GateReason,
}

/// Heuristic serving-weight estimate derived from a food display name.
#[derive(Debug, Clone, Serialize)]
pub struct PortionEstimate {
	#[serde(rename = "portionSize")]
	pub size_label: String,
	#[serde(rename = "estimatedWeightGrams")]
	pub estimated_weight_grams: u32,
	/// Reflects that a heuristic was applied at all, not nutritional
	/// precision. Not part of the wire format.
	#[serde(skip)]
	pub confidence: f32,
}

/// Merged pipeline output.
///
/// Serializes to the flat wire shape consumed by the meal-ingestion
/// collaborator: `{isFood, foodName, confidence, candidates,
/// portionSize, estimatedWeightGrams}`. The portion fields are absent
/// when the gatekeeper rejected the image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
	pub is_food: bool,
	pub food_name: String,
	pub confidence: f32,
	pub candidates: Vec<Candidate>,
	#[serde(flatten)]
	pub portion: Option<PortionEstimate>,
}
