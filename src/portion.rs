//! Portion estimation - keyword heuristics for serving weight
//!
//! No depth or reference-object information is available from a single
//! photo, so serving weight comes from a curated table of standard
//! portions keyed by food keyword.

use crate::types::PortionEstimate;

pub const DEFAULT_WEIGHT_GRAMS: u32 = 300;

/// Fixed confidence for every estimate: it reflects that a heuristic was
/// applied at all, not nutritional precision.
pub const PORTION_CONFIDENCE: f32 = 0.8;

// Average serving weights in grams, based on standard serving sizes.
// The table is an ordered slice and lookup takes the FIRST containing
// keyword, so specific compound terms must precede the general terms
// they contain ("french toast" before "toast", "steak" before "tea").
const PORTION_TABLE: &[(&str, u32)] = &[
	("french toast", 150),
	("ice cream", 150),   // Scoop
	("pizza", 200),       // One large slice
	("burger", 250),      // Standard burger
	("sandwich", 200),
	("steak", 300),       // 10-12oz raw equivalent
	("chicken", 200),     // Breast/Leg
	("salad", 250),       // Medium bowl
	("soup", 350),        // Bowl
	("pasta", 300),       // Cooked bowl
	("rice", 200),        // Cup cooked
	("sushi", 200),       // 6-8 pieces
	("cake", 100),        // Slice
	("fruit", 150),       // Medium apple/orange
	("coffee", 300),      // Mug
	("tea", 300),
	("beer", 350),        // Can/Bottle
	("wine", 150),        // Glass
	("soda", 350),
	("egg", 100),         // 2 eggs
	("toast", 60),        // 2 slices
	("bread", 60),
];

/// Estimate a serving weight from a food display name.
///
/// The name is lower-cased and tested against each table keyword in
/// order; first match wins. Unmatched names get the default weight with
/// the same fixed confidence.
pub fn estimate(food_name: &str) -> PortionEstimate {
	let lowered = food_name.to_lowercase();

	let grams = PORTION_TABLE
		.iter()
		.find(|(keyword, _)| lowered.contains(keyword))
		.map(|(_, grams)| *grams)
		.unwrap_or(DEFAULT_WEIGHT_GRAMS);

	PortionEstimate {
		size_label: size_label(grams).to_string(),
		estimated_weight_grams: grams,
		confidence: PORTION_CONFIDENCE,
	}
}

fn size_label(grams: u32) -> &'static str {
	match grams {
		0..=120 => "small",
		121..=250 => "medium",
		_ => "large",
	}
}
