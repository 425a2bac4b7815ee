//! Candidate ranking - top-K selection and display formatting

use std::cmp::Ordering;

use crate::error::AnalysisError;
use crate::labels::LabelVocabulary;
use crate::types::{Candidate, ClassificationResult};

/// Select the k highest-probability entries of a distribution.
///
/// Ties are broken by lower vocabulary index so the result is stable and
/// deterministic regardless of how the distribution was produced. Returns
/// at most min(k, distribution length) entries; k = 0 yields an empty
/// sequence.
pub fn top_k(probs: &[f32], k: usize) -> Vec<(usize, f32)> {
	if k == 0 {
		return Vec::new();
	}

	let mut indexed: Vec<(usize, f32)> = probs.iter().copied().enumerate().collect();
	indexed.sort_by(|a, b| {
		b.1.partial_cmp(&a.1)
			.unwrap_or(Ordering::Equal)
			.then_with(|| a.0.cmp(&b.0))
	});
	indexed.truncate(k);
	indexed
}

/// Format a raw model label into a human-readable name.
///
/// Separator characters become spaces and each word is capitalized:
/// "hot_pot" -> "Hot Pot", "ice-cream" -> "Ice Cream".
pub fn display_name(label: &str) -> String {
	label
		.split(['_', '-', ' '])
		.filter(|word| !word.is_empty())
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Rank a distribution into the top-K candidate list.
///
/// The vocabulary is injected by the pipeline rather than read from a
/// global so tests can substitute fixtures. Fails with
/// `InsufficientData` when no candidate can be produced (empty
/// distribution or k = 0), since downstream stages require a primary.
pub fn rank(
	probs: &[f32],
	vocab: &LabelVocabulary,
	k: usize,
) -> Result<ClassificationResult, AnalysisError> {
	let candidates: Vec<Candidate> = top_k(probs, k)
		.into_iter()
		.map(|(index, confidence)| {
			let label = vocab.name_for(index);
			Candidate {
				display_name: display_name(&label),
				label,
				confidence,
			}
		})
		.collect();

	let primary = candidates
		.first()
		.cloned()
		.ok_or(AnalysisError::InsufficientData("classifier produced no candidates"))?;

	Ok(ClassificationResult { candidates, primary })
}
