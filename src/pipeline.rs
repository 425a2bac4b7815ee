//! Pipeline orchestrator
//!
//! Owns the loaded backbone, label vocabulary, and gate strategy for the
//! process lifetime and sequences the stages:
//! bytes → tensor → distribution → {verdict, candidates} → portion →
//! merged result. The flow is strictly linear and short-circuits on a
//! non-food verdict; portion and downstream nutrition steps are
//! meaningless for non-food input.

use image::DynamicImage;

use crate::backbone::{Backbone, BackboneKind, FallbackBackbone, OnnxBackbone};
use crate::cli::{BackboneChoice, GateChoice};
use crate::config;
use crate::error::AnalysisError;
use crate::gatekeeper::{ForcedAcceptGate, Gate, KeywordGate, ModelGate};
use crate::labels::LabelVocabulary;
use crate::logger::{log, Level};
use crate::normalize;
use crate::portion;
use crate::ranker;
use crate::types::AnalysisResult;

/// Food name reported for rejected images.
pub const NON_FOOD_NAME: &str = "non-food";

pub struct PipelineOptions {
	pub backbone: BackboneChoice,
	pub gate: GateChoice,
	pub top_k: usize,
}

impl Default for PipelineOptions {
	fn default() -> Self {
		Self {
			backbone: BackboneChoice::Auto,
			gate: GateChoice::Auto,
			top_k: config::DEFAULT_TOP_K,
		}
	}
}

pub struct Pipeline {
	backbone: Box<dyn Backbone>,
	vocab: LabelVocabulary,
	gate: Box<dyn Gate>,
	top_k: usize,
}

impl Pipeline {
	/// Load models and vocabulary according to the options.
	///
	/// Missing artifacts put the pipeline into a documented degraded mode
	/// (fallback head, placeholder labels, forced accept) with a visible
	/// warning rather than refusing to start.
	pub fn load(opts: &PipelineOptions) -> Result<Self, AnalysisError> {
		let kind = resolve_kind(opts.backbone);
		log(Level::Debug, &format!("Selected {} backbone", kind));

		let vocab = resolve_vocabulary(kind);
		let backbone = resolve_backbone(kind, vocab.len())?;
		let gate = resolve_gate(opts.gate, kind)?;

		log(Level::Debug, &format!("Gate strategy: {}", gate.name()));

		Ok(Self { backbone, vocab, gate, top_k: opts.top_k })
	}

	/// Assemble a pipeline from explicit parts. Used by tests to
	/// substitute fixture backbones and vocabularies.
	pub fn with_parts(
		backbone: Box<dyn Backbone>,
		vocab: LabelVocabulary,
		gate: Box<dyn Gate>,
		top_k: usize,
	) -> Self {
		Self { backbone, vocab, gate, top_k }
	}

	pub fn vocabulary(&self) -> &LabelVocabulary {
		&self.vocab
	}

	/// Analyze encoded image bytes.
	///
	/// All-or-nothing: any decode or inference failure aborts the request
	/// and no partial result is returned.
	pub fn analyze(&mut self, bytes: &[u8]) -> Result<AnalysisResult, AnalysisError> {
		let img = normalize::decode(bytes)?;
		self.analyze_image(&img)
	}

	/// Analyze an already-decoded image.
	pub fn analyze_image(&mut self, img: &DynamicImage) -> Result<AnalysisResult, AnalysisError> {
		let tensor = normalize::normalize(img);
		let probs = self.backbone.classify(&tensor)?;

		if probs.len() != self.vocab.len() {
			log(
				Level::Debug,
				&format!(
					"Distribution length {} does not match vocabulary length {}",
					probs.len(),
					self.vocab.len()
				),
			);
		}

		let ranked = ranker::rank(&probs, &self.vocab, self.top_k)?;
		let verdict = self.gate.decide(&tensor, &ranked.candidates)?;

		if !verdict.is_food {
			// Candidates are still included for transparency, but no
			// portion is computed for a rejected image.
			return Ok(AnalysisResult {
				is_food: false,
				food_name: NON_FOOD_NAME.to_string(),
				confidence: ranked.primary.confidence,
				candidates: ranked.candidates,
				portion: None,
			});
		}

		let portion = portion::estimate(&ranked.primary.display_name);

		Ok(AnalysisResult {
			is_food: true,
			food_name: ranked.primary.display_name.clone(),
			confidence: ranked.primary.confidence,
			candidates: ranked.candidates,
			portion: Some(portion),
		})
	}
}

/// Pick the backbone variant: an explicit choice wins, `Auto` prefers
/// the specialist artifact when it exists on disk.
pub fn resolve_kind(choice: BackboneChoice) -> BackboneKind {
	match choice {
		BackboneChoice::Specialist => BackboneKind::Specialist,
		BackboneChoice::Generalist => BackboneKind::Generalist,
		BackboneChoice::Auto => {
			let specialist_present = config::backbone_model_path(config::SPECIALIST_MODEL)
				.map(|p| p.exists())
				.unwrap_or(false);
			if specialist_present {
				BackboneKind::Specialist
			} else {
				BackboneKind::Generalist
			}
		}
	}
}

fn default_classes(kind: BackboneKind) -> usize {
	match kind {
		BackboneKind::Specialist => config::SPECIALIST_CLASSES,
		BackboneKind::Generalist => config::GENERALIST_CLASSES,
	}
}

/// Resolve the label vocabulary for a backbone variant, falling back to
/// index-as-name placeholders when no file is available.
pub fn resolve_vocabulary(kind: BackboneKind) -> LabelVocabulary {
	let default_name = match kind {
		BackboneKind::Specialist => config::SPECIALIST_LABELS,
		BackboneKind::Generalist => config::GENERALIST_LABELS,
	};

	let Some(path) = config::labels_path(default_name) else {
		log(
			Level::Warning,
			"No models directory found, labels fall back to class_<i> placeholders",
		);
		return LabelVocabulary::placeholder(default_classes(kind));
	};

	match LabelVocabulary::from_file(&path) {
		Ok(vocab) => {
			log(Level::Debug, &format!("Loaded {} labels from {}", vocab.len(), path.display()));
			vocab
		}
		Err(e) => {
			log(
				Level::Warning,
				&format!("Could not load labels ({}), using class_<i> placeholders", e),
			);
			LabelVocabulary::placeholder(default_classes(kind))
		}
	}
}

fn resolve_backbone(
	kind: BackboneKind,
	num_classes: usize,
) -> Result<Box<dyn Backbone>, AnalysisError> {
	let default_name = match kind {
		BackboneKind::Specialist => config::SPECIALIST_MODEL,
		BackboneKind::Generalist => config::GENERALIST_MODEL,
	};

	match config::backbone_model_path(default_name) {
		Some(path) if path.exists() => {
			log(Level::Debug, &format!("Loading backbone: {}", path.display()));
			Ok(Box::new(OnnxBackbone::load(&path)?))
		}
		_ => Ok(Box::new(FallbackBackbone::new(num_classes))),
	}
}

fn resolve_gate(choice: GateChoice, kind: BackboneKind) -> Result<Box<dyn Gate>, AnalysisError> {
	match choice {
		GateChoice::Keyword => {
			if kind == BackboneKind::Specialist {
				// Every specialist label is a food word, so this gate
				// degenerates to accept-almost-everything.
				log(
					Level::Warning,
					"Keyword gate over a food-only vocabulary cannot reject non-food images",
				);
			}
			Ok(Box::new(KeywordGate))
		}
		GateChoice::Forced => {
			log(Level::Warning, "Gatekeeper disabled: every image will be treated as food");
			Ok(Box::new(ForcedAcceptGate))
		}
		GateChoice::Model => load_model_gate(),
		GateChoice::Auto => match kind {
			BackboneKind::Generalist => Ok(Box::new(KeywordGate)),
			BackboneKind::Specialist => load_model_gate(),
		},
	}
}

fn load_model_gate() -> Result<Box<dyn Gate>, AnalysisError> {
	match config::gate_model_path() {
		Some(path) if path.exists() => {
			log(Level::Debug, &format!("Loading gate model: {}", path.display()));
			Ok(Box::new(ModelGate::load(&path)?))
		}
		_ => {
			log(
				Level::Warning,
				&format!(
					"Gate model {} not found, falling back to forced accept",
					config::GATE_MODEL
				),
			);
			Ok(Box::new(ForcedAcceptGate))
		}
	}
}
