//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_MODELS_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_MODEL: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_LABELS: OnceLock<PathBuf> = OnceLock::new();

// === Model Files ===
pub const SPECIALIST_MODEL: &str = "food101.onnx";
pub const SPECIALIST_LABELS: &str = "food101_labels.json";
pub const GENERALIST_MODEL: &str = "mobilenet_imagenet.onnx";
pub const GENERALIST_LABELS: &str = "imagenet_labels.txt";
pub const GATE_MODEL: &str = "gatekeeper.onnx";

// === Vocabulary Sizes ===
pub const SPECIALIST_CLASSES: usize = 101;
pub const GENERALIST_CLASSES: usize = 1000;

// === Input Preprocessing ===
// Shortest side is resized to RESIZE_TARGET, then center-cropped to
// CROP_SIZE. Mean/std match the backbone's training distribution
// (ImageNet, RGB order).
pub const RESIZE_TARGET: u32 = 256;
pub const CROP_SIZE: u32 = 224;
pub const IMAGE_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGE_STD: [f32; 3] = [0.229, 0.224, 0.225];

// === Decision Defaults ===
pub const DEFAULT_TOP_K: usize = 3;
pub const GATE_THRESHOLD: f32 = 0.5;

pub fn set_models_dir(path: PathBuf) {
	let _ = CUSTOM_MODELS_DIR.set(path);
}

pub fn set_model_path(path: PathBuf) {
	let _ = CUSTOM_MODEL.set(path);
}

pub fn set_labels_path(path: PathBuf) {
	let _ = CUSTOM_LABELS.set(path);
}

/// Get models directory (--models-dir flag, MEALSCAN_MODELS_DIR env var,
/// or a `models` directory next to the executable)
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODELS_DIR.get() {
		crate::logger::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var("MEALSCAN_MODELS_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::logger::debug(&format!("Using MEALSCAN_MODELS_DIR: {}", env_path));
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::logger::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

/// Backbone weight file, honoring the --model override.
pub fn backbone_model_path(default_name: &str) -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL.get() {
		return Some(custom.clone());
	}
	models_dir().map(|d| d.join(default_name))
}

/// Label vocabulary file, honoring the --labels-file override.
pub fn labels_path(default_name: &str) -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_LABELS.get() {
		return Some(custom.clone());
	}
	models_dir().map(|d| d.join(default_name))
}

/// Binary gatekeeper weight file.
pub fn gate_model_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(GATE_MODEL))
}
