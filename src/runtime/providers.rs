//! Execution provider selection

use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::error::AnalysisError;
use crate::logger::{self, log, Level};

pub use crate::cli::Provider;

static EP_PREFERENCE: OnceLock<Provider> = OnceLock::new();
static PROVIDER_LOGGED: Mutex<bool> = Mutex::new(false);

pub fn set_provider(p: Provider) {
	let _ = EP_PREFERENCE.set(p);
}

fn get_provider() -> Provider {
	EP_PREFERENCE.get().copied().unwrap_or_default()
}

/// Build an inference session for a model file.
///
/// Sessions are created once at startup and run in evaluation mode only;
/// given identical weights and input, output is bit-stable.
pub fn create_session(model_path: &Path) -> Result<Session, AnalysisError> {
	if !model_path.exists() {
		return Err(AnalysisError::ModelUnavailable(model_path.to_path_buf()));
	}

	let mut builder = Session::builder()?;

	match get_provider() {
		Provider::Auto => register_best(&mut builder),
		Provider::Cpu => {
			let mut logged = PROVIDER_LOGGED.lock().unwrap();
			if !*logged {
				log(Level::Info, "Using CPU execution provider (forced)");
				*logged = true;
			}
		}
		Provider::Cuda => {
			if !try_cuda(&mut builder) {
				log(Level::Error, "CUDA requested but unavailable, falling back to CPU");
			}
		}
		Provider::Tensorrt => {
			if !try_tensorrt(&mut builder) {
				log(Level::Error, "TensorRT requested but unavailable, falling back to CPU");
			}
		}
		Provider::Coreml => {
			#[cfg(target_os = "macos")]
			if !try_coreml(&mut builder) {
				log(Level::Error, "CoreML requested but unavailable, falling back to CPU");
			}
			#[cfg(not(target_os = "macos"))]
			log(Level::Error, "CoreML only available on macOS, falling back to CPU");
		}
		Provider::Xnnpack => {
			if !try_xnnpack(&mut builder) {
				log(Level::Error, "XNNPACK requested but unavailable, falling back to CPU");
			}
		}
	}

	Ok(builder
		.with_optimization_level(GraphOptimizationLevel::Level3)?
		.with_intra_threads(4)?
		.commit_from_file(model_path)?)
}

fn register_best(builder: &mut ort::session::builder::SessionBuilder) {
	if try_tensorrt(builder) {
		return;
	}
	if try_cuda(builder) {
		return;
	}

	#[cfg(target_os = "macos")]
	if try_coreml(builder) {
		return;
	}

	if try_xnnpack(builder) {
		return;
	}

	let mut logged = PROVIDER_LOGGED.lock().unwrap();
	if !*logged {
		log(Level::Info, "Using CPU execution provider");
		*logged = true;
	}
}

macro_rules! try_provider {
	($builder:expr, $provider_type:ty, $name:expr) => {{
		use ort::ep::ExecutionProvider;

		logger::debug(&format!("Trying provider: {}", $name));

		let provider = <$provider_type>::default();
		if !provider.is_available().unwrap_or(false) {
			logger::debug(&format!("{} not available", $name));
			return false;
		}

		match provider.register($builder) {
			Ok(_) => {
				let mut logged = PROVIDER_LOGGED.lock().unwrap();
				if !*logged {
					log(Level::Success, &format!("Using {} execution provider", $name));
					*logged = true;
				}
				true
			}
			Err(e) => {
				logger::debug(&format!("{} registration failed: {}", $name, e));
				false
			}
		}
	}};
}

fn try_cuda(builder: &mut ort::session::builder::SessionBuilder) -> bool {
	use ort::ep::CUDA;
	try_provider!(builder, CUDA, "CUDA")
}

#[cfg(target_os = "macos")]
fn try_coreml(builder: &mut ort::session::builder::SessionBuilder) -> bool {
	use ort::ep::CoreML;
	try_provider!(builder, CoreML, "CoreML")
}

fn try_tensorrt(builder: &mut ort::session::builder::SessionBuilder) -> bool {
	use ort::ep::TensorRT;
	try_provider!(builder, TensorRT, "TensorRT")
}

fn try_xnnpack(builder: &mut ort::session::builder::SessionBuilder) -> bool {
	use ort::ep::XNNPACK;
	try_provider!(builder, XNNPACK, "XNNPACK")
}
