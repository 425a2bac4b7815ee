//! Eval command - score the pipeline on a labeled dataset
//!
//! Expects the Food-101 on-disk layout: one directory per class, images
//! inside. Reports gatekeeper recall (every dataset image is food) and
//! top-1/top-3 accuracy against the directory name. Label mismatches
//! between the dataset vocabulary and the model vocabulary lower the
//! scores; that is a property of the model, not of this harness.

use anyhow::{bail, Result};
use colored::Colorize;
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::logger::{header, log, Level};
use crate::pipeline::{Pipeline, PipelineOptions};

pub fn run(directory: &Path, limit: usize, opts: &PipelineOptions) -> Result<()> {
	if !directory.is_dir() {
		bail!("Dataset directory not found: {}", directory.display());
	}

	log(Level::Info, &format!("Scanning dataset: {}", directory.display()));
	let mut samples = collect_samples(directory);
	if samples.is_empty() {
		bail!("No class directories with images under {}", directory.display());
	}

	let total = samples.len();
	samples.shuffle(&mut rand::rng());
	samples.truncate(limit);

	log(
		Level::Info,
		&format!("Evaluating {} of {} images", samples.len(), total),
	);

	let mut pipeline = Pipeline::load(opts)?;

	let mut correct_top1 = 0usize;
	let mut correct_top3 = 0usize;
	let mut gate_passed = 0usize;
	let mut errors = 0usize;
	let start = Instant::now();

	for (i, (path, true_label)) in samples.iter().enumerate() {
		let queue = format!("[{}/{}]", i + 1, samples.len()).bright_blue().bold();

		let bytes = match fs::read(path) {
			Ok(bytes) => bytes,
			Err(e) => {
				log(Level::Error, &format!("{} {}: {}", queue, path.display(), e));
				errors += 1;
				continue;
			}
		};

		let result = match pipeline.analyze(&bytes) {
			Ok(result) => result,
			Err(e) => {
				log(Level::Error, &format!("{} {}: {}", queue, path.display(), e));
				errors += 1;
				continue;
			}
		};

		if result.is_food {
			gate_passed += 1;
		}

		let top1_hit = result
			.candidates
			.first()
			.map(|c| c.label == *true_label)
			.unwrap_or(false);
		let top3_hit = result.candidates.iter().any(|c| c.label == *true_label);

		if top1_hit {
			correct_top1 += 1;
		}
		if top3_hit {
			correct_top3 += 1;
		}

		let mark = if top3_hit { "✔".bright_green() } else { "✘".red() };
		let predicted = result
			.candidates
			.first()
			.map(|c| c.label.clone())
			.unwrap_or_else(|| "none".to_string());
		log(
			Level::Debug,
			&format!("{} {} true: {} pred: {}", queue, mark, true_label, predicted),
		);
	}

	let tested = samples.len() - errors;
	if tested == 0 {
		bail!("Every sampled image failed to analyze");
	}

	header("Evaluation");
	println!("  {} {}", "Images tested:".bright_blue(), tested);
	println!(
		"  {} {:.1}%",
		"Gatekeeper recall:".bright_blue(),
		percent(gate_passed, tested)
	);
	println!("  {} {:.1}%", "Top-1 accuracy:".bright_blue(), percent(correct_top1, tested));
	println!("  {} {:.1}%", "Top-3 accuracy:".bright_blue(), percent(correct_top3, tested));
	if errors > 0 {
		println!("  {} {}", "Errors:".red(), errors);
	}
	println!("  {} {:.2}s", "Duration:".bright_blue(), start.elapsed().as_secs_f32());
	println!();

	Ok(())
}

fn percent(part: usize, whole: usize) -> f32 {
	part as f32 * 100.0 / whole as f32
}

/// Gather (image path, class name) pairs from a <class>/<image> tree.
fn collect_samples(root: &Path) -> Vec<(PathBuf, String)> {
	let mut samples = Vec::new();

	for entry in WalkDir::new(root)
		.min_depth(2)
		.max_depth(2)
		.into_iter()
		.filter_map(|e| e.ok())
	{
		if !entry.file_type().is_file() {
			continue;
		}
		let path = entry.path();
		let is_image = path
			.extension()
			.and_then(|e| e.to_str())
			.map(|e| matches!(e.to_lowercase().as_str(), "jpg" | "jpeg" | "png"))
			.unwrap_or(false);
		if !is_image {
			continue;
		}

		let Some(class) = path
			.parent()
			.and_then(|p| p.file_name())
			.and_then(|n| n.to_str())
		else {
			continue;
		};

		samples.push((path.to_path_buf(), class.to_string()));
	}

	samples
}
