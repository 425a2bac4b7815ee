//! Analyze command - run the full pipeline on one photo

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::logger::{header, log, Level};
use crate::pipeline::{Pipeline, PipelineOptions};

pub fn run(image: &Path, json: bool, opts: &PipelineOptions) -> Result<()> {
	let bytes = fs::read(image)
		.with_context(|| format!("Failed to read image file: {}", image.display()))?;

	log(Level::Info, "Loading models...");
	let load_start = Instant::now();
	let mut pipeline = Pipeline::load(opts)?;
	log(
		Level::Success,
		&format!("Pipeline ready in {:.2}s", load_start.elapsed().as_secs_f32()),
	);

	let start = Instant::now();
	let result = pipeline
		.analyze(&bytes)
		.with_context(|| format!("Analysis failed for {}", image.display()))?;
	let elapsed_ms = start.elapsed().as_millis();

	if json {
		println!("{}", serde_json::to_string_pretty(&result)?);
		return Ok(());
	}

	header("Result");

	if !result.is_food {
		log(Level::Warning, "This does not look like food");
	} else {
		println!(
			"  {} {} {}",
			result.food_name.bright_white().bold(),
			format!("{:.0}%", result.confidence * 100.0).dimmed(),
			format!("{}ms", elapsed_ms).dimmed(),
		);

		if let Some(portion) = &result.portion {
			println!(
				"  {} {} ({})",
				"Portion:".bright_blue(),
				format!("~{}g", portion.estimated_weight_grams),
				portion.size_label,
			);
		}
	}

	println!();
	println!("{}", "  Candidates".bright_blue().bold());
	for (i, candidate) in result.candidates.iter().enumerate() {
		let rank = format!("#{}", i + 1).bright_blue().bold();
		let score = format!("{:.1}%", candidate.confidence * 100.0).dimmed();
		println!("  {} {} {}", rank, candidate.display_name, score);
	}
	println!();

	Ok(())
}
