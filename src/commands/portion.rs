//! Portion command - estimate a serving weight from a food name
//!
//! Serves the free-text hint path: portion estimation invoked
//! independently of classification.

use anyhow::Result;
use colored::Colorize;

use crate::portion::estimate;

pub fn run(name: &str) -> Result<()> {
	let portion = estimate(name);

	println!(
		"{} {} {} ({}, confidence {:.1})",
		name.bright_white().bold(),
		"→".dimmed(),
		format!("~{}g", portion.estimated_weight_grams).bright_blue(),
		portion.size_label,
		portion.confidence,
	);

	Ok(())
}
