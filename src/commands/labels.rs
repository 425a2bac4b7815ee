//! Labels command - inspect the loaded vocabulary

use anyhow::Result;
use colored::Colorize;

use crate::cli::BackboneChoice;
use crate::logger::{log, Level};
use crate::pipeline::{resolve_kind, resolve_vocabulary};

pub fn run(choice: BackboneChoice, limit: usize) -> Result<()> {
	let kind = resolve_kind(choice);
	let vocab = resolve_vocabulary(kind);

	let source = if vocab.is_placeholder() {
		"placeholder".yellow()
	} else {
		"file".bright_green()
	};

	log(
		Level::Info,
		&format!("{} vocabulary: {} labels ({})", kind, vocab.len(), source),
	);

	for (i, label) in vocab.as_slice().iter().take(limit).enumerate() {
		println!("  {} {}", format!("{:>4}", i).dimmed(), label);
	}
	if vocab.len() > limit {
		println!("  {}", format!("... {} more", vocab.len() - limit).dimmed());
	}

	Ok(())
}
