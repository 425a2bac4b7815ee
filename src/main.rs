//! Mealscan - food photo recognition and portion estimation
//!
//! A command-line tool that recognizes the food in a photo, ranks
//! alternatives, and estimates a serving weight with keyword heuristics.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use mealscan::cli::{Cli, Command};
use mealscan::commands;
use mealscan::config;
use mealscan::logger;
use mealscan::pipeline::PipelineOptions;
use mealscan::runtime::set_provider;

fn main() -> Result<()> {
	let cli = Cli::parse();

	logger::set_verbose(cli.verbose);
	set_provider(cli.provider);

	if let Some(dir) = cli.models_dir.clone() {
		config::set_models_dir(dir);
	}
	if let Some(model) = cli.model.clone() {
		config::set_model_path(model);
	}
	if let Some(labels) = cli.labels_file.clone() {
		config::set_labels_path(labels);
	}

	let opts = PipelineOptions {
		backbone: cli.backbone,
		gate: cli.gate,
		top_k: cli.top_k,
	};

	match cli.command {
		Command::Analyze { image, json } => {
			if !json {
				print_header();
			}
			commands::analyze::run(&image, json, &opts)
		}
		Command::Portion { name } => commands::portion::run(&name),
		Command::Labels { limit } => {
			print_header();
			commands::labels::run(cli.backbone, limit)
		}
		Command::Eval { directory, limit } => {
			print_header();
			commands::eval::run(&directory, limit, &opts)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Mealscan v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
