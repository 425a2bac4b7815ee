use clap::{builder::Styles, Parser, Subcommand, ValueEnum};
use clap::builder::styling::{AnsiColor, Color, Style};
use colored::Colorize;
use std::path::PathBuf;

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (TensorRT → CUDA → CoreML → XNNPACK → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// NVIDIA TensorRT (optimized inference)
	Tensorrt,
	/// Apple CoreML (macOS only)
	Coreml,
	/// XNNPACK (optimized CPU)
	Xnnpack,
}

/// Which backbone classifier to load
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum BackboneChoice {
	/// Specialist if its artifact exists, generalist otherwise
	#[default]
	Auto,
	/// Food-only fine-tuned classifier (Food-101 vocabulary)
	Specialist,
	/// Broad-vocabulary classifier (ImageNet vocabulary)
	Generalist,
}

/// Which food/non-food gate strategy to use
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum GateChoice {
	/// Keyword gate for the generalist, binary model (or forced accept) for the specialist
	#[default]
	Auto,
	/// Allow/deny keyword lists over the top-1 label
	Keyword,
	/// Dedicated binary food/non-food model
	Model,
	/// Accept everything (demo escape hatch)
	Forced,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "mealscan",
	author,
	version,
	about = "On-device food photo recognition and portion estimation",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {analyze} {analyze_args}        {analyze_desc}
  {bin} {analyze} {analyze_json_args}   {analyze_json_desc}
  {bin} {portion} {portion_args}       {portion_desc}
  {bin} {eval} {eval_args}     {eval_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "mealscan".bright_blue(),
		analyze = "analyze".yellow(),
		analyze_args = "lunch.jpg",
		analyze_desc = "Recognize a meal photo".dimmed(),
		analyze_json_args = "lunch.jpg --json",
		analyze_json_desc = "Machine-readable output".dimmed(),
		portion = "portion".yellow(),
		portion_args = "\"french toast\"",
		portion_desc = "Estimate a serving weight by name".dimmed(),
		eval = "eval".yellow(),
		eval_args = "-d data/food-101",
		eval_desc = "Score accuracy on a labeled dataset".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider: auto, cpu, cuda, tensorrt, coreml, xnnpack
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	/// Directory containing model artifacts
	#[arg(long = "models-dir", global = true)]
	pub models_dir: Option<PathBuf>,

	/// Explicit backbone weight file (overrides --models-dir lookup)
	#[arg(long = "model", global = true)]
	pub model: Option<PathBuf>,

	/// Explicit label vocabulary file (.json or .txt)
	#[arg(long = "labels-file", global = true)]
	pub labels_file: Option<PathBuf>,

	/// Backbone variant
	#[arg(short = 'b', long = "backbone", global = true, default_value = "auto")]
	pub backbone: BackboneChoice,

	/// Gatekeeper strategy
	#[arg(short = 'g', long = "gate", global = true, default_value = "auto")]
	pub gate: GateChoice,

	/// Number of ranked candidates to return
	#[arg(short = 'k', long = "top-k", global = true, default_value_t = 3)]
	pub top_k: usize,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Analyze a single meal photo
	Analyze {
		/// Image file (JPEG/PNG)
		#[arg(value_name = "IMAGE")]
		image: PathBuf,

		/// Print the result as JSON instead of formatted text
		#[arg(long = "json")]
		json: bool,
	},

	/// Estimate a portion weight from a food name, without classification
	Portion {
		/// Free-text food name
		#[arg(value_name = "NAME")]
		name: String,
	},

	/// Show the loaded label vocabulary
	Labels {
		/// How many labels to print
		#[arg(short = 'n', long = "limit", default_value_t = 10)]
		limit: usize,
	},

	/// Evaluate accuracy on a labeled dataset (<class>/<image>.jpg layout)
	Eval {
		/// Dataset root directory
		#[arg(short = 'd', long = "dir")]
		directory: PathBuf,

		/// Number of sampled images
		#[arg(short = 'n', long = "limit", default_value_t = 50)]
		limit: usize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
