#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "fbximport", about = "FBX scene-import adapter inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Show extension recognition and capability flags for a path.
	Info(cmd::info::Args),
	/// List the options this importer contributes to the import panel.
	Options(cmd::options::Args),
	/// Check whether an option key is visible for a path.
	Visibility(cmd::visibility::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> fbximport::import::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Options(args) => cmd::options::run(args),
		Commands::Visibility(args) => cmd::visibility::run(args),
	}
}
