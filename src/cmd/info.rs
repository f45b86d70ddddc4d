use std::path::PathBuf;

use fbximport::import::{ImportFlags, Result, SceneFormatImporter};

use crate::cmd::util::{emit_json, metadata_importer};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print extension recognition, capability flags, and compatibility mode.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let importer = metadata_importer();
	let flags = importer.import_flags();

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			recognized: importer.recognizes(&path),
			extensions: importer.extensions(),
			import_flags: flags.to_string(),
			import_flags_bits: flags.bits(),
			scene: flags.contains(ImportFlags::SCENE),
			animation: flags.contains(ImportFlags::ANIMATION),
			compatibility: importer.compatibility().label(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("recognized: {}", importer.recognizes(&path));
	println!("extensions: {}", importer.extensions().join(", "));
	println!("import_flags: {flags}");
	println!("compatibility: {}", importer.compatibility().label());

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	recognized: bool,
	extensions: &'static [&'static str],
	import_flags: String,
	import_flags_bits: u32,
	scene: bool,
	animation: bool,
	compatibility: &'static str,
}
