use std::path::PathBuf;

use fbximport::import::{ImportOptions, Result, SceneFormatImporter};

use crate::cmd::util::{emit_json, metadata_importer};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	pub key: String,
	#[arg(long = "for-animation")]
	pub for_animation: bool,
	#[arg(long)]
	pub json: bool,
}

/// Report whether an option key is visible for a file path.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		key,
		for_animation,
		json,
	} = args;

	let importer = metadata_importer();
	let visible = importer.option_visibility(&path, for_animation, &key, &ImportOptions::new());

	if json {
		let payload = VisibilityJson {
			path: path.display().to_string(),
			key: &key,
			for_animation,
			visible,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("key: {key}");
	println!("visible: {visible}");

	Ok(())
}

#[derive(serde::Serialize)]
struct VisibilityJson<'a> {
	path: String,
	key: &'a str,
	for_animation: bool,
	visible: bool,
}
