use std::path::PathBuf;

use fbximport::import::{ImportError, OptionHint, Result, SceneFormatImporter};

use crate::cmd::util::{emit_json, metadata_importer, render_value};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// List the options the FBX importer contributes to the import panel.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let importer = metadata_importer();
	if !importer.recognizes(&path) {
		let extension = path.extension().map(|ext| ext.to_string_lossy().to_lowercase()).unwrap_or_default();
		return Err(ImportError::UnsupportedExtension { extension });
	}

	let declared = importer.declared_options(&path);

	if json {
		let payload = OptionsJson {
			path: path.display().to_string(),
			options: declared
				.iter()
				.map(|info| OptionJson {
					key: info.key,
					kind: info.default.type_name(),
					default: &info.default,
					enum_labels: match info.hint {
						OptionHint::Enum(labels) => Some(labels),
						OptionHint::None => None,
					},
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("options:");
	for info in declared {
		println!("  {} ({}, default: {})", info.key, info.default.type_name(), render_value(&info.default));
		if let OptionHint::Enum(labels) = info.hint {
			for (index, label) in labels.iter().enumerate() {
				println!("    {index}: {label}");
			}
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct OptionJson<'a> {
	key: &'static str,
	kind: &'static str,
	default: &'a fbximport::import::OptionValue,
	enum_labels: Option<&'static [&'static str]>,
}

#[derive(serde::Serialize)]
struct OptionsJson<'a> {
	path: String,
	options: Vec<OptionJson<'a>>,
}
