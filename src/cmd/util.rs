use std::path::Path;

use fbximport::import::{FbxImporter, IdentityResolver, ImportError, ImportFlags, OptionValue, ParseState, Result, SceneDocument, SceneGraph};

/// Document stand-in for metadata-only commands.
///
/// The inspection commands never parse a file; constructing the adapter
/// still requires a backend factory, so this one refuses every call.
pub(crate) struct UnwiredDocument;

impl SceneDocument for UnwiredDocument {
	fn append_from_file(&mut self, _path: &Path, _state: &mut ParseState, _flags: ImportFlags, _base_dir: &Path) -> Result<()> {
		Err(ImportError::ImportFailed)
	}

	fn generate_scene(&mut self, _state: &mut ParseState, _fps: f64, _trimming: bool, _remove_immutable_tracks: bool) -> Result<SceneGraph> {
		Err(ImportError::ImportFailed)
	}
}

/// Adapter instance for metadata queries.
pub(crate) fn metadata_importer() -> FbxImporter<UnwiredDocument> {
	FbxImporter::new(|| UnwiredDocument, IdentityResolver)
}

/// Render one option value for plain-text output.
pub(crate) fn render_value(value: &OptionValue) -> String {
	match value {
		OptionValue::Bool(inner) => inner.to_string(),
		OptionValue::Int(inner) => inner.to_string(),
		OptionValue::Float(inner) => inner.to_string(),
		OptionValue::Str(inner) => inner.clone(),
	}
}

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encoding failed: {err}"),
	}
}
