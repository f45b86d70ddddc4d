use std::path::PathBuf;

use crate::import::{ImportError, Result};

/// How embedded images found in the document are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddedImageHandling {
	/// Drop every embedded texture.
	DiscardAllTextures = 0,
	/// Extract textures to loose files next to the scene.
	#[default]
	ExtractTextures = 1,
	/// Transcode and embed as Basis Universal.
	EmbedAsBasisUniversal = 2,
	/// Embed raw uncompressed pixels.
	EmbedAsUncompressed = 3,
}

impl EmbeddedImageHandling {
	/// Property-inspector labels, in enum-index order.
	pub const LABELS: [&'static str; 4] = [
		"Discard All Textures",
		"Extract Textures",
		"Embed as Basis Universal",
		"Embed as Uncompressed",
	];

	/// Map a declared-option enum index back to a variant.
	pub fn from_index(index: i64) -> Result<Self> {
		match index {
			0 => Ok(EmbeddedImageHandling::DiscardAllTextures),
			1 => Ok(EmbeddedImageHandling::ExtractTextures),
			2 => Ok(EmbeddedImageHandling::EmbedAsBasisUniversal),
			3 => Ok(EmbeddedImageHandling::EmbedAsUncompressed),
			other => Err(ImportError::UnknownImageHandling { index: other }),
		}
	}

	/// Inspector label for this variant.
	pub fn label(self) -> &'static str {
		Self::LABELS[self as usize]
	}
}

/// Mutable state for one import call.
///
/// Created fresh per `import()` invocation and owned exclusively by the
/// adapter for its duration: configured from options before parsing,
/// populated by the document backend, then consumed by scene generation.
#[derive(Debug, Default)]
pub struct ParseState {
	/// Keep geometry helper nodes the parser would otherwise fold away.
	///
	/// Consulted by the parser while building helper-node entries, so the
	/// adapter sets it before `append_from_file`.
	pub allow_geometry_helper_nodes: bool,
	/// Embedded image materialization policy.
	pub embedded_image_handling: EmbeddedImageHandling,
	/// Resolved absolute path of the file being parsed.
	pub source_path: PathBuf,
	/// Directory external references are resolved against.
	pub base_dir: PathBuf,
	/// Scene name reported by the parser, when the document carries one.
	pub scene_name: Option<String>,
	/// External references the parser could not resolve.
	///
	/// Output channel populated by the document backend; the adapter never
	/// writes to it.
	pub missing_dependencies: Vec<String>,
}

impl ParseState {
	/// Fresh state with every field at its pre-parse default.
	pub fn new() -> Self {
		Self::default()
	}
}
