use std::path::Path;

use crate::import::{ImportFlags, ParseState, Result, SceneGraph};

/// Parser and scene-generator backend the importer adapter drives.
///
/// One document instance serves one import call: `append_from_file` first,
/// `generate_scene` second. The adapter configures `ParseState` (helper-node
/// retention, embedded image handling) before the parse call, because the
/// parser consults those fields while building its entries.
///
/// Any error returned from either method is surfaced to the import caller
/// as an opaque [`crate::import::ImportError::ImportFailed`]; backends keep
/// richer diagnostics on their own side channels.
pub trait SceneDocument {
	/// Parse `path` into `state`.
	///
	/// `base_dir` is the directory of the original, un-globalized path and
	/// is used to resolve external references such as texture files.
	fn append_from_file(&mut self, path: &Path, state: &mut ParseState, flags: ImportFlags, base_dir: &Path) -> Result<()>;

	/// Materialize a scene tree from previously parsed `state`.
	///
	/// `fps` is the animation bake rate, `trimming` clips animations to
	/// their keyed range, and `remove_immutable_tracks` drops tracks whose
	/// value never changes.
	fn generate_scene(&mut self, state: &mut ParseState, fps: f64, trimming: bool, remove_immutable_tracks: bool) -> Result<SceneGraph>;
}
