use std::path::Path;

use log::debug;

use crate::import::options::{OPT_ALLOW_GEOMETRY_HELPER_NODES, OPT_EMBEDDED_IMAGE_HANDLING};
use crate::import::{
	AnimationOptions, CompatibilityMode, EmbeddedImageHandling, ImportError, ImportFlags, ImportOptions, OptionHint, OptionInfo, OptionValue, ParseState,
	PathResolver, Result, SceneDocument, SceneGraph,
};

/// Namespace tags shared across the format importers of one import panel.
///
/// A key under one of these namespaces belongs to the importer for the
/// matching extension and is hidden everywhere else.
const NAMESPACE_TAGS: [&str; 2] = ["fbx", "gltf"];

/// Host-facing surface of one scene-format importer.
pub trait SceneFormatImporter {
	/// File extensions this importer handles, lower-case, without dots.
	fn extensions(&self) -> &'static [&'static str];

	/// Capability flags advertised to the host.
	fn import_flags(&self) -> ImportFlags;

	/// Whether `key` should be shown for a file at `path`.
	///
	/// Visibility only filters the shared options UI; resolution inside
	/// [`SceneFormatImporter::import`] applies the same defaults whether or
	/// not a key was visible.
	fn option_visibility(&self, path: &Path, for_animation: bool, key: &str, options: &ImportOptions) -> bool;

	/// Options this importer contributes to the shared panel, in fixed order.
	fn declared_options(&self, path: &Path) -> Vec<OptionInfo>;

	/// Parse `path` and materialize a scene tree.
	fn import(&self, path: &Path, flags: ImportFlags, options: &ImportOptions) -> Result<SceneGraph>;

	/// Whether `path` carries an extension this importer handles.
	fn recognizes(&self, path: &Path) -> bool {
		let extension = extension_lowercase(path);
		self.extensions().contains(&extension.as_str())
	}
}

/// FBX importer adapter: resolves options onto a fresh [`ParseState`] and
/// drives a [`SceneDocument`] backend through parse and scene generation.
///
/// Each [`SceneFormatImporter::import`] call builds a fresh document from
/// the factory and owns its state exclusively; nothing is retained between
/// calls.
pub struct FbxImporter<D: SceneDocument> {
	new_document: Box<dyn Fn() -> D>,
	resolver: Box<dyn PathResolver>,
	compatibility: CompatibilityMode,
}

impl<D: SceneDocument> FbxImporter<D> {
	/// Importer with the given document factory and path resolver,
	/// resolving animation options in [`CompatibilityMode::Current`].
	pub fn new(new_document: impl Fn() -> D + 'static, resolver: impl PathResolver + 'static) -> Self {
		FbxImporter {
			new_document: Box::new(new_document),
			resolver: Box::new(resolver),
			compatibility: CompatibilityMode::default(),
		}
	}

	/// Select the animation option-resolution strategy.
	pub fn with_compatibility(mut self, mode: CompatibilityMode) -> Self {
		self.compatibility = mode;
		self
	}

	/// Active compatibility mode.
	pub fn compatibility(&self) -> CompatibilityMode {
		self.compatibility
	}
}

impl<D: SceneDocument> SceneFormatImporter for FbxImporter<D> {
	fn extensions(&self) -> &'static [&'static str] {
		&["fbx"]
	}

	fn import_flags(&self) -> ImportFlags {
		ImportFlags::SCENE | ImportFlags::ANIMATION
	}

	fn option_visibility(&self, path: &Path, _for_animation: bool, key: &str, _options: &ImportOptions) -> bool {
		if let Some((namespace, _)) = key.split_once('/') {
			if NAMESPACE_TAGS.contains(&namespace) {
				return extension_lowercase(path) == namespace;
			}
		}
		true
	}

	fn declared_options(&self, _path: &Path) -> Vec<OptionInfo> {
		vec![
			OptionInfo {
				key: OPT_ALLOW_GEOMETRY_HELPER_NODES,
				default: OptionValue::Bool(false),
				hint: OptionHint::None,
			},
			OptionInfo {
				key: OPT_EMBEDDED_IMAGE_HANDLING,
				default: OptionValue::Int(EmbeddedImageHandling::ExtractTextures as i64),
				hint: OptionHint::Enum(&EmbeddedImageHandling::LABELS),
			},
		]
	}

	fn import(&self, path: &Path, flags: ImportFlags, options: &ImportOptions) -> Result<SceneGraph> {
		debug!("fbx path: {}", path.display());
		let resolved = self.resolver.globalize(path);
		// External references resolve against the original path's directory,
		// not the globalized one.
		let base_dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

		let mut state = ParseState::new();
		state.allow_geometry_helper_nodes = options.bool_or(OPT_ALLOW_GEOMETRY_HELPER_NODES, false)?;
		state.embedded_image_handling = EmbeddedImageHandling::from_index(
			options.int_or(OPT_EMBEDDED_IMAGE_HANDLING, EmbeddedImageHandling::ExtractTextures as i64)?,
		)?;
		state.source_path = resolved.clone();
		state.base_dir = base_dir.clone();

		// Fixed adapter policy, independent of caller input.
		let mut flags = flags;
		flags.insert(ImportFlags::USE_NAMED_SKIN_BINDS);

		let mut document = (self.new_document)();
		if document.append_from_file(&resolved, &mut state, flags, &base_dir).is_err() {
			return Err(ImportError::ImportFailed);
		}

		let animation = AnimationOptions::resolve(self.compatibility, options)?;
		document
			.generate_scene(&mut state, animation.fps, animation.trimming, animation.remove_immutable_tracks)
			.map_err(|_| ImportError::ImportFailed)
	}
}

fn extension_lowercase(path: &Path) -> String {
	path.extension().map(|ext| ext.to_string_lossy().to_lowercase()).unwrap_or_default()
}
