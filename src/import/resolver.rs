use std::path::{Path, PathBuf};

/// Scheme prefix marking project-relative paths.
const PROJECT_SCHEME: &str = "project://";

/// Capability for turning host-relative paths into absolute filesystem paths.
///
/// Injected into the importer so option plumbing stays testable without a
/// live project environment.
pub trait PathResolver {
	/// Resolve `path` to an absolute filesystem path.
	fn globalize(&self, path: &Path) -> PathBuf;
}

/// Resolver anchored at a project root directory.
///
/// `project://`-prefixed and relative paths resolve under the root;
/// absolute paths pass through unchanged.
#[derive(Debug, Clone)]
pub struct ProjectPathResolver {
	root: PathBuf,
}

impl ProjectPathResolver {
	/// Resolver rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		ProjectPathResolver { root: root.into() }
	}

	/// Project root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}
}

impl PathResolver for ProjectPathResolver {
	fn globalize(&self, path: &Path) -> PathBuf {
		if let Some(rest) = path.to_str().and_then(|text| text.strip_prefix(PROJECT_SCHEME)) {
			return self.root.join(rest);
		}
		if path.is_absolute() {
			return path.to_path_buf();
		}
		self.root.join(path)
	}
}

/// Passthrough resolver for standalone use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl PathResolver for IdentityResolver {
	fn globalize(&self, path: &Path) -> PathBuf {
		path.to_path_buf()
	}
}
