mod compat;
mod document;
mod error;
mod flags;
mod importer;
mod options;
mod resolver;
mod scene;
mod state;

/// Animation option-resolution strategies.
pub use compat::{AnimationOptions, CompatibilityMode};
/// Parser/generator backend seam.
pub use document::SceneDocument;
/// Error and result aliases.
pub use error::{ImportError, Result};
/// Capability and behavior flag bitset.
pub use flags::ImportFlags;
/// Importer trait and the FBX adapter.
pub use importer::{FbxImporter, SceneFormatImporter};
/// Typed option values, maps, declared-option descriptors, and key constants.
pub use options::{
	ImportOptions, OptionHint, OptionInfo, OptionValue, OPT_ALLOW_GEOMETRY_HELPER_NODES, OPT_ANIMATION_FPS, OPT_ANIMATION_REMOVE_IMMUTABLE,
	OPT_ANIMATION_TRIMMING, OPT_EMBEDDED_IMAGE_HANDLING,
};
/// Path globalization capability and stock resolvers.
pub use resolver::{IdentityResolver, PathResolver, ProjectPathResolver};
/// Generated scene tree types.
pub use scene::{NodeKind, SceneGraph, SceneNode};
/// Per-call parse state and embedded-image policy.
pub use state::{EmbeddedImageHandling, ParseState};
