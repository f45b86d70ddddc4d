use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors produced while resolving import options and driving a document backend.
#[derive(Debug, Error)]
pub enum ImportError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A required option key was absent from the caller-supplied map.
	#[error("missing required option: {key}")]
	MissingOption {
		/// Option key that must be supplied.
		key: String,
	},
	/// An option was present but carried a value of the wrong type.
	#[error("option {key} has type {found}, expected {expected}")]
	OptionType {
		/// Offending option key.
		key: String,
		/// Type the importer resolves this key as.
		expected: &'static str,
		/// Type actually found in the map.
		found: &'static str,
	},
	/// Embedded-image handling index outside the declared enum range.
	#[error("unknown embedded image handling index {index} (expected 0..=3)")]
	UnknownImageHandling {
		/// Out-of-range index value.
		index: i64,
	},
	/// File extension not recognized by this importer.
	#[error("unsupported extension: {extension:?}")]
	UnsupportedExtension {
		/// Lower-cased extension of the rejected path.
		extension: String,
	},
	/// Opaque parse or scene-generation failure from the document backend.
	#[error("import failed")]
	ImportFailed,
}
