use std::collections::HashMap;

use crate::import::{ImportError, Result};

/// Option key for retaining geometry helper nodes in the imported scene.
pub const OPT_ALLOW_GEOMETRY_HELPER_NODES: &str = "fbx/allow_geometry_helper_nodes";
/// Option key selecting how embedded images are materialized.
pub const OPT_EMBEDDED_IMAGE_HANDLING: &str = "fbx/embedded_image_handling";
/// Option key for the animation bake frame rate.
pub const OPT_ANIMATION_FPS: &str = "animation/fps";
/// Option key for trimming animation clips to their keyed range.
pub const OPT_ANIMATION_TRIMMING: &str = "animation/trimming";
/// Option key for dropping tracks whose value never changes.
pub const OPT_ANIMATION_REMOVE_IMMUTABLE: &str = "animation/remove_immutable_tracks";

/// Typed value carried by one import option.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum OptionValue {
	/// Boolean toggle.
	Bool(bool),
	/// Integer or enum index.
	Int(i64),
	/// Floating-point quantity.
	Float(f64),
	/// Free-form text.
	Str(String),
}

impl OptionValue {
	/// Name of the carried type, for diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			OptionValue::Bool(_) => "bool",
			OptionValue::Int(_) => "int",
			OptionValue::Float(_) => "float",
			OptionValue::Str(_) => "string",
		}
	}

	/// Boolean payload, if this value is a boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			OptionValue::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Integer payload, if this value is an integer.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			OptionValue::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Float payload. Integers widen; booleans and strings do not coerce.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			OptionValue::Float(value) => Some(*value),
			OptionValue::Int(value) => Some(*value as f64),
			_ => None,
		}
	}
}

/// Caller-supplied option map resolved against compile-time defaults.
///
/// Absent keys fall back to the importer's declared default. Present keys
/// must carry the declared type; a mismatch is an error, never a coercion.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
	entries: HashMap<String, OptionValue>,
}

impl ImportOptions {
	/// Empty option map; every lookup resolves to its default.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace one option value.
	pub fn set(&mut self, key: impl Into<String>, value: OptionValue) -> &mut Self {
		self.entries.insert(key.into(), value);
		self
	}

	/// Raw lookup without type checking.
	pub fn get(&self, key: &str) -> Option<&OptionValue> {
		self.entries.get(key)
	}

	/// Whether the caller supplied `key` explicitly.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Resolve a boolean option, defaulting when absent.
	pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
		match self.entries.get(key) {
			None => Ok(default),
			Some(value) => value.as_bool().ok_or_else(|| ImportError::OptionType {
				key: key.to_owned(),
				expected: "bool",
				found: value.type_name(),
			}),
		}
	}

	/// Resolve an integer option, defaulting when absent.
	pub fn int_or(&self, key: &str, default: i64) -> Result<i64> {
		match self.entries.get(key) {
			None => Ok(default),
			Some(value) => value.as_int().ok_or_else(|| ImportError::OptionType {
				key: key.to_owned(),
				expected: "int",
				found: value.type_name(),
			}),
		}
	}

	/// Resolve a float option, defaulting when absent.
	pub fn float_or(&self, key: &str, default: f64) -> Result<f64> {
		match self.entries.get(key) {
			None => Ok(default),
			Some(value) => value.as_float().ok_or_else(|| ImportError::OptionType {
				key: key.to_owned(),
				expected: "float",
				found: value.type_name(),
			}),
		}
	}

	/// Resolve a required boolean option; absence is a caller contract violation.
	pub fn require_bool(&self, key: &str) -> Result<bool> {
		let value = self.entries.get(key).ok_or_else(|| ImportError::MissingOption { key: key.to_owned() })?;
		value.as_bool().ok_or_else(|| ImportError::OptionType {
			key: key.to_owned(),
			expected: "bool",
			found: value.type_name(),
		})
	}

	/// Resolve a required float option; absence is a caller contract violation.
	pub fn require_float(&self, key: &str) -> Result<f64> {
		let value = self.entries.get(key).ok_or_else(|| ImportError::MissingOption { key: key.to_owned() })?;
		value.as_float().ok_or_else(|| ImportError::OptionType {
			key: key.to_owned(),
			expected: "float",
			found: value.type_name(),
		})
	}
}

/// UI hint attached to a declared option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionHint {
	/// Plain widget for the value type.
	None,
	/// Integer restricted to an enumerated label list; the value is the label index.
	Enum(&'static [&'static str]),
}

/// One option this importer contributes to the shared import panel.
#[derive(Debug, Clone)]
pub struct OptionInfo {
	/// Namespaced option key.
	pub key: &'static str,
	/// Value applied when the caller leaves the key unset.
	pub default: OptionValue,
	/// Widget hint for the property inspector.
	pub hint: OptionHint,
}
