use crate::import::options::{OPT_ANIMATION_FPS, OPT_ANIMATION_REMOVE_IMMUTABLE, OPT_ANIMATION_TRIMMING};
use crate::import::{ImportOptions, Result};

/// Animation option-resolution strategy, selected once at importer construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompatibilityMode {
	/// `animation/fps` required; trimming defaults off, immutable-track
	/// removal defaults on.
	#[default]
	Current,
	/// Older configurations shipped all three animation keys explicitly;
	/// this mode keeps that contract and rejects any absent key.
	Legacy,
}

impl CompatibilityMode {
	/// Stable lower-case label for CLI output.
	pub fn label(self) -> &'static str {
		match self {
			CompatibilityMode::Current => "current",
			CompatibilityMode::Legacy => "legacy",
		}
	}
}

/// Resolved animation parameters passed to scene generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
	/// Bake frame rate.
	pub fps: f64,
	/// Clip animations to their keyed range.
	pub trimming: bool,
	/// Drop tracks whose value never changes.
	pub remove_immutable_tracks: bool,
}

impl AnimationOptions {
	/// Resolve the animation option triple under `mode`.
	///
	/// `animation/fps` is required in both modes; a missing key is a caller
	/// contract violation, not a defaultable value.
	pub fn resolve(mode: CompatibilityMode, options: &ImportOptions) -> Result<AnimationOptions> {
		let fps = options.require_float(OPT_ANIMATION_FPS)?;
		let (trimming, remove_immutable_tracks) = match mode {
			CompatibilityMode::Current => (
				options.bool_or(OPT_ANIMATION_TRIMMING, false)?,
				options.bool_or(OPT_ANIMATION_REMOVE_IMMUTABLE, true)?,
			),
			CompatibilityMode::Legacy => (
				options.require_bool(OPT_ANIMATION_TRIMMING)?,
				options.require_bool(OPT_ANIMATION_REMOVE_IMMUTABLE)?,
			),
		};

		Ok(AnimationOptions {
			fps,
			trimming,
			remove_immutable_tracks,
		})
	}
}
