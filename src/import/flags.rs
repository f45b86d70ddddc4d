use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitset of import capabilities and behavior toggles forwarded to the document backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportFlags(u32);

impl ImportFlags {
	/// Importer produces a scene hierarchy.
	pub const SCENE: ImportFlags = ImportFlags(1 << 0);
	/// Importer produces animation tracks.
	pub const ANIMATION: ImportFlags = ImportFlags(1 << 1);
	/// Parse fails instead of skipping unresolved external references.
	pub const FAIL_ON_MISSING_DEPENDENCIES: ImportFlags = ImportFlags(1 << 2);
	/// Mesh compression is disabled for generated geometry.
	pub const FORCE_DISABLE_MESH_COMPRESSION: ImportFlags = ImportFlags(1 << 3);
	/// Skin binds are matched by bone name rather than by index.
	///
	/// The FBX importer merges this into caller flags unconditionally; it is
	/// adapter policy, not a user-configurable option.
	pub const USE_NAMED_SKIN_BINDS: ImportFlags = ImportFlags(1 << 4);

	/// Empty flag set.
	pub const fn empty() -> Self {
		ImportFlags(0)
	}

	/// Construct from a raw bit pattern.
	pub const fn from_bits(bits: u32) -> Self {
		ImportFlags(bits)
	}

	/// Raw bit pattern.
	pub const fn bits(self) -> u32 {
		self.0
	}

	/// Whether every bit of `other` is set in `self`.
	pub const fn contains(self, other: ImportFlags) -> bool {
		self.0 & other.0 == other.0
	}

	/// Set every bit of `other` in place.
	pub fn insert(&mut self, other: ImportFlags) {
		self.0 |= other.0;
	}
}

impl BitOr for ImportFlags {
	type Output = ImportFlags;

	fn bitor(self, rhs: ImportFlags) -> ImportFlags {
		ImportFlags(self.0 | rhs.0)
	}
}

impl BitOrAssign for ImportFlags {
	fn bitor_assign(&mut self, rhs: ImportFlags) {
		self.0 |= rhs.0;
	}
}

impl fmt::Display for ImportFlags {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		const NAMES: [(ImportFlags, &str); 5] = [
			(ImportFlags::SCENE, "scene"),
			(ImportFlags::ANIMATION, "animation"),
			(ImportFlags::FAIL_ON_MISSING_DEPENDENCIES, "fail_on_missing_dependencies"),
			(ImportFlags::FORCE_DISABLE_MESH_COMPRESSION, "force_disable_mesh_compression"),
			(ImportFlags::USE_NAMED_SKIN_BINDS, "use_named_skin_binds"),
		];

		let mut first = true;
		for (flag, name) in NAMES {
			if self.contains(flag) {
				if !first {
					f.write_str("|")?;
				}
				f.write_str(name)?;
				first = false;
			}
		}
		if first {
			f.write_str("none")?;
		}
		Ok(())
	}
}
