//! Public library API for driving FBX scene imports through a document backend.

/// Import options, parse state, and the FBX importer adapter.
pub mod import;
