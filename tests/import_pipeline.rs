//! End-to-end import pipeline tests against a recording document backend.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fbximport::import::{
	CompatibilityMode, FbxImporter, ImportError, ImportFlags, ImportOptions, NodeKind, OptionValue, ParseState, PathResolver, ProjectPathResolver, Result,
	SceneDocument, SceneFormatImporter, SceneGraph, SceneNode,
};

#[derive(Debug, Default)]
struct Calls {
	parse_path: Option<PathBuf>,
	parse_base_dir: Option<PathBuf>,
	parse_flags: Option<ImportFlags>,
	helper_nodes: Option<bool>,
	generate_args: Option<(f64, bool, bool)>,
	documents_built: usize,
}

struct FakeDocument {
	calls: Rc<RefCell<Calls>>,
	fail_parse: bool,
}

impl SceneDocument for FakeDocument {
	fn append_from_file(&mut self, path: &Path, state: &mut ParseState, flags: ImportFlags, base_dir: &Path) -> Result<()> {
		let mut calls = self.calls.borrow_mut();
		calls.parse_path = Some(path.to_path_buf());
		calls.parse_base_dir = Some(base_dir.to_path_buf());
		calls.parse_flags = Some(flags);
		calls.helper_nodes = Some(state.allow_geometry_helper_nodes);
		if self.fail_parse {
			return Err(ImportError::ImportFailed);
		}
		state.scene_name = Some("Root".to_owned());
		Ok(())
	}

	fn generate_scene(&mut self, state: &mut ParseState, fps: f64, trimming: bool, remove_immutable_tracks: bool) -> Result<SceneGraph> {
		self.calls.borrow_mut().generate_args = Some((fps, trimming, remove_immutable_tracks));

		let name = state.scene_name.clone().unwrap_or_else(|| "Scene".to_owned());
		let mut children = vec![SceneNode::new("Mesh", NodeKind::Mesh)];
		if state.allow_geometry_helper_nodes {
			children.push(SceneNode::new("Mesh_HelperGeometry", NodeKind::HelperGeometry));
		}
		Ok(SceneGraph::new(SceneNode::with_children(name, NodeKind::Node, children)))
	}
}

fn importer_with(resolver: impl PathResolver + 'static, fail_parse: bool) -> (FbxImporter<FakeDocument>, Rc<RefCell<Calls>>) {
	let calls = Rc::new(RefCell::new(Calls::default()));
	let factory_calls = Rc::clone(&calls);
	let importer = FbxImporter::new(
		move || {
			factory_calls.borrow_mut().documents_built += 1;
			FakeDocument {
				calls: Rc::clone(&factory_calls),
				fail_parse,
			}
		},
		resolver,
	);
	(importer, calls)
}

fn fps_options(fps: f64) -> ImportOptions {
	let mut options = ImportOptions::new();
	options.set("animation/fps", OptionValue::Float(fps));
	options
}

#[test]
fn import_resolves_project_paths_but_keeps_original_base_dir() {
	let (importer, calls) = importer_with(ProjectPathResolver::new("/work/project"), false);

	let graph = importer
		.import(Path::new("project://assets/crate.fbx"), ImportFlags::empty(), &fps_options(30.0))
		.expect("import succeeds");
	assert_eq!(graph.root.name, "Root");

	let calls = calls.borrow();
	assert_eq!(calls.parse_path.as_deref(), Some(Path::new("/work/project/assets/crate.fbx")));
	assert_eq!(calls.parse_base_dir.as_deref(), Some(Path::new("project://assets")));
}

#[test]
fn default_options_produce_a_graph_without_helper_nodes() {
	let (importer, calls) = importer_with(ProjectPathResolver::new("/work/project"), false);

	let graph = importer.import(Path::new("crate.fbx"), ImportFlags::SCENE, &fps_options(24.0)).expect("import succeeds");

	assert_eq!(graph.node_count(), 2);
	assert!(graph.root.children.iter().all(|child| child.kind != NodeKind::HelperGeometry));

	let calls = calls.borrow();
	assert_eq!(calls.helper_nodes, Some(false));
	assert_eq!(calls.generate_args, Some((24.0, false, true)));
}

#[test]
fn helper_nodes_option_flows_through_state_into_the_graph() {
	let (importer, _) = importer_with(ProjectPathResolver::new("/work/project"), false);

	let mut options = fps_options(30.0);
	options.set("fbx/allow_geometry_helper_nodes", OptionValue::Bool(true));

	let graph = importer.import(Path::new("crate.fbx"), ImportFlags::empty(), &options).expect("import succeeds");
	assert!(graph.root.children.iter().any(|child| child.kind == NodeKind::HelperGeometry));
}

#[test]
fn caller_flags_are_preserved_and_named_skin_binds_added() {
	let (importer, calls) = importer_with(ProjectPathResolver::new("/work/project"), false);

	let caller_flags = ImportFlags::SCENE | ImportFlags::FAIL_ON_MISSING_DEPENDENCIES;
	importer.import(Path::new("crate.fbx"), caller_flags, &fps_options(30.0)).expect("import succeeds");

	let flags = calls.borrow().parse_flags.expect("parse invoked");
	assert!(flags.contains(caller_flags));
	assert!(flags.contains(ImportFlags::USE_NAMED_SKIN_BINDS));
}

#[test]
fn each_import_builds_a_fresh_document() {
	let (importer, calls) = importer_with(ProjectPathResolver::new("/work/project"), false);

	importer.import(Path::new("crate.fbx"), ImportFlags::empty(), &fps_options(30.0)).expect("first import succeeds");
	importer.import(Path::new("crate.fbx"), ImportFlags::empty(), &fps_options(30.0)).expect("second import succeeds");

	assert_eq!(calls.borrow().documents_built, 2);
}

#[test]
fn parse_failure_yields_no_graph_and_repeats_identically() {
	let (importer, calls) = importer_with(ProjectPathResolver::new("/work/project"), true);

	for _ in 0..2 {
		let err = importer
			.import(Path::new("missing.fbx"), ImportFlags::empty(), &fps_options(30.0))
			.expect_err("parse failure surfaces");
		assert!(matches!(err, ImportError::ImportFailed));
	}
	assert!(calls.borrow().generate_args.is_none());
}

#[test]
fn legacy_mode_requires_the_full_animation_triple() {
	let (importer, _) = importer_with(ProjectPathResolver::new("/work/project"), false);
	let importer = importer.with_compatibility(CompatibilityMode::Legacy);

	let err = importer
		.import(Path::new("crate.fbx"), ImportFlags::empty(), &fps_options(30.0))
		.expect_err("legacy mode rejects partial triples");
	assert!(matches!(err, ImportError::MissingOption { key } if key == "animation/trimming"));

	let mut options = fps_options(30.0);
	options.set("animation/trimming", OptionValue::Bool(true));
	options.set("animation/remove_immutable_tracks", OptionValue::Bool(false));

	let graph = importer.import(Path::new("crate.fbx"), ImportFlags::empty(), &options).expect("complete triple imports");
	assert_eq!(graph.root.name, "Root");
}
