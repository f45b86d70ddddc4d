use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static FBXIMPORT_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_fbximport(args: &[&str]) -> Output {
	Command::new(fbximport_bin()).args(args).output().expect("fbximport command executes")
}

pub(crate) fn run_fbximport_json(args: &[&str]) -> serde_json::Value {
	let output = run_fbximport(args);
	assert!(
		output.status.success(),
		"fbximport command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fbximport_bin() -> &'static PathBuf {
	FBXIMPORT_BIN.get_or_init(resolve_fbximport_bin)
}

fn resolve_fbximport_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_fbximport") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| manifest_dir.join("target"));

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "fbximport.exe" } else { "fbximport" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "fbximport"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build fbximport binary at {}", bin.display());

	bin
}
