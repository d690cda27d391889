//! Shared test infrastructure for integration tests.
//!
//! `TestContext` lays out a fixture tree in a temp directory that acts as the working directory of
//! the binary, so the default task list path resolves inside it.
//!
//! # Example
//!
//! ```ignore
//! let ctx = TestContext::new(&format!("//- /{TASKS_PATH}\n## File Analysis Tasks\n"));
//!
//! let (status, stdout, stderr) = ctx.run();
//! assert!(status.success());
//! ```

use std::{
	any::Any,
	fs,
	path::{Path, PathBuf},
	process::{Command, ExitStatus},
};

use v_fixtures::Fixture;
use walkdir::WalkDir;

/// Where the binary looks for the task list unless configured otherwise.
pub const TASKS_PATH: &str = ".kiro/specs/rust-library-discovery-system/tasks.md";

pub const SUCCESS_STDOUT: &str = "\
All task formatting fixed successfully!
✅ Main tasks: - [ ] X. Analyze filename
✅ Sub-tasks: - [ ] X.Y Lines A-B: Content analysis needed
✅ Nested sub-tasks: - [ ] X.Y Lines A-B: Content analysis needed
";

/// Env vars that would leak the developer's setup into a test run.
const SCRUBBED_ENV: &[&str] = &["RUST_LOG", "TASKS_FMT_PATH", "TASKS_FMT_SECTION_MARKER", "TASKS_FMT_TRACE_FILE"];

pub struct TestContext {
	root: PathBuf,
	/// Owns the temp directory; removed when the context is dropped.
	_guard: Box<dyn Any>,
}

impl TestContext {
	/// Create a context from a fixture string (`//- /relative/path` headers followed by file contents).
	///
	/// ```ignore
	/// let ctx = TestContext::new("//- /tasks_fmt.toml\npath = \"t.md\"\n//- /t.md\n## File Analysis Tasks\n");
	/// ```
	pub fn new(fixture_str: &str) -> Self {
		let fixture = Fixture::parse(fixture_str).write_to_tempdir();
		let root = fixture.root.to_path_buf();
		Self { root, _guard: Box::new(fixture) }
	}

	/// A context with no files at all.
	pub fn empty() -> Self {
		let dir = tempfile::tempdir().unwrap();
		Self {
			root: dir.path().to_owned(),
			_guard: Box::new(dir),
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Run the binary from the context root.
	///
	/// Returns (exit_status, stdout, stderr) for easy assertions.
	pub fn run(&self) -> (ExitStatus, String, String) {
		self.run_with_env(&[])
	}

	pub fn run_with_env(&self, env: &[(&str, &str)]) -> (ExitStatus, String, String) {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_tasks_fmt"));
		cmd.current_dir(self.root());
		for key in SCRUBBED_ENV {
			cmd.env_remove(key);
		}
		for (key, value) in env {
			cmd.env(key, value);
		}
		let output = cmd.output().unwrap();
		(
			output.status,
			String::from_utf8_lossy(&output.stdout).into_owned(),
			String::from_utf8_lossy(&output.stderr).into_owned(),
		)
	}

	/// Write exact bytes, for content a fixture string can't carry (`\r\n` line endings).
	pub fn write_raw(&self, relative_path: &str, content: &[u8]) {
		let path = self.path(relative_path);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, content).unwrap();
	}

	pub fn read(&self, relative_path: &str) -> String {
		fs::read_to_string(self.path(relative_path)).unwrap()
	}

	pub fn path(&self, relative_path: &str) -> PathBuf {
		self.root().join(relative_path)
	}

	/// Every file under the root, relative and sorted.
	pub fn files(&self) -> Vec<PathBuf> {
		let mut files: Vec<PathBuf> = WalkDir::new(self.root())
			.into_iter()
			.filter_map(Result::ok)
			.filter(|e| e.file_type().is_file())
			.map(|e| e.path().strip_prefix(self.root()).unwrap().to_owned())
			.collect();
		files.sort();
		files
	}
}
