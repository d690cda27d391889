//! Settings, layered: built-in defaults, then `tasks_fmt.toml` in the working directory if present,
//! then `TASKS_FMT_*` environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{error::Result, renumber::DEFAULT_SECTION_MARKER};

pub const CONFIG_FILE: &str = "tasks_fmt.toml";
pub const DEFAULT_PATH: &str = ".kiro/specs/rust-library-discovery-system/tasks.md";
const ENV_PREFIX: &str = "TASKS_FMT";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Settings {
	/// Task list to rewrite in place, relative to the working directory.
	pub path: PathBuf,
	/// Any line containing this text starts the renumbered section.
	pub section_marker: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			path: PathBuf::from(DEFAULT_PATH),
			section_marker: DEFAULT_SECTION_MARKER.to_owned(),
		}
	}
}

impl Settings {
	pub fn load() -> Result<Self> {
		Self::load_from(Path::new(CONFIG_FILE))
	}

	/// Like [`Settings::load`], reading `config_file` instead of `./tasks_fmt.toml`. A missing file is fine.
	pub fn load_from(config_file: &Path) -> Result<Self> {
		let defaults = Self::default();
		let settings = config::Config::builder()
			.set_default("path", defaults.path.to_string_lossy().into_owned())?
			.set_default("section_marker", defaults.section_marker)?
			.add_source(config::File::from(config_file).required(false))
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?
			.try_deserialize::<Self>()?;
		Ok(settings)
	}
}
