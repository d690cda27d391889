//! Error types for loading, saving and configuring.

use std::path::PathBuf;

use miette::Diagnostic;

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Error {
	#[error("could not find {}", .path.display())]
	#[diagnostic(code(tasks_fmt::not_found), help("run from the directory containing the task list, or point TASKS_FMT_PATH at it"))]
	NotFound { path: PathBuf },

	#[error("failed to {action} {}", .path.display())]
	#[diagnostic(code(tasks_fmt::io))]
	Io {
		action: &'static str,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid configuration")]
	#[diagnostic(code(tasks_fmt::config), help("check tasks_fmt.toml and TASKS_FMT_* environment variables"))]
	Config(#[from] config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
