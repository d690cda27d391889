//! Subscriber setup.
//!
//! Human-readable events go to stderr, filtered by `RUST_LOG`, else by directives baked in at build
//! time from `.cargo/log_directives`, else `warn`. If `TASKS_FMT_TRACE_FILE` is set, everything at
//! `debug` and above is also appended there as JSON lines, which is what the integration tests read.

use std::{fs::OpenOptions, sync::Mutex};

use color_eyre::eyre::{Result, WrapErr as _};
use tracing_subscriber::{EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub const TRACE_FILE_ENV: &str = "TASKS_FMT_TRACE_FILE";
const DEFAULT_DIRECTIVES: &str = "warn";
/// Set by build.rs from `.cargo/log_directives`, if that file exists at build time.
const BAKED_DIRECTIVES: Option<&str> = option_env!("LOG_DIRECTIVES");

fn directives(rust_log: Option<String>, baked: Option<&str>) -> String {
	rust_log.filter(|d| !d.trim().is_empty()).or_else(|| baked.map(str::to_owned)).unwrap_or_else(|| DEFAULT_DIRECTIVES.to_owned())
}

pub fn init() -> Result<()> {
	let directives = directives(std::env::var("RUST_LOG").ok(), BAKED_DIRECTIVES);

	let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).with_filter(EnvFilter::new(directives));

	let json_layer = match std::env::var_os(TRACE_FILE_ENV) {
		Some(path) => {
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(&path)
				.wrap_err_with(|| format!("Failed to open trace file {}", path.to_string_lossy()))?;
			Some(fmt::layer().json().with_writer(Mutex::new(file)).with_filter(EnvFilter::new("debug")))
		}
		None => None,
	};

	tracing_subscriber::registry().with(stderr_layer).with(json_layer).try_init()?;
	Ok(())
}
