//! Structured logging setup.
//!
//! The interactive view owns the terminal, so its logs go to a file. Headless
//! runs log to stderr. `CINEFIND_LOG` overrides the configured filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_ENV: &str = "CINEFIND_LOG";
pub const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "cinefind.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	pub level: String,
	pub target: LogTarget,
}

/// Default location of the interactive session log.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

fn build_filter(level: &str) -> Result<EnvFilter> {
	EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(level))
		.with_context(|| format!("invalid log filter '{level}'"))
}

/// Install the global subscriber. Call once, before the first request.
pub fn initialize(config: &LogConfig) -> Result<()> {
	let filter = build_filter(&config.level)?;
	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	let installed = match &config.target {
		LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
		LogTarget::File(path) => {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent).with_context(|| {
					format!("failed to create log directory {}", parent.display())
				})?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init()
		}
	};

	installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
