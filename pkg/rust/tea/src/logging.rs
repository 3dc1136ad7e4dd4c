// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;

/// Subscriber settings. `RUST_LOG` takes precedence over `filter` when set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	pub filter: String,
	pub json: bool,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
			json: false,
		}
	}
}

impl LoggingConfig {
	pub fn filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn json(mut self) -> Self {
		self.json = true;
		self
	}

	fn env_filter(&self) -> EnvFilter {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter))
	}
}

/// Installs a human readable subscriber at `info`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_logging() -> bool {
	init_logging_with(LoggingConfig::default())
}

pub fn init_logging_with(config: LoggingConfig) -> bool {
	let builder = tracing_subscriber::fmt().with_env_filter(config.env_filter());
	if config.json {
		builder.json().try_init().is_ok()
	} else {
		builder.try_init().is_ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_config_builder() {
		let config = LoggingConfig::default().filter("engine=debug").json();
		assert_eq!(config.filter, "engine=debug");
		assert!(config.json);
	}

	#[test]
	fn test_second_init_is_refused() {
		init_logging();
		assert!(!init_logging_with(LoggingConfig::default().json()));
	}
}
