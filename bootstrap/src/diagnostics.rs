//! The logging dependency handed to the orchestrator.
//!
//! Everything in this crate logs through `tracing` macros. Instead of relying on
//! whatever subscriber happens to be installed globally, the orchestrator runs
//! each operation under the [`Dispatch`] held by its `Diagnostics`, so callers
//! (and tests) decide where startup output goes.

use crate::error::{Error, Result};
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;

#[derive(Clone)]
pub struct Diagnostics {
  dispatch: Dispatch,
}

impl Diagnostics {
  /// Uses the dispatcher that is current on the calling thread (the global
  /// subscriber, unless a scoped one is active).
  pub fn current() -> Self {
    tracing::dispatcher::get_default(|dispatch| Self {
      dispatch: dispatch.clone(),
    })
  }

  /// Discards all output.
  pub fn silent() -> Self {
    Self {
      dispatch: Dispatch::none(),
    }
  }

  /// Writes human-readable lines to stdout, up to `level`.
  pub fn with_level(level: LevelFilter) -> Self {
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(level)
      .with_target(true)
      .finish();
    Self {
      dispatch: Dispatch::new(subscriber),
    }
  }

  pub fn from_dispatch(dispatch: Dispatch) -> Self {
    Self { dispatch }
  }

  /// Runs `f` with this dispatcher as the thread's default.
  pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
    tracing::dispatcher::with_default(&self.dispatch, f)
  }

  pub fn debug_enabled(&self) -> bool {
    self.scope(|| tracing::enabled!(tracing::Level::DEBUG))
  }
}

impl Default for Diagnostics {
  fn default() -> Self {
    Self::current()
  }
}

impl std::fmt::Debug for Diagnostics {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Diagnostics").finish_non_exhaustive()
  }
}

/// Parses a `logLevel` value: `trace`, `debug`, `info`, `warn`, `error` or
/// `off`, case-insensitive. `warning` and `fatal` are accepted as aliases.
pub fn parse_level_filter(level: &str) -> Result<LevelFilter> {
  match level.trim().to_ascii_lowercase().as_str() {
    "off" => Ok(LevelFilter::OFF),
    "trace" => Ok(LevelFilter::TRACE),
    "debug" => Ok(LevelFilter::DEBUG),
    "info" => Ok(LevelFilter::INFO),
    "warn" | "warning" => Ok(LevelFilter::WARN),
    "error" | "fatal" => Ok(LevelFilter::ERROR),
    other => Err(Error::InvalidConfigValue {
      field: crate::params::INIT_LOGLEVEL.to_string(),
      message: format!(
        "Unknown level '{}'. Expected 'trace', 'debug', 'info', 'warn', 'error' or 'off'.",
        other
      ),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_level_filter() {
    assert_eq!(parse_level_filter("DEBUG").unwrap(), LevelFilter::DEBUG);
    assert_eq!(parse_level_filter(" warning ").unwrap(), LevelFilter::WARN);
    assert_eq!(parse_level_filter("Off").unwrap(), LevelFilter::OFF);
    assert!(parse_level_filter("loud").is_err());
  }

  #[test]
  fn test_silent_disables_debug() {
    assert!(!Diagnostics::silent().debug_enabled());
    assert!(Diagnostics::with_level(LevelFilter::DEBUG).debug_enabled());
    assert!(!Diagnostics::with_level(LevelFilter::INFO).debug_enabled());
  }
}
