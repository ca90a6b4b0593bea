use std::fmt;
use thiserror::Error;

/// What a plugin identifier is registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
  Configurator,
  Bean,
}

impl fmt::Display for PluginKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PluginKind::Configurator => f.write_str("configurator"),
      PluginKind::Bean => f.write_str("bean"),
    }
  }
}

/// The main error type for the `fibre_bootstrap` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Configuration resource not found: {0}")]
  ResourceNotFound(String),

  #[error("Failed to read configuration resource '{resource}': {source}")]
  ResourceRead {
    resource: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse configuration resource '{resource}': {message}")]
  ConfigParse { resource: String, message: String },

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },

  #[error("No implementation registered under '{0}'")]
  PluginNotFound(String),

  #[error("Implementation '{id}' is registered as a {found}, expected a {expected}")]
  PluginKindMismatch {
    id: String,
    expected: PluginKind,
    found: PluginKind,
  },

  #[error("Configurator '{name}' failed: {message}")]
  Configurator { name: String, message: String },
}

impl Error {
  /// Convenience constructor for configurators reporting their own failures.
  pub fn configurator(name: impl Into<String>, message: impl fmt::Display) -> Self {
    Error::Configurator {
      name: name.into(),
      message: message.to_string(),
    }
  }
}

/// A specialized `Result` type for `fibre_bootstrap` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
