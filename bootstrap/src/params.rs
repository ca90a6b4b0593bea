//! Host initialization parameters and the directives derived from them.

use indexmap::IndexMap;

/// Init parameter prefix: declarative config resources.
/// Only a prefix, so several parameters (`config`, `config2`, ...) can each
/// name resources.
pub const INIT_CONFIG: &str = "config";

/// Init parameter: skip the default config resource if none are specified.
pub const INIT_SKIP_DEFAULT: &str = "skipDefaultConfig";

/// Init parameter: startup log verbosity.
pub const INIT_LOGLEVEL: &str = "logLevel";

/// Init parameter: host context attribute name to publish the container under.
pub const INIT_PUBLISH_CONTAINER: &str = "publishContainerAs";

/// Init parameter: identifier of a custom configurator plugin.
pub const INIT_CUSTOM_CONFIGURATOR: &str = "customConfigurator";

/// Resource loaded when no config parameter was given and the default is not
/// skipped.
pub const DEFAULT_CONFIG_RESOURCE: &str = "fibre_bootstrap.yaml";

/// Ordered name → value mapping supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitParams {
  params: IndexMap<String, String>,
}

impl InitParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets `name`, replacing any previous value.
  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.params.insert(name.into(), value.into());
  }

  /// Builder-style [`insert`](Self::insert).
  pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.insert(name, value);
    self
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.params.get(name).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
    self
      .params
      .iter()
      .map(|(name, value)| (name.as_str(), value.as_str()))
  }

  pub fn len(&self) -> usize {
    self.params.len()
  }

  pub fn is_empty(&self) -> bool {
    self.params.is_empty()
  }

  /// Classifies every parameter, in host order.
  pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
    self.iter().map(|(name, value)| Directive::classify(name, value))
  }

  /// `skipDefaultConfig`; only a case-insensitive `"true"` is true.
  pub fn skip_default_config(&self) -> bool {
    self
      .get(INIT_SKIP_DEFAULT)
      .map(|value| value.trim().eq_ignore_ascii_case("true"))
      .unwrap_or(false)
  }

  pub fn log_level(&self) -> Option<&str> {
    non_blank(self.get(INIT_LOGLEVEL))
  }

  /// `publishContainerAs`, exactly as given. Blank values publish nothing.
  pub fn publish_name(&self) -> Option<&str> {
    self
      .get(INIT_PUBLISH_CONTAINER)
      .filter(|name| !name.trim().is_empty())
  }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InitParams {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = InitParams::new();
    params.extend(iter);
    params
  }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for InitParams {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    for (name, value) in iter {
      self.insert(name, value);
    }
  }
}

/// What one init parameter asks the bootstrap to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
  /// A `config*` parameter. `resources` may be empty when the value is blank;
  /// the parameter still counts as configuration being present.
  LoadFiles { param: String, resources: Vec<String> },
  /// `customConfigurator`: the plugin identifier to instantiate.
  UseCustomConfigurator(String),
  /// Any other parameter, copied into the container as a setting.
  PassThroughSetting { name: String, value: String },
}

impl Directive {
  pub fn classify(name: &str, value: &str) -> Directive {
    if name.starts_with(INIT_CONFIG) {
      Directive::LoadFiles {
        param: name.to_owned(),
        resources: split_resources(value),
      }
    } else if name == INIT_CUSTOM_CONFIGURATOR {
      Directive::UseCustomConfigurator(value.trim().to_owned())
    } else {
      Directive::PassThroughSetting {
        name: name.to_owned(),
        value: value.to_owned(),
      }
    }
  }

  /// Whether this directive supplies configuration beyond plain settings.
  pub fn is_config_source(&self) -> bool {
    !matches!(self, Directive::PassThroughSetting { .. })
  }
}

/// Splits a `config*` value on commas and newlines, trimming each entry and
/// dropping empty ones.
pub fn split_resources(value: &str) -> Vec<String> {
  value
    .split([',', '\n'])
    .map(str::trim)
    .filter(|resource| !resource.is_empty())
    .map(str::to_owned)
    .collect()
}
