//! A typed registry of named implementations.
//!
//! Configuration refers to implementations by string identifier (in init
//! parameters and declarative files). `Plugins` maps each identifier to a
//! factory of a known kind, so resolving an identifier either yields a value of
//! the expected capability or fails with a declared error.

use crate::capability::{CreatorManager, DefaultCreatorManager};
use crate::configurator::Configurator;
use crate::core::Instance;
use crate::error::{Error, PluginKind, Result};
use dashmap::DashMap;

type ConfiguratorFactory = Box<dyn Fn() -> Box<dyn Configurator> + Send + Sync>;
type BeanFactory = Box<dyn Fn() -> Instance + Send + Sync>;

enum Plugin {
  Configurator(ConfiguratorFactory),
  Bean(BeanFactory),
}

impl Plugin {
  fn kind(&self) -> PluginKind {
    match self {
      Plugin::Configurator(_) => PluginKind::Configurator,
      Plugin::Bean(_) => PluginKind::Bean,
    }
  }
}

/// Identifier → factory registry. Thread-safe; registration and lookup may
/// happen from any thread.
#[derive(Default)]
pub struct Plugins {
  factories: DashMap<String, Plugin>,
}

impl Plugins {
  /// Creates an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a registry pre-populated with the implementations this crate
  /// ships: currently the `DefaultCreatorManager`.
  pub fn with_builtins() -> Self {
    let plugins = Self::new();
    plugins.register_bean(
      crate::Capability::CreatorManager.default_implementation(),
      || crate::instance!(trait CreatorManager, DefaultCreatorManager::new()),
    );
    plugins
  }

  // --- Registration ---

  /// Registers a configurator factory, replacing anything under `id`.
  pub fn register_configurator<C, F>(&self, id: impl Into<String>, factory: F)
  where
    C: Configurator + 'static,
    F: Fn() -> C + Send + Sync + 'static,
  {
    let factory: ConfiguratorFactory =
      Box::new(move || -> Box<dyn Configurator> { Box::new(factory()) });
    self.factories.insert(id.into(), Plugin::Configurator(factory));
  }

  /// Registers a bean factory, replacing anything under `id`.
  pub fn register_bean(
    &self,
    id: impl Into<String>,
    factory: impl Fn() -> Instance + Send + Sync + 'static,
  ) {
    self.factories.insert(id.into(), Plugin::Bean(Box::new(factory)));
  }

  // --- Lookup ---

  pub fn contains(&self, id: &str) -> bool {
    self.factories.contains_key(id)
  }

  pub fn has_bean(&self, id: &str) -> bool {
    self
      .factories
      .get(id)
      .map(|plugin| plugin.kind() == PluginKind::Bean)
      .unwrap_or(false)
  }

  pub fn instantiate_configurator(&self, id: &str) -> Result<Box<dyn Configurator>> {
    let plugin = self
      .factories
      .get(id)
      .ok_or_else(|| Error::PluginNotFound(id.to_owned()))?;
    match plugin.value() {
      Plugin::Configurator(factory) => Ok(factory()),
      other => Err(Error::PluginKindMismatch {
        id: id.to_owned(),
        expected: PluginKind::Configurator,
        found: other.kind(),
      }),
    }
  }

  pub fn instantiate_bean(&self, id: &str) -> Result<Instance> {
    let plugin = self
      .factories
      .get(id)
      .ok_or_else(|| Error::PluginNotFound(id.to_owned()))?;
    match plugin.value() {
      Plugin::Bean(factory) => Ok(factory()),
      other => Err(Error::PluginKindMismatch {
        id: id.to_owned(),
        expected: PluginKind::Bean,
        found: other.kind(),
      }),
    }
  }
}
