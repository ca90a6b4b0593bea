use crate::capability::{Capability, DEFAULT_SETTINGS};
use crate::configurator::Configurator;
use crate::container::Container;
use crate::error::Result;

/// Seeds the built-in bindings: one default implementation identifier per
/// [`Capability`] and the default settings. Runs first so anything later can
/// override it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfigurator;

impl DefaultConfigurator {
  pub fn new() -> Self {
    Self
  }

  /// Same as [`configure`](Configurator::configure), for callers that want to
  /// seed a container without going through the `Result`.
  pub fn setup_defaults(container: &mut Container) {
    for capability in Capability::ALL {
      container.add_parameter(capability.name(), capability.default_implementation());
    }
    for (name, value) in DEFAULT_SETTINGS {
      container.add_parameter(name, value);
    }
  }
}

impl Configurator for DefaultConfigurator {
  fn configure(&self, container: &mut Container) -> Result<()> {
    Self::setup_defaults(container);
    Ok(())
  }

  fn describe(&self) -> String {
    "default beans".to_string()
  }
}
