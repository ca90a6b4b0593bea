use crate::configurator::Configurator;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::plugin::Plugins;
use std::panic::{self, AssertUnwindSafe};

/// Instantiates a configurator plugin by identifier and applies it.
///
/// This is an optional extension point, so it never fails: an unknown
/// identifier, an identifier bound to something other than a configurator, an
/// error returned by the plugin, or a panic inside it is logged as a warning
/// and configuration continues with whatever was applied so far.
pub struct CustomConfigurator<'p> {
  id: String,
  plugins: &'p Plugins,
}

impl<'p> CustomConfigurator<'p> {
  pub fn new(id: impl Into<String>, plugins: &'p Plugins) -> Self {
    Self {
      id: id.into(),
      plugins,
    }
  }

  fn try_configure(&self, container: &mut Container) -> Result<()> {
    let configurator = self.plugins.instantiate_configurator(&self.id)?;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| configurator.configure(container)));
    match outcome {
      Ok(result) => result,
      Err(payload) => Err(Error::configurator(&self.id, panic_message(payload.as_ref()))),
    }
  }
}

impl Configurator for CustomConfigurator<'_> {
  fn configure(&self, container: &mut Container) -> Result<()> {
    match self.try_configure(container) {
      Ok(()) => tracing::debug!(configurator = %self.id, "Loaded config from custom configurator"),
      Err(e) => tracing::warn!(configurator = %self.id, error = %e, "Failed to start custom configurator"),
    }
    Ok(())
  }

  fn describe(&self) -> String {
    format!("custom configurator '{}'", self.id)
  }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    format!("panicked: {}", message)
  } else if let Some(message) = payload.downcast_ref::<String>() {
    format!("panicked: {}", message)
  } else {
    "panicked".to_string()
  }
}
