use crate::config::raw::Format;
use crate::config::{process_raw_config, DeclaredBinding};
use crate::configurator::Configurator;
use crate::container::Container;
use crate::core::Binding;
use crate::error::{Error, Result};
use crate::host::HostContext;
use crate::plugin::Plugins;
use std::io::BufReader;
use std::sync::Arc;

/// Loads bindings from one declarative resource.
///
/// Any failure (missing resource, unreadable file, bad syntax, invalid values,
/// unknown bean identifier) is returned as an error. The whole resource is
/// validated and every bean is built before the container is touched, so a
/// failing resource leaves no partial bindings behind.
pub struct FileConfigurator<'p> {
  resource: String,
  context: Arc<HostContext>,
  plugins: &'p Plugins,
}

impl<'p> FileConfigurator<'p> {
  pub fn new(resource: impl Into<String>, context: Arc<HostContext>, plugins: &'p Plugins) -> Self {
    Self {
      resource: resource.into(),
      context,
      plugins,
    }
  }

  pub fn resource(&self) -> &str {
    &self.resource
  }

  fn load(&self) -> Result<Vec<DeclaredBinding>> {
    let file = self.context.open_resource(&self.resource)?;
    let raw = Format::for_resource(&self.resource)
      .parse(BufReader::new(file))
      .map_err(|message| Error::ConfigParse {
        resource: self.resource.clone(),
        message,
      })?;
    process_raw_config(raw)
  }
}

impl Configurator for FileConfigurator<'_> {
  fn configure(&self, container: &mut Container) -> Result<()> {
    let declared = self.load()?;

    let mut staged: Vec<(String, Binding)> = Vec::with_capacity(declared.len());
    for binding in declared {
      match binding {
        DeclaredBinding::Param { name, value } => staged.push((name, Binding::Setting(value))),
        DeclaredBinding::Bean {
          name,
          implementation,
        } => {
          let instance = self.plugins.instantiate_bean(&implementation)?;
          staged.push((name, Binding::Instance(instance)));
        }
      }
    }

    let count = staged.len();
    for (name, binding) in staged {
      container.set_binding(name, binding);
    }
    tracing::debug!(resource = %self.resource, bindings = count, "Loaded declarative config");
    Ok(())
  }

  fn describe(&self) -> String {
    format!("declarative resource '{}'", self.resource)
  }
}
