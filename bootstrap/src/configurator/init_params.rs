use crate::configurator::Configurator;
use crate::container::Container;
use crate::error::Result;
use crate::params::InitParams;

/// Copies every init parameter into the container as a setting, verbatim and
/// in host order. Names are not checked, so a parameter named after a
/// capability or a default setting overrides it.
#[derive(Debug, Clone, Default)]
pub struct InitParamConfigurator {
  params: InitParams,
}

impl InitParamConfigurator {
  pub fn new(params: InitParams) -> Self {
    Self { params }
  }
}

impl Configurator for InitParamConfigurator {
  fn configure(&self, container: &mut Container) -> Result<()> {
    for (name, value) in self.params.iter() {
      container.add_parameter(name, value);
    }
    Ok(())
  }

  fn describe(&self) -> String {
    format!("init parameters ({} entries)", self.params.len())
  }
}
