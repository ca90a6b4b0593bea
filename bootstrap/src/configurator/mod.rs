//! Units of configuration logic that mutate a [`Container`].

mod custom;
mod defaults;
mod file;
mod init_params;

pub use custom::CustomConfigurator;
pub use defaults::DefaultConfigurator;
pub use file::FileConfigurator;
pub use init_params::InitParamConfigurator;

use crate::container::Container;
use crate::error::Result;

/// Applies configuration to a container.
///
/// Configurators run in list order and later ones override earlier ones for
/// the same name. An `Err` returned from [`configure`](Configurator::configure)
/// aborts startup; configurators that should only degrade (such as
/// [`CustomConfigurator`]) handle their own failures and return `Ok`.
///
/// Closures taking `&mut Container` are configurators too.
pub trait Configurator {
  fn configure(&self, container: &mut Container) -> Result<()>;

  /// A short description used when logging which configurator ran.
  fn describe(&self) -> String {
    std::any::type_name::<Self>().to_string()
  }
}

impl<F> Configurator for F
where
  F: Fn(&mut Container) -> Result<()>,
{
  fn configure(&self, container: &mut Container) -> Result<()> {
    self(container)
  }
}
