//! The global plugin registry instance and access functions.

use crate::plugin::Plugins;
use once_cell::sync::Lazy;

// Created on first access, seeded with the built-in implementations.
static GLOBAL_PLUGINS: Lazy<Plugins> = Lazy::new(Plugins::with_builtins);

/// Provides a reference to the process-wide plugin registry.
///
/// [`Bootstrap`](crate::Bootstrap) uses it unless another registry is passed
/// explicitly, so implementations registered here can be named from init
/// parameters and declarative files.
///
/// # Examples
///
/// ```
/// use fibre_bootstrap::{global, Container};
///
/// global().register_configurator("AuditConfigurator", || {
///   |container: &mut Container| {
///     container.add_parameter("audit", "true");
///     Ok::<_, fibre_bootstrap::Error>(())
///   }
/// });
///
/// assert!(global().contains("AuditConfigurator"));
/// ```
pub fn global() -> &'static Plugins {
  &GLOBAL_PLUGINS
}
