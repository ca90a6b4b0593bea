//! Runs configurators against a container and exposes the result.

use crate::capability::{Capability, CreatorManager};
use crate::configurator::{Configurator, CustomConfigurator, FileConfigurator};
use crate::container::Container;
use crate::core::{Binding, Instance};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::host::{HostConfig, CONTAINER_ATTRIBUTE, HOST_ATTRIBUTE, HOST_CONFIG_ATTRIBUTE};
use crate::params::Directive;
use crate::plugin::Plugins;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Capabilities whose implementation is reported by [`Orchestrator::debug_config`].
pub const INTROSPECTED_CAPABILITIES: [Capability; 4] = [
  Capability::AccessControl,
  Capability::AjaxFilterManager,
  Capability::ConverterManager,
  Capability::CreatorManager,
];

/// Applies ordered configurators to a container and publishes or describes
/// the result.
///
/// Every operation runs under the orchestrator's [`Diagnostics`], including the
/// configurators it calls.
pub struct Orchestrator<'p> {
  plugins: &'p Plugins,
  diagnostics: Diagnostics,
}

impl<'p> Orchestrator<'p> {
  pub fn new(plugins: &'p Plugins) -> Self {
    Self {
      plugins,
      diagnostics: Diagnostics::current(),
    }
  }

  pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
    self.diagnostics = diagnostics;
    self
  }

  pub fn plugins(&self) -> &'p Plugins {
    self.plugins
  }

  pub fn diagnostics(&self) -> &Diagnostics {
    &self.diagnostics
  }

  /// Lets every configurator have a go at the container, in list order.
  ///
  /// The first error aborts the pass. Configurators that must not abort
  /// startup isolate their own failures.
  pub fn configure(
    &self,
    container: &mut Container,
    configurators: &[Box<dyn Configurator + '_>],
  ) -> Result<()> {
    self.diagnostics.scope(|| -> Result<()> {
      for configurator in configurators {
        debug!("** Adding config from {}", configurator.describe());
        configurator.configure(container)?;
      }
      Ok(())
    })
  }

  /// Applies the configuration named by init parameters: every resource listed
  /// in a `config*` parameter, and the `customConfigurator` plugin.
  ///
  /// Returns whether any such parameter was present. A resource that cannot be
  /// loaded is an error; a failing custom configurator is only logged.
  pub fn configure_using_init_params(
    &self,
    container: &mut Container,
    config: &HostConfig,
  ) -> Result<bool> {
    self.diagnostics.scope(|| -> Result<bool> {
      let mut found_config = false;
      for directive in config.init_params().directives() {
        match directive {
          Directive::LoadFiles { param, resources } => {
            found_config = true;
            for resource in resources {
              debug!(param = %param, resource = %resource, "Loading config resource");
              FileConfigurator::new(resource, Arc::clone(config.context()), self.plugins)
                .configure(container)?;
            }
          }
          Directive::UseCustomConfigurator(id) => {
            found_config = true;
            CustomConfigurator::new(id, self.plugins).configure(container)?;
          }
          // Copied by the init-param configurator.
          Directive::PassThroughSetting { .. } => {}
        }
      }
      Ok(found_config)
    })
  }

  /// Sets the `publishContainerAs` attribute of the host context to the
  /// container. Does nothing when the parameter is absent or blank.
  pub fn publish_container(&self, container: &Arc<Container>, config: &HostConfig) {
    self.diagnostics.scope(|| {
      if let Some(publish_name) = config.init_params().publish_name() {
        debug!(attribute = %publish_name, "Publishing container");
        config
          .context()
          .set_attribute(publish_name, Instance::from_arc(Arc::clone(container)));
      }
    })
  }

  /// Exposes the container, its web-context builder, the host configuration and
  /// the host itself as host context attributes, so components without a
  /// reference to the bootstrap can find them.
  ///
  /// The configuration is published as a `Weak<HostConfig>`: it owns the
  /// context, so a strong handle would keep both alive forever.
  pub fn prepare_context(
    &self,
    container: &Arc<Container>,
    config: &Arc<HostConfig>,
    host: Option<Instance>,
  ) {
    self.diagnostics.scope(|| {
      let context = config.context();
      context.set_attribute(CONTAINER_ATTRIBUTE, Instance::from_arc(Arc::clone(container)));
      match container.capability(Capability::WebContextBuilder) {
        Some(Binding::Instance(builder)) => {
          context.set_attribute(Capability::WebContextBuilder.name(), builder.clone())
        }
        Some(Binding::Setting(id)) => {
          debug!(implementation = %id, "WebContextBuilder is unresolved; publishing its identifier");
          context.set_attribute(Capability::WebContextBuilder.name(), Instance::new(id.clone()))
        }
        None => {}
      }
      context.set_attribute(HOST_CONFIG_ATTRIBUTE, Instance::new(Arc::downgrade(config)));
      if let Some(host) = host {
        context.set_attribute(HOST_ATTRIBUTE, host);
      }
    })
  }

  /// Logs what we are running on.
  pub fn log_startup(&self, config: &HostConfig) {
    self.diagnostics.scope(|| {
      info!("fibre_bootstrap {} starting.", env!("CARGO_PKG_VERSION"));
      info!("- Host:        {}", config.name());
      info!("- Server info: {}", config.context().server_info());
      info!(
        "- Platform:    {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
      );
    })
  }

  /// Logs a description of the container when debug output is enabled and
  /// returns it. Returns `None`, without reading the container, otherwise.
  pub fn debug_config(&self, container: &Container) -> Option<ContainerReport> {
    if !self.diagnostics.debug_enabled() {
      return None;
    }
    let report = ContainerReport::describe(container);
    self.diagnostics.scope(|| report.log());
    Some(report)
  }
}

// --- Introspection ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
  Param,
  Bean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingReport {
  pub name: String,
  pub kind: BindingKind,
  pub value: String,
  pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ImplementationReport {
  Resolved { type_name: String },
  Unresolved { implementation: String },
  Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
  pub capability: String,
  pub implementation: ImplementationReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorReport {
  pub name: String,
  pub kind: String,
  pub type_name: String,
}

/// A read-only description of a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerReport {
  pub container_type: String,
  pub bindings: Vec<BindingReport>,
  pub capabilities: Vec<CapabilityReport>,
  pub creators: Vec<CreatorReport>,
}

impl ContainerReport {
  pub fn describe(container: &Container) -> Self {
    let bindings = container
      .bindings()
      .map(|(name, binding)| BindingReport {
        name: name.to_owned(),
        kind: match binding {
          Binding::Setting(_) => BindingKind::Param,
          Binding::Instance(_) => BindingKind::Bean,
        },
        value: binding.to_string(),
        type_name: binding.type_name().to_owned(),
      })
      .collect();

    let capabilities = INTROSPECTED_CAPABILITIES
      .into_iter()
      .map(|capability| CapabilityReport {
        capability: capability.name().to_owned(),
        implementation: match container.capability(capability) {
          Some(Binding::Instance(instance)) => ImplementationReport::Resolved {
            type_name: instance.type_name().to_owned(),
          },
          Some(Binding::Setting(id)) => ImplementationReport::Unresolved {
            implementation: id.clone(),
          },
          None => ImplementationReport::Missing,
        },
      })
      .collect();

    let creators = container
      .get_bean::<dyn CreatorManager>(Capability::CreatorManager.name())
      .map(|manager| {
        manager
          .creator_names()
          .into_iter()
          .filter_map(|name| {
            let creator = manager.creator(&name)?;
            Some(CreatorReport {
              kind: creator.kind().to_owned(),
              type_name: creator.type_name().to_owned(),
              name,
            })
          })
          .collect()
      })
      .unwrap_or_default();

    Self {
      container_type: std::any::type_name::<Container>().to_owned(),
      bindings,
      capabilities,
      creators,
    }
  }

  fn log(&self) {
    debug!("Container");
    debug!("  Type: {}", self.container_type);
    for binding in &self.bindings {
      let label = match binding.kind {
        BindingKind::Param => "Param",
        BindingKind::Bean => "Bean",
      };
      debug!(
        "  {}: {} = {} ({})",
        label, binding.name, binding.value, binding.type_name
      );
    }
    for capability in &self.capabilities {
      debug!("{}", capability.capability);
      match &capability.implementation {
        ImplementationReport::Resolved { type_name } => debug!("  Type: {}", type_name),
        ImplementationReport::Unresolved { implementation } => {
          debug!("  Type: unresolved ({})", implementation)
        }
        ImplementationReport::Missing => debug!("  Type: not configured"),
      }
      if capability.capability == Capability::CreatorManager.name() {
        for creator in &self.creators {
          debug!(
            "  Creator: {} = {} ({})",
            creator.name, creator.kind, creator.type_name
          );
        }
      }
    }
  }
}
