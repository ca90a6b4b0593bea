//! The full startup sequence for a hosted component.

use crate::configurator::{Configurator, DefaultConfigurator, FileConfigurator, InitParamConfigurator};
use crate::container::Container;
use crate::core::Instance;
use crate::diagnostics::{parse_level_filter, Diagnostics};
use crate::error::Result;
use crate::global::global;
use crate::host::HostConfig;
use crate::orchestrator::Orchestrator;
use crate::params::DEFAULT_CONFIG_RESOURCE;
use crate::plugin::Plugins;
use std::sync::Arc;

/// Builds the container for one host.
///
/// [`run`](Bootstrap::run) goes through these steps, in order:
///
/// 1. log startup information;
/// 2. seed the default beans, then copy every init parameter;
/// 3. apply the `config*` resources and the `customConfigurator` plugin;
/// 4. if neither was given and `skipDefaultConfig` is not true, load
///    [`DEFAULT_CONFIG_RESOURCE`];
/// 5. apply the configurators added with [`configurator`](Bootstrap::configurator);
/// 6. resolve implementation identifiers into instances;
/// 7. freeze the container and expose it through the host context;
/// 8. log the debug description of the container.
///
/// Declarative resources that fail to load abort the run. Custom configurator
/// failures are logged and skipped.
pub struct Bootstrap<'a> {
  config: Arc<HostConfig>,
  plugins: &'a Plugins,
  diagnostics: Option<Diagnostics>,
  configurators: Vec<Box<dyn Configurator + 'a>>,
  host: Option<Instance>,
}

impl<'a> Bootstrap<'a> {
  pub fn new(config: impl Into<Arc<HostConfig>>) -> Self {
    Self {
      config: config.into(),
      plugins: global(),
      diagnostics: None,
      configurators: Vec::new(),
      host: None,
    }
  }

  /// Resolves identifiers against `plugins` instead of [`global()`].
  pub fn plugins(mut self, plugins: &'a Plugins) -> Self {
    self.plugins = plugins;
    self
  }

  /// Logs through `diagnostics`. Without this, a `logLevel` init parameter
  /// selects a stdout logger at that level, and otherwise the current
  /// dispatcher is used.
  pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
    self.diagnostics = Some(diagnostics);
    self
  }

  /// Appends a configurator that runs after every init-parameter source.
  pub fn configurator(mut self, configurator: impl Configurator + 'a) -> Self {
    self.configurators.push(Box::new(configurator));
    self
  }

  /// The hosting component, exposed under [`HOST_ATTRIBUTE`](crate::host::HOST_ATTRIBUTE).
  pub fn host(mut self, host: Instance) -> Self {
    self.host = Some(host);
    self
  }

  pub fn run(self) -> Result<Arc<Container>> {
    let Bootstrap {
      config,
      plugins,
      diagnostics,
      configurators,
      host,
    } = self;

    let diagnostics = diagnostics.unwrap_or_else(|| diagnostics_for(&config));
    let orchestrator = Orchestrator::new(plugins).with_diagnostics(diagnostics);
    orchestrator.log_startup(&config);

    let mut container = Container::new();

    let sources: Vec<Box<dyn Configurator>> = vec![
      Box::new(DefaultConfigurator::new()),
      Box::new(InitParamConfigurator::new(config.init_params().clone())),
    ];
    orchestrator.configure(&mut container, &sources)?;

    let found_config = orchestrator.configure_using_init_params(&mut container, &config)?;
    if !found_config && !config.init_params().skip_default_config() {
      let fallback: Vec<Box<dyn Configurator + '_>> = vec![Box::new(FileConfigurator::new(
        DEFAULT_CONFIG_RESOURCE,
        Arc::clone(config.context()),
        plugins,
      ))];
      orchestrator.configure(&mut container, &fallback)?;
    }

    orchestrator.configure(&mut container, &configurators)?;

    let resolved = orchestrator
      .diagnostics()
      .scope(|| container.resolve_beans(plugins));
    orchestrator.diagnostics().scope(|| {
      tracing::debug!(resolved, bindings = container.len(), "Configuration finished")
    });

    let container = Arc::new(container);
    orchestrator.prepare_context(&container, &config, host);
    orchestrator.publish_container(&container, &config);
    orchestrator.debug_config(&container);

    Ok(container)
  }
}

fn diagnostics_for(config: &HostConfig) -> Diagnostics {
  let Some(level) = config.init_params().log_level() else {
    return Diagnostics::current();
  };
  match parse_level_filter(level) {
    Ok(filter) => Diagnostics::with_level(filter),
    Err(e) => {
      let diagnostics = Diagnostics::current();
      diagnostics.scope(|| tracing::warn!(error = %e, "Ignoring logLevel"));
      diagnostics
    }
  }
}
