//! # Fibre Bootstrap
//!
//! A startup-time bean registry and configuration orchestrator for remoting
//! frameworks.
//!
//! Before a framework serves its first request, `fibre_bootstrap` assembles a
//! [`Container`] of named bindings from ordered sources: built-in defaults,
//! host init parameters, declarative YAML/JSON resources and custom
//! configurators. Later sources override earlier ones, one name at a time.
//!
//! ## Core Concepts
//!
//! - **Container**: a flat, ordered, string-keyed table of [`Binding`]s. Each
//!   binding is either a raw setting string or a resolved [`Instance`].
//! - **Configurator**: anything that mutates a container. Built-in variants
//!   seed defaults, copy init parameters, load declarative resources, and run
//!   custom plugins.
//! - **Plugins**: a registry mapping implementation identifiers, as written in
//!   configuration, to factories.
//! - **Orchestrator**: applies configurators in order, isolates custom
//!   configurator failures, and publishes or describes the result.
//! - **Bootstrap**: the whole startup sequence for one host.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_bootstrap::{
//!   Bootstrap, Capability, Container, Diagnostics, HostConfig, HostContext, InitParams, Plugins,
//! };
//! use std::sync::Arc;
//!
//! let plugins = Plugins::with_builtins();
//! plugins.register_configurator("AuditConfigurator", || {
//!   |container: &mut Container| {
//!     container.add_parameter("audit", "enabled");
//!     Ok::<_, fibre_bootstrap::Error>(())
//!   }
//! });
//!
//! let params = InitParams::new()
//!   .with("debug", "true")
//!   .with("customConfigurator", "AuditConfigurator")
//!   .with("publishContainerAs", "registry");
//! let context = Arc::new(HostContext::new("demo server"));
//! let config = HostConfig::new("remoting", params, Arc::clone(&context));
//!
//! let container = Bootstrap::new(config)
//!   .plugins(&plugins)
//!   .diagnostics(Diagnostics::silent())
//!   .run()
//!   .unwrap();
//!
//! assert!(container.flag("debug"));
//! assert_eq!(container.get_setting("audit"), Some("enabled"));
//! assert!(container.capability(Capability::CreatorManager).unwrap().as_instance().is_some());
//!
//! let published = context.attribute("registry").unwrap().downcast::<Container>().unwrap();
//! assert!(Arc::ptr_eq(&published, &container));
//! ```

mod bootstrap;
pub mod capability;
pub mod config;
pub mod configurator;
mod container;
mod core;
pub mod diagnostics;
pub mod error;
mod global;
pub mod host;
mod macros;
pub mod orchestrator;
pub mod params;
mod plugin;

pub use bootstrap::Bootstrap;
pub use capability::{Capability, Creator, CreatorManager, DefaultCreatorManager};
pub use configurator::{
  Configurator, CustomConfigurator, DefaultConfigurator, FileConfigurator, InitParamConfigurator,
};
pub use container::Container;
pub use crate::core::{Binding, Instance};
pub use diagnostics::Diagnostics;
pub use error::{Error, Result};
pub use global::global;
pub use host::{HostConfig, HostContext};
pub use orchestrator::{ContainerReport, Orchestrator};
pub use params::{Directive, InitParams};
pub use plugin::Plugins;
