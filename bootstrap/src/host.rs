//! The hosting environment: a shared attribute store with resources, and the
//! per-host configuration (name + init parameters).

use crate::core::Instance;
use crate::error::{Error, Result};
use crate::params::InitParams;
use dashmap::DashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Attribute under which the finished container is exposed.
pub const CONTAINER_ATTRIBUTE: &str = "Container";
/// Attribute under which the host configuration is exposed, as a
/// `Weak<HostConfig>` since the configuration owns the context.
pub const HOST_CONFIG_ATTRIBUTE: &str = "HostConfig";
/// Attribute under which the hosting component itself is exposed.
pub const HOST_ATTRIBUTE: &str = "Host";

/// State shared by every component of the hosting environment.
///
/// Attributes can be set and read from any thread. Resources are files below
/// an optional root directory; without a root, resource names are taken
/// relative to the working directory.
#[derive(Debug, Default)]
pub struct HostContext {
  server_info: String,
  resource_root: Option<PathBuf>,
  attributes: DashMap<String, Instance>,
}

impl HostContext {
  pub fn new(server_info: impl Into<String>) -> Self {
    Self {
      server_info: server_info.into(),
      ..Default::default()
    }
  }

  pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
    self.resource_root = Some(root.into());
    self
  }

  pub fn server_info(&self) -> &str {
    &self.server_info
  }

  // --- Attributes ---

  /// Sets `name`, replacing any previous attribute.
  pub fn set_attribute(&self, name: impl Into<String>, value: Instance) {
    self.attributes.insert(name.into(), value);
  }

  pub fn attribute(&self, name: &str) -> Option<Instance> {
    self.attributes.get(name).map(|entry| entry.value().clone())
  }

  pub fn attribute_names(&self) -> Vec<String> {
    self.attributes.iter().map(|entry| entry.key().clone()).collect()
  }

  // --- Resources ---

  /// Maps a resource name to a path. A leading `/` is relative to the root.
  pub fn resource_path(&self, name: &str) -> PathBuf {
    let relative = Path::new(name.trim_start_matches('/'));
    match &self.resource_root {
      Some(root) => root.join(relative),
      None => relative.to_path_buf(),
    }
  }

  pub fn open_resource(&self, name: &str) -> Result<File> {
    let path = self.resource_path(name);
    if !path.is_file() {
      return Err(Error::ResourceNotFound(format!(
        "{} (looked for {})",
        name,
        path.display()
      )));
    }
    File::open(&path).map_err(|source| Error::ResourceRead {
      resource: name.to_owned(),
      source,
    })
  }
}

/// The configuration of one hosted component.
#[derive(Debug)]
pub struct HostConfig {
  name: String,
  init_params: InitParams,
  context: Arc<HostContext>,
}

impl HostConfig {
  pub fn new(name: impl Into<String>, init_params: InitParams, context: Arc<HostContext>) -> Self {
    Self {
      name: name.into(),
      init_params,
      context,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn init_params(&self) -> &InitParams {
    &self.init_params
  }

  pub fn context(&self) -> &Arc<HostContext> {
    &self.context
  }
}
