//! The main `Container` struct and its associated methods.

use crate::capability::Capability;
use crate::core::{Binding, Instance};
use crate::plugin::Plugins;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The registry of named bindings assembled at startup.
///
/// Registration takes `&mut self`, so the container can only be written while
/// the bootstrap owns it. Once configuration is finished it is moved into an
/// `Arc` and shared read-only with the rest of the framework.
///
/// Names are enumerated in the order they were first registered. A later
/// registration under the same name replaces the value in place.
#[derive(Default)]
pub struct Container {
  bindings: IndexMap<String, Binding>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Registration ---

  /// Binds `name` to `binding`, replacing any previous value.
  pub fn set_binding(&mut self, name: impl Into<String>, binding: impl Into<Binding>) {
    self.bindings.insert(name.into(), binding.into());
  }

  pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.set_binding(name, Binding::Setting(value.into()));
  }

  pub fn add_instance(&mut self, name: impl Into<String>, instance: Instance) {
    self.set_binding(name, Binding::Instance(instance));
  }

  // --- Lookup ---

  pub fn get_binding(&self, name: &str) -> Option<&Binding> {
    self.bindings.get(name)
  }

  /// Returns the raw string bound to `name`, if the binding is a setting.
  pub fn get_setting(&self, name: &str) -> Option<&str> {
    self.get_binding(name).and_then(Binding::as_setting)
  }

  /// Resolves the instance bound to `name` as `T`.
  ///
  /// Returns `None` if nothing is bound, the binding is still a setting, or the
  /// instance was registered as a different type.
  pub fn get_bean<T: ?Sized + Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
    self
      .get_binding(name)
      .and_then(Binding::as_instance)
      .and_then(Instance::downcast::<T>)
  }

  pub fn capability(&self, capability: Capability) -> Option<&Binding> {
    self.get_binding(capability.name())
  }

  /// Reads a boolean setting. Only a case-insensitive `"true"` is true.
  pub fn flag(&self, name: &str) -> bool {
    self
      .get_setting(name)
      .map(|value| value.trim().eq_ignore_ascii_case("true"))
      .unwrap_or(false)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.bindings.contains_key(name)
  }

  /// Binding names in registration order. The iterator is `Clone`, so it can be
  /// restarted without touching the container again.
  pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
    self.bindings.keys().map(String::as_str)
  }

  pub fn bindings(&self) -> impl Iterator<Item = (&str, &Binding)> + '_ {
    self.bindings.iter().map(|(name, binding)| (name.as_str(), binding))
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }

  // --- Resolution ---

  /// Replaces every setting whose value names a registered bean factory with a
  /// freshly built instance. Returns how many bindings were resolved.
  ///
  /// Settings that do not name a bean are left untouched.
  pub fn resolve_beans(&mut self, plugins: &Plugins) -> usize {
    let mut resolved = 0;
    for (name, binding) in self.bindings.iter_mut() {
      let Binding::Setting(id) = &*binding else {
        continue;
      };
      if !plugins.has_bean(id) {
        continue;
      }
      match plugins.instantiate_bean(id) {
        Ok(instance) => {
          tracing::debug!(binding = %name, implementation = %id, "Resolved bean");
          *binding = Binding::Instance(instance);
          resolved += 1;
        }
        Err(e) => {
          tracing::debug!(binding = %name, implementation = %id, error = %e, "Left binding unresolved");
        }
      }
    }
    resolved
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.bindings.iter()).finish()
  }
}
