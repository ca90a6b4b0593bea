//! Core value types stored in the container: resolved instances and bindings.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A shared handle to a resolved implementation.
///
/// The handle always stores an `Arc<T>` behind `dyn Any`, so a value registered
/// as a trait object (`Arc<dyn Trait>`) is resolved back as the same trait
/// object. The concrete type name is captured at construction for
/// introspection, since it can no longer be recovered once the value has been
/// erased.
#[derive(Clone)]
pub struct Instance {
  type_name: &'static str,
  value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
  /// Wraps a concrete value.
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self::from_arc(Arc::new(value))
  }

  /// Wraps an already shared concrete value, keeping pointer identity.
  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Self {
      type_name: type_name::<T>(),
      value: Arc::new(value),
    }
  }

  /// Wraps a trait object. `concrete_type` is reported by diagnostics in place
  /// of the erased type; the [`instance!`](crate::instance) macro fills it in.
  pub fn from_trait<I: ?Sized + Any + Send + Sync>(value: Arc<I>, concrete_type: &'static str) -> Self {
    Self {
      type_name: concrete_type,
      value: Arc::new(value),
    }
  }

  /// The concrete type name of the wrapped implementation.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Resolves the instance as `T`, which must be the exact type it was
  /// registered as (a concrete type or a `dyn Trait`).
  pub fn downcast<T: ?Sized + Any + Send + Sync>(&self) -> Option<Arc<T>> {
    self.value.downcast_ref::<Arc<T>>().cloned()
  }

  /// Whether both handles point at the same registration.
  pub fn ptr_eq(&self, other: &Instance) -> bool {
    Arc::ptr_eq(&self.value, &other.value)
  }
}

impl fmt::Debug for Instance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Instance({})", self.type_name)
  }
}

/// The value bound to a name in the container.
#[derive(Clone, Debug)]
pub enum Binding {
  /// A raw configuration string.
  Setting(String),
  /// A resolved capability implementation.
  Instance(Instance),
}

impl Binding {
  pub fn as_setting(&self) -> Option<&str> {
    match self {
      Binding::Setting(value) => Some(value),
      Binding::Instance(_) => None,
    }
  }

  pub fn as_instance(&self) -> Option<&Instance> {
    match self {
      Binding::Setting(_) => None,
      Binding::Instance(instance) => Some(instance),
    }
  }

  /// Type name reported by diagnostics: `String` for settings, the
  /// implementation's concrete type otherwise.
  pub fn type_name(&self) -> &'static str {
    match self {
      Binding::Setting(_) => type_name::<String>(),
      Binding::Instance(instance) => instance.type_name(),
    }
  }

  /// Whether the binding holds something usable. Blank settings do not count.
  pub fn is_present(&self) -> bool {
    match self {
      Binding::Setting(value) => !value.trim().is_empty(),
      Binding::Instance(_) => true,
    }
  }
}

impl From<String> for Binding {
  fn from(value: String) -> Self {
    Binding::Setting(value)
  }
}

impl From<&str> for Binding {
  fn from(value: &str) -> Self {
    Binding::Setting(value.to_owned())
  }
}

impl From<Instance> for Binding {
  fn from(instance: Instance) -> Self {
    Binding::Instance(instance)
  }
}

impl fmt::Display for Binding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Binding::Setting(value) => f.write_str(value),
      Binding::Instance(instance) => write!(f, "<{}>", instance.type_name()),
    }
  }
}
