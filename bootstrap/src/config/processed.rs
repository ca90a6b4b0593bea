// src/config/processed.rs
use crate::config::raw::{default_version, ConfigRaw};
use crate::error::{Error, Result};

/// A validated entry from a declarative resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredBinding {
  /// Stored as a setting.
  Param { name: String, value: String },
  /// Instantiated from the plugin registry.
  Bean { name: String, implementation: String },
}

impl DeclaredBinding {
  pub fn name(&self) -> &str {
    match self {
      DeclaredBinding::Param { name, .. } => name,
      DeclaredBinding::Bean { name, .. } => name,
    }
  }
}

// --- Conversion and Validation Logic ---

/// Validates a parsed resource into the bindings it declares, in the order
/// they must be applied: all params, then all beans, each in file order.
pub fn process_raw_config(raw_config: ConfigRaw) -> Result<Vec<DeclaredBinding>> {
  if raw_config.version != default_version() {
    return Err(Error::InvalidConfigValue {
      field: "version".to_string(),
      message: format!(
        "Unsupported version {}. Expected {}.",
        raw_config.version,
        default_version()
      ),
    });
  }

  let mut declared = Vec::with_capacity(raw_config.params.len() + raw_config.beans.len());

  // 1. Params
  for (name, value) in raw_config.params {
    let name = validate_name(name, "params")?;
    declared.push(DeclaredBinding::Param {
      name,
      value: value.to_string(),
    });
  }

  // 2. Beans
  for (name, implementation) in raw_config.beans {
    let name = validate_name(name, "beans")?;
    let implementation = implementation.trim();
    if implementation.is_empty() {
      return Err(Error::InvalidConfigValue {
        field: format!("beans.{}", name),
        message: "Implementation identifier cannot be empty.".to_string(),
      });
    }
    declared.push(DeclaredBinding::Bean {
      implementation: implementation.to_owned(),
      name,
    });
  }

  Ok(declared)
}

fn validate_name(name: String, section: &str) -> Result<String> {
  let trimmed = name.trim();
  if trimmed.is_empty() {
    return Err(Error::InvalidConfigValue {
      field: section.to_string(),
      message: "Binding names cannot be empty.".to_string(),
    });
  }
  Ok(trimmed.to_owned())
}
