use crate::config::de::ScalarRaw;
use indexmap::IndexMap;
use serde::Deserialize;

// --- Top Level Config ---

/// One declarative configuration resource, as written on disk.
///
/// ```yaml
/// version: 1
/// params:
///   debug: false
/// beans:
///   CreatorManager: DefaultCreatorManager
/// ```
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigRaw {
  #[serde(default = "default_version")]
  pub version: u32,
  /// Settings, stored verbatim. Order is kept so a repeated name in a later
  /// resource overrides predictably.
  #[serde(default)]
  pub params: IndexMap<String, ScalarRaw>,
  /// Name → implementation identifier, instantiated when the resource is
  /// applied.
  #[serde(default)]
  pub beans: IndexMap<String, String>,
}

pub(crate) fn default_version() -> u32 {
  1
}

/// Serialization format of a resource, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Yaml,
  Json,
}

impl Format {
  pub fn for_resource(name: &str) -> Format {
    let is_json = std::path::Path::new(name)
      .extension()
      .map(|ext| ext.eq_ignore_ascii_case("json"))
      .unwrap_or(false);
    if is_json {
      Format::Json
    } else {
      Format::Yaml
    }
  }

  pub fn parse<R: std::io::Read>(self, reader: R) -> Result<ConfigRaw, String> {
    match self {
      Format::Yaml => serde_yaml::from_reader(reader).map_err(|e| e.to_string()),
      Format::Json => serde_json::from_reader(reader).map_err(|e| e.to_string()),
    }
  }
}
